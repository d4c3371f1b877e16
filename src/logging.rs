//! Diagnostic logging
//!
//! Installs a `tracing` subscriber writing plain-text lines to
//! `<base>/budget-tracker.log`. The terminal is never written to, so the TUI
//! stays intact. Verbosity follows `RUST_LOG` and defaults to
//! `budget_tracker=info`.

use std::fs::OpenOptions;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};

const DEFAULT_FILTER: &str = "budget_tracker=info";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber; later calls are no-ops
pub fn init_tracing(paths: &BudgetPaths) -> BudgetResult<()> {
    let mut result = Ok(());
    TRACING_INIT.call_once(|| result = install(paths));
    result
}

fn install(paths: &BudgetPaths) -> BudgetResult<()> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.diagnostic_log())
        .map_err(|e| BudgetError::Io(format!("Failed to open diagnostic log: {}", e)))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| BudgetError::Config(format!("Failed to install logger: {}", e)))
}
