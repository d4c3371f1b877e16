//! budget-tracker - Terminal-based personal budget and expense tracker
//!
//! Define a spending ceiling, record expenses against it and see at a glance
//! how much is left. The same state store backs both the command line and
//! the interactive TUI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, ids, the category catalog and expenses
//! - `state`: Reducer over budget actions and the persisting store
//! - `form`: Budget and expense form validation
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `display`: Text formatting for the CLI
//! - `logging`: Diagnostic log setup
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::config::BudgetPaths;
//! use budget_tracker::state::{BudgetAction, BudgetStore, Dispatch};
//! use budget_tracker::models::Money;
//!
//! let paths = BudgetPaths::new()?;
//! let mut store = BudgetStore::open(&paths)?;
//! store.dispatch(BudgetAction::DefineBudget { budget: Money::from_units(500) })?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod logging;
pub mod models;
pub mod state;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
pub use state::{budget_reducer, BudgetAction, BudgetState, BudgetStore, Dispatch};
