//! Persisted budget state
//!
//! The budget ceiling and the expense list are stored together as one JSON
//! document under a fixed key. Session-only state (editing id, open form,
//! category filter) is never written.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::BudgetError;
use crate::models::{Expense, Money};
use crate::state::BudgetState;

use super::file_io::{read_json, write_json_atomic};

/// Serializable form of the budget state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub budget: Money,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl From<&BudgetState> for PersistedState {
    fn from(state: &BudgetState) -> Self {
        Self {
            budget: state.budget,
            expenses: state.expenses.clone(),
        }
    }
}

impl From<PersistedState> for BudgetState {
    fn from(persisted: PersistedState) -> Self {
        BudgetState::restored(persisted.budget, persisted.expenses)
    }
}

/// Repository for the persisted budget state document
#[derive(Debug, Clone)]
pub struct StateRepository {
    path: PathBuf,
}

impl StateRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document; a missing file yields an empty state
    pub fn load(&self) -> Result<PersistedState, BudgetError> {
        read_json(&self.path)
    }

    /// Write the document atomically
    pub fn save(&self, state: &PersistedState) -> Result<(), BudgetError> {
        write_json_atomic(&self.path, state)
    }
}
