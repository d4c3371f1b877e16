//! Budget store
//!
//! Owns the [`BudgetState`] and is its only writer. Components read a
//! snapshot through [`Dispatch::state`] and request changes through
//! [`Dispatch::dispatch`]; each committed change is persisted and audited
//! before `dispatch` returns.

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::BudgetPaths;
use crate::error::BudgetResult;
use crate::storage::{PersistedState, StateRepository};

use super::{BudgetAction, BudgetState, Change, Outcome};

/// Read access to the state plus the ability to request transitions
pub trait Dispatch {
    /// Current state snapshot
    fn state(&self) -> &BudgetState;

    /// Apply an action; returns what changed
    fn dispatch(&mut self, action: BudgetAction) -> BudgetResult<Outcome>;
}

/// Owns the budget state, its persisted document and the audit log
#[derive(Debug)]
pub struct BudgetStore {
    state: BudgetState,
    repository: Option<StateRepository>,
    audit: Option<AuditLogger>,
}

impl BudgetStore {
    /// Open the store at the configured paths, restoring persisted state
    pub fn open(paths: &BudgetPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;
        Self::load(
            StateRepository::new(paths.state_file()),
            Some(AuditLogger::new(paths.audit_log())),
        )
    }

    /// Restore state from a repository
    pub fn load(repository: StateRepository, audit: Option<AuditLogger>) -> BudgetResult<Self> {
        let state: BudgetState = repository.load()?.into();
        tracing::info!(
            path = %repository.path().display(),
            expenses = state.expenses.len(),
            "budget state loaded"
        );
        Ok(Self {
            state,
            repository: Some(repository),
            audit,
        })
    }

    /// Store without persistence or auditing
    pub fn in_memory(state: BudgetState) -> Self {
        Self {
            state,
            repository: None,
            audit: None,
        }
    }

    /// Write `next` to disk; the audit entry is only logged once the
    /// document is saved
    fn commit(&self, next: &BudgetState, change: &Change) -> BudgetResult<()> {
        if let Some(repository) = &self.repository {
            repository.save(&PersistedState::from(next))?;
        }
        if let Some(audit) = &self.audit {
            if let Some(entry) = audit_entry(change) {
                audit.log(&entry)?;
            }
        }
        Ok(())
    }
}

impl Dispatch for BudgetStore {
    fn state(&self) -> &BudgetState {
        &self.state
    }

    fn dispatch(&mut self, action: BudgetAction) -> BudgetResult<Outcome> {
        let name = action.name();
        let references_expense = matches!(
            action,
            BudgetAction::UpdateExpense { .. }
                | BudgetAction::RemoveExpense { .. }
                | BudgetAction::GetExpenseById { .. }
        );

        // Reduce a copy so a failed save leaves memory matching the disk
        let mut next = self.state.clone();
        let outcome = next.apply(action);

        match &outcome {
            Outcome::Unchanged if references_expense => {
                tracing::warn!(action = name, "expense not found; state unchanged");
            }
            Outcome::Unchanged => {
                tracing::debug!(action = name, "no-op");
            }
            Outcome::Changed(change) => {
                tracing::debug!(action = name, "state changed");
                if change.is_persistent() {
                    if let Err(err) = self.commit(&next, change) {
                        tracing::error!(action = name, error = %err, "change not committed");
                        return Err(err);
                    }
                }
                self.state = next;
            }
        }

        Ok(outcome)
    }
}

fn audit_entry(change: &Change) -> Option<AuditEntry> {
    let entry = match change {
        Change::BudgetDefined { before, after } if before.is_zero() => {
            AuditEntry::create(EntityType::Budget, "budget", None, after)
        }
        Change::BudgetDefined { before, after } => AuditEntry::update(
            EntityType::Budget,
            "budget",
            None,
            before,
            after,
            Some(format!("{} -> {}", before, after)),
        ),
        Change::ExpenseAdded(expense) => AuditEntry::create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.expense_name.clone()),
            expense,
        ),
        Change::ExpenseUpdated { before, after } => {
            let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
                (Ok(b), Ok(a)) => generate_diff(&b, &a),
                _ => None,
            };
            AuditEntry::update(
                EntityType::Expense,
                after.id.to_string(),
                Some(after.expense_name.clone()),
                before,
                after,
                diff,
            )
        }
        Change::ExpenseRemoved(expense) => AuditEntry::delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.expense_name.clone()),
            expense,
        ),
        Change::Reset { budget, expenses } => AuditEntry::reset(
            &PersistedState {
                budget: *budget,
                expenses: expenses.clone(),
            },
            format!("budget {} and {} expenses discarded", budget, expenses.len()),
        ),
        Change::View => return None,
    };
    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{DraftExpense, Expense, ExpenseId, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn draft(name: &str, units: i64) -> DraftExpense {
        DraftExpense::new(
            name,
            Money::from_units(units),
            "2".into(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        )
    }

    fn open_store(temp: &TempDir) -> BudgetStore {
        BudgetStore::open(&BudgetPaths::with_base_dir(temp.path().to_path_buf())).unwrap()
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(&temp);

        store
            .dispatch(BudgetAction::DefineBudget {
                budget: Money::from_units(500),
            })
            .unwrap();
        store
            .dispatch(BudgetAction::AddExpense {
                expense: draft("Mercado", 100),
            })
            .unwrap();

        let reopened = open_store(&temp);
        assert_eq!(reopened.state().budget, Money::from_units(500));
        assert_eq!(reopened.state().expenses.len(), 1);
        assert_eq!(reopened.state().remaining_budget(), Money::from_units(400));
    }

    #[test]
    fn test_view_changes_are_not_persisted() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(&temp);
        store.dispatch(BudgetAction::ShowModal).unwrap();

        let paths = BudgetPaths::with_base_dir(temp.path().to_path_buf());
        assert!(!paths.state_file().exists());
        assert!(store.state().modal);
    }

    #[test]
    fn test_changes_are_audited() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(&temp);

        store
            .dispatch(BudgetAction::DefineBudget {
                budget: Money::from_units(200),
            })
            .unwrap();
        store
            .dispatch(BudgetAction::AddExpense {
                expense: draft("Pan", 3),
            })
            .unwrap();
        let expense = store.state().expenses[0].clone();
        store
            .dispatch(BudgetAction::UpdateExpense {
                expense: Expense {
                    amount: Money::from_units(4),
                    ..expense.clone()
                },
            })
            .unwrap();
        store
            .dispatch(BudgetAction::RemoveExpense { id: expense.id })
            .unwrap();
        store.dispatch(BudgetAction::ResetApp).unwrap();

        let logger = AuditLogger::new(temp.path().join("audit.log"));
        let ops: Vec<_> = logger
            .read_all()
            .unwrap()
            .iter()
            .map(|e| (e.entity_type, e.operation))
            .collect();
        assert_eq!(
            ops,
            vec![
                (EntityType::Budget, Operation::Create),
                (EntityType::Expense, Operation::Create),
                (EntityType::Expense, Operation::Update),
                (EntityType::Expense, Operation::Delete),
                (EntityType::Budget, Operation::Reset),
            ]
        );

        let update = &logger.read_all().unwrap()[2];
        assert_eq!(update.diff_summary.as_deref(), Some("amount: 300 -> 400"));
    }

    #[test]
    fn test_unknown_id_returns_unchanged_without_writing() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(&temp);

        let outcome = store
            .dispatch(BudgetAction::RemoveExpense { id: ExpenseId::new() })
            .unwrap();

        assert_eq!(outcome, Outcome::Unchanged);
        assert!(!temp.path().join("audit.log").exists());
    }

    #[test]
    fn test_failed_save_keeps_previous_state() {
        let temp = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp.path().to_path_buf());
        let mut store = open_store(&temp);
        store
            .dispatch(BudgetAction::DefineBudget {
                budget: Money::from_units(500),
            })
            .unwrap();

        // A directory where the temp file goes makes the atomic write fail
        std::fs::create_dir_all(paths.state_file().with_extension("json.tmp")).unwrap();

        let result = store.dispatch(BudgetAction::AddExpense {
            expense: draft("Cine", 20),
        });
        assert!(result.is_err());
        assert!(store.state().expenses.is_empty());
        assert_eq!(store.state().budget, Money::from_units(500));

        let reopened = open_store(&temp);
        assert_eq!(reopened.state(), store.state());
        let audited = AuditLogger::new(paths.audit_log()).read_all().unwrap();
        assert_eq!(audited.len(), 1);
    }

    #[test]
    fn test_in_memory_store() {
        let mut store = BudgetStore::in_memory(BudgetState::default());
        let outcome = store
            .dispatch(BudgetAction::DefineBudget {
                budget: Money::from_units(10),
            })
            .unwrap();
        assert!(outcome.is_changed());
        assert_eq!(store.state().budget, Money::from_units(10));
    }
}
