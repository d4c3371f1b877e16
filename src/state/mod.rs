//! Budget state and reducer
//!
//! [`BudgetState`] is the single source of truth for the budget ceiling and
//! the recorded expenses. It is only mutated by applying a [`BudgetAction`];
//! derived figures such as the remaining budget are computed on demand and
//! never stored.

pub mod action;
pub mod store;

pub use action::BudgetAction;
pub use store::{BudgetStore, Dispatch};

use crate::models::{CategoryId, Expense, ExpenseId, Money};

/// What an applied action did to the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The action referenced something absent or repeated the current value
    Unchanged,
    /// The state changed
    Changed(Change),
}

impl Outcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }
}

/// Description of a committed change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    BudgetDefined { before: Money, after: Money },
    ExpenseAdded(Expense),
    ExpenseUpdated { before: Expense, after: Expense },
    ExpenseRemoved(Expense),
    Reset { budget: Money, expenses: Vec<Expense> },
    /// Session-only state (form visibility, editing id, filter)
    View,
}

impl Change {
    /// Whether the change touches the persisted document
    pub fn is_persistent(&self) -> bool {
        !matches!(self, Self::View)
    }
}

/// The budget tracker state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetState {
    /// Budget ceiling
    pub budget: Money,
    /// Expenses in insertion order
    pub expenses: Vec<Expense>,
    /// Expense currently loaded into the form
    pub editing_id: Option<ExpenseId>,
    /// Whether the expense form is open
    pub modal: bool,
    /// Category the list is filtered by
    pub current_category: Option<CategoryId>,
}

impl BudgetState {
    /// State restored from a persisted budget and expense list
    pub fn restored(budget: Money, expenses: Vec<Expense>) -> Self {
        Self {
            budget,
            expenses,
            ..Self::default()
        }
    }

    /// Sum of all expense amounts
    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Budget minus the sum of all expense amounts
    pub fn remaining_budget(&self) -> Money {
        self.budget - self.total_expenses()
    }

    /// Share of the budget already spent, in percent with two decimals
    pub fn spent_percentage(&self) -> f64 {
        if !self.budget.is_positive() {
            return 0.0;
        }
        let pct = self.total_expenses().cents() as f64 / self.budget.cents() as f64 * 100.0;
        (pct * 100.0).round() / 100.0
    }

    /// Whether a budget has been defined yet
    pub fn is_budget_defined(&self) -> bool {
        self.budget.is_positive()
    }

    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Expense currently being edited, if any
    pub fn editing_expense(&self) -> Option<&Expense> {
        self.editing_id.and_then(|id| self.expense(id))
    }

    /// Expenses visible under the current category filter
    pub fn filtered_expenses(&self) -> Vec<&Expense> {
        match &self.current_category {
            Some(category) => self
                .expenses
                .iter()
                .filter(|e| &e.category == category)
                .collect(),
            None => self.expenses.iter().collect(),
        }
    }

    /// Apply an action in place
    pub fn apply(&mut self, action: BudgetAction) -> Outcome {
        match action {
            BudgetAction::DefineBudget { budget } => {
                if budget == self.budget {
                    return Outcome::Unchanged;
                }
                let before = self.budget;
                self.budget = budget;
                Outcome::Changed(Change::BudgetDefined {
                    before,
                    after: budget,
                })
            }

            BudgetAction::ShowModal => {
                if self.modal {
                    return Outcome::Unchanged;
                }
                self.modal = true;
                Outcome::Changed(Change::View)
            }

            BudgetAction::CloseModal => {
                if !self.modal && self.editing_id.is_none() {
                    return Outcome::Unchanged;
                }
                self.modal = false;
                self.editing_id = None;
                Outcome::Changed(Change::View)
            }

            BudgetAction::AddExpense { expense } => {
                let expense = expense.into_expense();
                self.expenses.push(expense.clone());
                self.modal = false;
                Outcome::Changed(Change::ExpenseAdded(expense))
            }

            BudgetAction::RemoveExpense { id } => {
                let Some(index) = self.expenses.iter().position(|e| e.id == id) else {
                    return Outcome::Unchanged;
                };
                let removed = self.expenses.remove(index);
                if self.editing_id == Some(id) {
                    self.editing_id = None;
                    self.modal = false;
                }
                Outcome::Changed(Change::ExpenseRemoved(removed))
            }

            BudgetAction::GetExpenseById { id } => {
                if self.expense(id).is_none() {
                    return Outcome::Unchanged;
                }
                self.editing_id = Some(id);
                self.modal = true;
                Outcome::Changed(Change::View)
            }

            BudgetAction::UpdateExpense { expense } => {
                let Some(slot) = self.expenses.iter_mut().find(|e| e.id == expense.id) else {
                    return Outcome::Unchanged;
                };
                let before = std::mem::replace(slot, expense.clone());
                self.editing_id = None;
                self.modal = false;
                Outcome::Changed(Change::ExpenseUpdated {
                    before,
                    after: expense,
                })
            }

            BudgetAction::ResetApp => {
                if self.budget.is_zero() && self.expenses.is_empty() {
                    return Outcome::Unchanged;
                }
                let budget = std::mem::take(&mut self.budget);
                let expenses = std::mem::take(&mut self.expenses);
                self.editing_id = None;
                self.modal = false;
                self.current_category = None;
                Outcome::Changed(Change::Reset { budget, expenses })
            }

            BudgetAction::FilterCategory { category } => {
                if self.current_category == category {
                    return Outcome::Unchanged;
                }
                self.current_category = category;
                Outcome::Changed(Change::View)
            }
        }
    }
}

/// Pure reducer: consume a state and an action, return the next state
pub fn budget_reducer(mut state: BudgetState, action: BudgetAction) -> BudgetState {
    state.apply(action);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DraftExpense;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn draft(name: &str, units: i64, category: &str) -> DraftExpense {
        DraftExpense::new(name, Money::from_units(units), category.into(), day(1))
    }

    fn state_with(budget: i64, expenses: &[(&str, i64)]) -> BudgetState {
        let mut state = BudgetState::default();
        state.apply(BudgetAction::DefineBudget {
            budget: Money::from_units(budget),
        });
        for (name, amount) in expenses {
            state.apply(BudgetAction::AddExpense {
                expense: draft(name, *amount, "2"),
            });
        }
        state
    }

    fn assert_remaining_consistent(state: &BudgetState) {
        let sum: Money = state.expenses.iter().map(|e| e.amount).sum();
        assert_eq!(state.remaining_budget(), state.budget - sum);
    }

    #[test]
    fn test_add_expense_reduces_remaining() {
        let state = state_with(500, &[("Compra", 100)]);
        assert_eq!(state.expenses.len(), 1);
        assert_eq!(state.remaining_budget(), Money::from_units(400));
        assert_eq!(state.total_expenses(), Money::from_units(100));
    }

    #[test]
    fn test_add_generates_unique_ids() {
        let state = state_with(500, &[("A", 1), ("B", 1), ("C", 1)]);
        let ids: std::collections::HashSet<_> = state.expenses.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_add_closes_modal() {
        let mut state = state_with(500, &[]);
        state.apply(BudgetAction::ShowModal);
        assert!(state.modal);
        state.apply(BudgetAction::AddExpense {
            expense: draft("Pan", 2, "2"),
        });
        assert!(!state.modal);
    }

    #[test]
    fn test_remaining_consistent_across_sequences() {
        let mut state = state_with(1000, &[("A", 100), ("B", 250), ("C", 75)]);
        assert_remaining_consistent(&state);

        let second = state.expenses[1].clone();
        state.apply(BudgetAction::UpdateExpense {
            expense: Expense {
                amount: Money::from_units(10),
                ..second
            },
        });
        assert_remaining_consistent(&state);

        let first = state.expenses[0].id;
        state.apply(BudgetAction::RemoveExpense { id: first });
        assert_remaining_consistent(&state);
        assert_eq!(state.remaining_budget(), Money::from_units(915));

        state.apply(BudgetAction::RemoveExpense { id: ExpenseId::new() });
        assert_remaining_consistent(&state);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut state = state_with(500, &[("A", 10), ("B", 20)]);
        let before = state.clone();

        let outcome = state.apply(BudgetAction::RemoveExpense { id: ExpenseId::new() });

        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(state.expenses.len(), 2);
        assert_eq!(state, before);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut state = state_with(500, &[("A", 10)]);
        let target = state.expenses[0].id;
        state.apply(BudgetAction::GetExpenseById { id: target });
        let before = state.clone();

        let stranger = draft("Ghost", 99, "1").into_expense();
        let outcome = state.apply(BudgetAction::UpdateExpense { expense: stranger });

        // Editing id is left alone as well: nothing at all changes.
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(state, before);
        assert_eq!(state.editing_id, Some(target));
    }

    #[test]
    fn test_select_then_update_preserves_id_and_position() {
        let mut state = state_with(500, &[("A", 10), ("B", 20), ("C", 30)]);
        let target = state.expenses[1].clone();

        state.apply(BudgetAction::GetExpenseById { id: target.id });
        assert_eq!(state.editing_id, Some(target.id));
        assert!(state.modal);

        let edited = Expense {
            expense_name: "B editado".into(),
            amount: Money::from_units(25),
            category: "6".into(),
            date: day(20),
            ..target.clone()
        };
        let outcome = state.apply(BudgetAction::UpdateExpense {
            expense: edited.clone(),
        });

        assert!(matches!(
            outcome,
            Outcome::Changed(Change::ExpenseUpdated { ref before, .. }) if before == &target
        ));
        assert_eq!(state.expenses[1], edited);
        assert_eq!(state.expenses[1].id, target.id);
        assert_eq!(state.expenses.len(), 3);
        assert_eq!(state.editing_id, None);
        assert!(!state.modal);
    }

    #[test]
    fn test_get_unknown_id_keeps_editing_invariant() {
        let mut state = state_with(500, &[("A", 10)]);
        let outcome = state.apply(BudgetAction::GetExpenseById { id: ExpenseId::new() });
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(state.editing_id, None);
    }

    #[test]
    fn test_removing_edited_expense_clears_editing_id() {
        let mut state = state_with(500, &[("A", 10), ("B", 20)]);
        let target = state.expenses[0].id;
        state.apply(BudgetAction::GetExpenseById { id: target });

        state.apply(BudgetAction::RemoveExpense { id: target });

        assert_eq!(state.editing_id, None);
        assert!(!state.modal);
        assert!(state.editing_expense().is_none());
    }

    #[test]
    fn test_close_modal_clears_editing() {
        let mut state = state_with(500, &[("A", 10)]);
        let target = state.expenses[0].id;
        state.apply(BudgetAction::GetExpenseById { id: target });

        assert_eq!(
            state.apply(BudgetAction::CloseModal),
            Outcome::Changed(Change::View)
        );
        assert_eq!(state.editing_id, None);
        assert_eq!(state.apply(BudgetAction::CloseModal), Outcome::Unchanged);
    }

    #[test]
    fn test_reset_app() {
        let mut state = state_with(500, &[("A", 10)]);
        state.apply(BudgetAction::FilterCategory {
            category: Some("2".into()),
        });

        let outcome = state.apply(BudgetAction::ResetApp);

        assert!(matches!(outcome, Outcome::Changed(Change::Reset { ref expenses, .. }) if expenses.len() == 1));
        assert_eq!(state, BudgetState::default());
        assert_eq!(state.apply(BudgetAction::ResetApp), Outcome::Unchanged);
    }

    #[test]
    fn test_filter_does_not_affect_remaining() {
        let mut state = BudgetState::default();
        state.apply(BudgetAction::DefineBudget {
            budget: Money::from_units(300),
        });
        state.apply(BudgetAction::AddExpense { expense: draft("Pan", 10, "2") });
        state.apply(BudgetAction::AddExpense { expense: draft("Cine", 20, "5") });
        state.apply(BudgetAction::AddExpense { expense: draft("Leche", 5, "2") });

        state.apply(BudgetAction::FilterCategory {
            category: Some("2".into()),
        });

        let names: Vec<_> = state
            .filtered_expenses()
            .iter()
            .map(|e| e.expense_name.as_str())
            .collect();
        assert_eq!(names, vec!["Pan", "Leche"]);
        assert_eq!(state.remaining_budget(), Money::from_units(265));

        state.apply(BudgetAction::FilterCategory { category: None });
        assert_eq!(state.filtered_expenses().len(), 3);
    }

    #[test]
    fn test_spent_percentage() {
        let state = state_with(300, &[("A", 100)]);
        assert_eq!(state.spent_percentage(), 33.33);
        assert_eq!(BudgetState::default().spent_percentage(), 0.0);
    }

    #[test]
    fn test_define_same_budget_unchanged() {
        let mut state = state_with(500, &[]);
        assert_eq!(
            state.apply(BudgetAction::DefineBudget {
                budget: Money::from_units(500)
            }),
            Outcome::Unchanged
        );
        assert!(state.is_budget_defined());
    }

    #[test]
    fn test_budget_reducer_is_pure_over_owned_state() {
        let state = state_with(500, &[]);
        let next = budget_reducer(
            state.clone(),
            BudgetAction::AddExpense {
                expense: draft("Agua", 3, "3"),
            },
        );
        assert!(state.expenses.is_empty());
        assert_eq!(next.expenses.len(), 1);
    }

    #[test]
    fn test_change_persistence_flags() {
        assert!(!Change::View.is_persistent());
        assert!(Change::BudgetDefined {
            before: Money::zero(),
            after: Money::from_units(1)
        }
        .is_persistent());
    }
}
