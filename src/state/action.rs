//! Actions accepted by the budget store
//!
//! Every state transition is expressed as one of these values and applied
//! through [`Dispatch::dispatch`](super::Dispatch::dispatch).

use crate::models::{CategoryId, DraftExpense, Expense, ExpenseId, Money};

/// All state transitions of the budget tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetAction {
    /// Set the budget ceiling
    DefineBudget { budget: Money },

    /// Open the expense form for a new expense
    ShowModal,

    /// Close the expense form, abandoning any edit in progress
    CloseModal,

    /// Record a new expense under a freshly generated id
    AddExpense { expense: DraftExpense },

    /// Remove the expense with this id
    RemoveExpense { id: ExpenseId },

    /// Load the expense with this id into the form for editing
    GetExpenseById { id: ExpenseId },

    /// Replace the expense carrying the same id
    UpdateExpense { expense: Expense },

    /// Forget the budget and every expense
    ResetApp,

    /// Restrict the rendered list to one category, or show all
    FilterCategory { category: Option<CategoryId> },
}

impl BudgetAction {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::DefineBudget { .. } => "define-budget",
            Self::ShowModal => "show-modal",
            Self::CloseModal => "close-modal",
            Self::AddExpense { .. } => "add-expense",
            Self::RemoveExpense { .. } => "remove-expense",
            Self::GetExpenseById { .. } => "get-expense-by-id",
            Self::UpdateExpense { .. } => "update-expense",
            Self::ResetApp => "reset-app",
            Self::FilterCategory { .. } => "filter-category",
        }
    }
}
