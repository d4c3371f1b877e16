//! Expense form
//!
//! Holds the draft being composed. When the store has an expense selected
//! for editing, the form loads it and remembers its original amount so that
//! the budget check only counts the difference.

use chrono::{Days, NaiveDate};

use crate::error::{BudgetError, BudgetResult};
use crate::models::category::{catalog_index, find_category, CATEGORIES};
use crate::models::{CategoryId, DraftExpense, Expense, ExpenseId, Money};
use crate::state::{BudgetAction, BudgetState, Dispatch, Outcome};

use super::{parse_amount, parse_category, parse_date, FormError};

/// Draft capture and validation for adding or editing an expense
#[derive(Debug, Clone)]
pub struct ExpenseForm {
    draft: DraftExpense,
    /// Amount the edited expense had when it was loaded; zero for new ones
    previous_amount: Money,
    editing: Option<ExpenseId>,
    error: Option<FormError>,
    today: NaiveDate,
}

impl ExpenseForm {
    /// Empty form; `today` is the default date for new drafts
    pub fn new(today: NaiveDate) -> Self {
        Self {
            draft: DraftExpense::empty(today),
            previous_amount: Money::zero(),
            editing: None,
            error: None,
            today,
        }
    }

    /// Follow the store's editing id: load the selected expense, or fall
    /// back to an empty draft once the selection is cleared
    pub fn sync_with(&mut self, state: &BudgetState) {
        match state.editing_expense() {
            Some(expense) if self.editing != Some(expense.id) => self.load(expense),
            Some(_) => {}
            None if self.editing.is_some() => self.reset(),
            None => {}
        }
    }

    /// Seed the form from an existing expense
    pub fn load(&mut self, expense: &Expense) {
        self.draft = expense.to_draft();
        self.previous_amount = expense.amount;
        self.editing = Some(expense.id);
        self.error = None;
    }

    /// Back to an empty draft
    pub fn reset(&mut self) {
        self.draft = DraftExpense::empty(self.today);
        self.previous_amount = Money::zero();
        self.editing = None;
        self.error = None;
    }

    pub fn draft(&self) -> &DraftExpense {
        &self.draft
    }

    pub fn previous_amount(&self) -> Money {
        self.previous_amount
    }

    pub fn editing_id(&self) -> Option<ExpenseId> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Last validation failure, kept until the next edit or submit
    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Editar gasto"
        } else {
            "Nuevo gasto"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Guardar cambios"
        } else {
            "Registrar gasto"
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.expense_name = name.into();
        self.error = None;
    }

    pub fn set_amount(&mut self, amount: Money) {
        self.draft.amount = amount;
        self.error = None;
    }

    pub fn set_category(&mut self, category: Option<CategoryId>) {
        self.draft.category = category;
        self.error = None;
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.draft.date = date;
        self.error = None;
    }

    /// Parse and store an amount typed by the user
    pub fn set_amount_input(&mut self, input: &str) -> Result<(), FormError> {
        let amount = self.record(parse_amount(input))?;
        self.set_amount(amount);
        Ok(())
    }

    /// Parse and store a `YYYY-MM-DD` date
    pub fn set_date_input(&mut self, input: &str) -> Result<(), FormError> {
        let date = self.record(parse_date(input))?;
        self.set_date(date);
        Ok(())
    }

    /// Resolve and store a category id or name
    pub fn set_category_input(&mut self, input: &str) -> Result<(), FormError> {
        let category = self.record(parse_category(input))?;
        self.set_category(Some(category));
        Ok(())
    }

    /// Step through the catalog; an empty selection starts at either end
    pub fn cycle_category(&mut self, forward: bool) {
        let len = CATEGORIES.len();
        let current = self.draft.category.as_ref().and_then(catalog_index);
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.set_category(Some(CATEGORIES[next].category_id()));
    }

    /// Move the date by whole days; out-of-range results are ignored
    pub fn shift_date(&mut self, days: i64) {
        let step = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.draft.date.checked_add_days(step)
        } else {
            self.draft.date.checked_sub_days(step)
        };
        if let Some(date) = shifted {
            self.set_date(date);
        }
    }

    /// Check the draft against the remaining budget
    pub fn validate(&self, remaining: Money) -> Result<(), FormError> {
        if !self.draft.is_complete() {
            return Err(FormError::MissingFields);
        }
        if self.draft.category.as_ref().and_then(find_category).is_none() {
            return Err(FormError::InvalidCategory);
        }
        if self.draft.amount - self.previous_amount > remaining {
            return Err(FormError::OverBudget);
        }
        Ok(())
    }

    /// Validate and dispatch the draft
    ///
    /// Dispatches `UpdateExpense` when editing, `AddExpense` otherwise, and
    /// resets the form afterwards. On a validation failure nothing is
    /// dispatched and the error stays on the form.
    pub fn submit<D: Dispatch + ?Sized>(&mut self, store: &mut D) -> BudgetResult<Outcome> {
        let remaining = store.state().remaining_budget();
        if let Err(err) = self.validate(remaining) {
            tracing::debug!(error = %err, "expense form rejected");
            self.error = Some(err.clone());
            return Err(BudgetError::from(err));
        }

        let draft = self.draft.clone();
        let action = match self.editing {
            Some(id) => BudgetAction::UpdateExpense {
                expense: draft.into_expense_with_id(id),
            },
            None => BudgetAction::AddExpense { expense: draft },
        };

        let outcome = store.dispatch(action)?;
        self.reset();
        Ok(outcome)
    }

    fn record<T>(&mut self, result: Result<T, FormError>) -> Result<T, FormError> {
        if let Err(err) = &result {
            self.error = Some(err.clone());
        }
        result
    }
}
