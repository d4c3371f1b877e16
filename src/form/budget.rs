//! Budget definition form

use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;
use crate::state::{BudgetAction, Dispatch, Outcome};

use super::FormError;

/// Captures the budget ceiling as typed text
#[derive(Debug, Clone, Default)]
pub struct BudgetForm {
    input: String,
    error: Option<FormError>,
}

impl BudgetForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefilled with an existing budget, empty when none is defined
    pub fn with_budget(budget: Money) -> Self {
        let input = if budget.is_positive() {
            budget.to_input_string()
        } else {
            String::new()
        };
        Self { input, error: None }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
        self.error = None;
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// Parse the input; the budget must be strictly positive and cover
    /// what is already `spent`
    pub fn validate(&self, spent: Money) -> Result<Money, FormError> {
        match Money::parse(&self.input) {
            Ok(budget) if !budget.is_positive() => Err(FormError::InvalidBudget),
            Ok(budget) if budget < spent => Err(FormError::BudgetBelowSpent),
            Ok(budget) => Ok(budget),
            Err(_) => Err(FormError::InvalidBudget),
        }
    }

    /// Validate and dispatch `DefineBudget`
    pub fn submit<D: Dispatch + ?Sized>(&mut self, store: &mut D) -> BudgetResult<Outcome> {
        let spent = store.state().total_expenses();
        let budget = match self.validate(spent) {
            Ok(budget) => budget,
            Err(err) => {
                self.error = Some(err.clone());
                return Err(BudgetError::from(err));
            }
        };
        store.dispatch(BudgetAction::DefineBudget { budget })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ExpenseForm;
    use crate::models::CategoryId;
    use crate::state::{BudgetState, BudgetStore};
    use chrono::NaiveDate;

    #[test]
    fn test_submit_defines_budget() {
        let mut store = BudgetStore::in_memory(BudgetState::default());
        let mut form = BudgetForm::new();
        form.set_input("1,500.50");

        assert!(form.submit(&mut store).unwrap().is_changed());
        assert_eq!(store.state().budget, Money::from_cents(150_050));
    }

    #[test]
    fn test_rejects_non_positive_and_garbage() {
        let mut store = BudgetStore::in_memory(BudgetState::default());
        for input in ["", "0", "-20", "abc"] {
            let mut form = BudgetForm::new();
            form.set_input(input);
            assert_eq!(form.validate(Money::zero()), Err(FormError::InvalidBudget));
            assert!(form.submit(&mut store).is_err());
            assert_eq!(form.error(), Some(&FormError::InvalidBudget));
        }
        assert!(!store.state().is_budget_defined());
    }

    #[test]
    fn test_budget_must_cover_spent() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let mut store = BudgetStore::in_memory(BudgetState::default());
        let mut form = BudgetForm::new();
        form.set_input("500");
        form.submit(&mut store).unwrap();

        let mut expense = ExpenseForm::new(today);
        expense.set_name("Alquiler");
        expense.set_amount(Money::from_units(400));
        expense.set_category(Some(CategoryId::from("3")));
        expense.submit(&mut store).unwrap();

        form.set_input("100");
        assert!(form.submit(&mut store).is_err());
        assert_eq!(form.error(), Some(&FormError::BudgetBelowSpent));
        assert_eq!(store.state().budget, Money::from_units(500));
        assert_eq!(store.state().remaining_budget(), Money::from_units(100));

        form.set_input("400");
        assert!(form.submit(&mut store).unwrap().is_changed());
        assert!(store.state().remaining_budget().is_zero());
    }

    #[test]
    fn test_with_budget_prefill() {
        assert_eq!(BudgetForm::with_budget(Money::from_units(300)).input(), "300.00");
        assert_eq!(BudgetForm::with_budget(Money::zero()).input(), "");
    }
}
