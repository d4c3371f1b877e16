//! Expense model
//!
//! A [`DraftExpense`] is what the form composes; committing it through the
//! store assigns an [`ExpenseId`] and produces an [`Expense`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::{find_category, Category};
use super::ids::{CategoryId, ExpenseId};
use super::money::Money;

/// An expense being composed or edited, not yet assigned an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftExpense {
    pub expense_name: String,
    pub amount: Money,
    /// `None` until the user picks a category
    pub category: Option<CategoryId>,
    pub date: NaiveDate,
}

impl DraftExpense {
    /// Empty draft dated `today`
    pub fn empty(today: NaiveDate) -> Self {
        Self {
            expense_name: String::new(),
            amount: Money::zero(),
            category: None,
            date: today,
        }
    }

    pub fn new(
        expense_name: impl Into<String>,
        amount: Money,
        category: CategoryId,
        date: NaiveDate,
    ) -> Self {
        Self {
            expense_name: expense_name.into(),
            amount,
            category: Some(category),
            date,
        }
    }

    /// True when every field carries a value (name, non-zero amount, category)
    pub fn is_complete(&self) -> bool {
        !self.expense_name.trim().is_empty()
            && self.amount.is_positive()
            && self
                .category
                .as_ref()
                .is_some_and(|c| !c.as_str().is_empty())
    }

    /// Commit the draft under a fresh id
    pub(crate) fn into_expense(self) -> Expense {
        self.into_expense_with_id(ExpenseId::new())
    }

    pub(crate) fn into_expense_with_id(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            expense_name: self.expense_name.trim().to_string(),
            amount: self.amount,
            category: self.category.unwrap_or_else(|| CategoryId::new("")),
            date: self.date,
        }
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub expense_name: String,
    pub amount: Money,
    pub category: CategoryId,
    pub date: NaiveDate,
}

impl Expense {
    /// Catalog entry for this expense, if the id resolves
    pub fn category_info(&self) -> Option<&'static Category> {
        find_category(&self.category)
    }

    /// Draft carrying this expense's fields, used to seed the edit form
    pub fn to_draft(&self) -> DraftExpense {
        DraftExpense {
            expense_name: self.expense_name.clone(),
            amount: self.amount,
            category: Some(self.category.clone()),
            date: self.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_empty_draft_is_incomplete() {
        assert!(!DraftExpense::empty(date()).is_complete());
    }

    #[test]
    fn test_complete_draft() {
        let draft = DraftExpense::new("Cine", Money::from_units(12), "5".into(), date());
        assert!(draft.is_complete());
    }

    #[test]
    fn test_zero_or_blank_fields_incomplete() {
        let mut draft = DraftExpense::new("Cine", Money::zero(), "5".into(), date());
        assert!(!draft.is_complete());

        draft.amount = Money::from_units(5);
        draft.expense_name = "   ".into();
        assert!(!draft.is_complete());

        draft.expense_name = "Cine".into();
        draft.category = Some(CategoryId::new(""));
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_into_expense_assigns_id_and_trims() {
        let draft = DraftExpense::new("  Pan ", Money::from_units(2), "2".into(), date());
        let expense = draft.into_expense();
        assert_eq!(expense.expense_name, "Pan");
        assert_eq!(expense.category_info().unwrap().name, "Comida");
        assert!(!expense.id.as_uuid().is_nil());
    }

    #[test]
    fn test_to_draft_round_trips_fields() {
        let expense = DraftExpense::new("Luz", Money::from_units(40), "3".into(), date())
            .into_expense();
        let draft = expense.to_draft();
        assert_eq!(draft.expense_name, "Luz");
        assert_eq!(draft.amount, Money::from_units(40));
        assert_eq!(draft.category, Some(CategoryId::from("3")));
    }
}
