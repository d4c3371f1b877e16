//! Form validation for budget-tracker
//!
//! The forms sit between user input and the store: they hold a draft, parse
//! and validate it, and only dispatch an action once it is acceptable. A
//! rejected submission leaves the state untouched and keeps the message on
//! the form.

pub mod budget;
pub mod expense;

pub use budget::BudgetForm;
pub use expense::ExpenseForm;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::category::resolve_category;
use crate::models::{CategoryId, Money};

/// Date format accepted by the form inputs
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation failures shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Todos los campos son obligatorios")]
    MissingFields,

    #[error("Ese gasto se sale del presupuesto")]
    OverBudget,

    #[error("Cantidad no válida")]
    InvalidAmount,

    #[error("Fecha no válida")]
    InvalidDate,

    #[error("Categoría no válida")]
    InvalidCategory,

    #[error("Presupuesto no válido")]
    InvalidBudget,

    #[error("El presupuesto no cubre lo ya gastado")]
    BudgetBelowSpent,
}

/// Parse an amount typed by the user
///
/// Blank input yields zero, which the expense form then reports as a
/// missing field. Negative amounts are rejected.
pub fn parse_amount(input: &str) -> Result<Money, FormError> {
    if input.trim().is_empty() {
        return Ok(Money::zero());
    }
    match Money::parse(input) {
        Ok(amount) if !amount.is_negative() => Ok(amount),
        _ => Err(FormError::InvalidAmount),
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(input.trim(), INPUT_DATE_FORMAT).map_err(|_| FormError::InvalidDate)
}

/// Resolve a category id or name against the catalog
pub fn parse_category(input: &str) -> Result<CategoryId, FormError> {
    resolve_category(input)
        .map(|c| c.category_id())
        .ok_or(FormError::InvalidCategory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            FormError::MissingFields.to_string(),
            "Todos los campos son obligatorios"
        );
        assert_eq!(
            FormError::OverBudget.to_string(),
            "Ese gasto se sale del presupuesto"
        );
        assert_eq!(
            FormError::BudgetBelowSpent.to_string(),
            "El presupuesto no cubre lo ya gastado"
        );
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50"), Ok(Money::from_cents(1250)));
        assert_eq!(parse_amount(""), Ok(Money::zero()));
        assert_eq!(parse_amount("doce"), Err(FormError::InvalidAmount));
        assert_eq!(parse_amount("-3"), Err(FormError::InvalidAmount));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-09"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
        );
        assert_eq!(parse_date("09/03/2024"), Err(FormError::InvalidDate));
        assert_eq!(parse_date("2024-02-30"), Err(FormError::InvalidDate));
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("5"), Ok(CategoryId::from("5")));
        assert_eq!(parse_category("salud"), Ok(CategoryId::from("6")));
        assert_eq!(parse_category("99"), Err(FormError::InvalidCategory));
    }
}
