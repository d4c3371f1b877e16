//! Core data models for budget-tracker
//!
//! This module contains the data structures of the budgeting domain:
//! the static category catalog, expenses and money amounts.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{find_category, Category, CATEGORIES};
pub use expense::{DraftExpense, Expense};
pub use ids::{CategoryId, ExpenseId};
pub use money::{Money, MoneyParseError};
