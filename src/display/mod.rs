//! Display formatting for terminal output
//!
//! Pure helpers that turn amounts, dates, expenses and the budget summary
//! into text for the CLI. The TUI reuses the same currency and date helpers.

pub mod expense;
pub mod format;
pub mod summary;

pub use expense::{
    category_icon_path, category_label, format_expense_details, format_expense_row,
    format_expense_table,
};
pub use format::{format_currency, format_date_long, format_date_short, format_percentage};
pub use summary::{format_budget_summary, format_category_list};
