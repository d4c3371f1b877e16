//! Expense display formatting
//!
//! Register-style rows for quick listing, a `tabled` table for the CLI and a
//! detail card for a single expense.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::category::icon_path;
use crate::models::Expense;

use super::format::{
    format_currency, format_date_long, format_date_short, truncate, UNKNOWN_CATEGORY, UNKNOWN_ICON,
};

/// Category name for display, with a placeholder for unknown ids
pub fn category_label(expense: &Expense) -> &'static str {
    expense
        .category_info()
        .map(|c| c.name)
        .unwrap_or(UNKNOWN_CATEGORY)
}

/// Icon asset path for an expense's category, with a placeholder icon
pub fn category_icon_path(expense: &Expense) -> String {
    match expense.category_info() {
        Some(category) => category.icon_path(),
        None => icon_path(UNKNOWN_ICON),
    }
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Fecha")]
    date: String,
    #[tabled(rename = "Gasto")]
    name: String,
    #[tabled(rename = "Categoría")]
    category: &'static str,
    #[tabled(rename = "Cantidad")]
    amount: String,
}

/// One-line register row
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    format!(
        "{} {} {:24} {:14} {:>12}",
        expense.id,
        format_date_short(expense.date, &settings.date_format),
        truncate(&expense.expense_name, 24),
        category_label(expense),
        format_currency(expense.amount, &settings.currency_symbol),
    )
}

/// Table of expenses for terminal output
pub fn format_expense_table<'a, I>(expenses: I, settings: &Settings) -> String
where
    I: IntoIterator<Item = &'a Expense>,
{
    let rows: Vec<ExpenseRow> = expenses
        .into_iter()
        .map(|e| ExpenseRow {
            id: e.id.to_string(),
            date: format_date_short(e.date, &settings.date_format),
            name: truncate(&e.expense_name, 32),
            category: category_label(e),
            amount: format_currency(e.amount, &settings.currency_symbol),
        })
        .collect();

    if rows.is_empty() {
        return "No hay gastos todavía.\n".to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::last()).with(Alignment::right()));
    format!("{}\n", table)
}

/// Detail card for a single expense
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Gasto:     {}\n", expense.expense_name));
    output.push_str(&format!("ID:        {}\n", expense.id));
    output.push_str(&format!(
        "Cantidad:  {}\n",
        format_currency(expense.amount, &settings.currency_symbol)
    ));
    output.push_str(&format!("Fecha:     {}\n", format_date_long(expense.date)));
    output.push_str(&format!("Categoría: {}\n", category_label(expense)));
    output.push_str(&format!("Icono:     {}\n", category_icon_path(expense)));

    output
}
