//! Category CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_category_list, format_currency, format_expense_table};
use crate::error::{BudgetError, BudgetResult};
use crate::models::category::resolve_category;
use crate::models::Money;
use crate::state::{BudgetStore, Dispatch};

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List the category catalog
    List,

    /// Show a category and the expenses recorded under it
    Show {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    store: &BudgetStore,
    settings: &Settings,
    cmd: CategoryCommands,
) -> BudgetResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list());
        }

        CategoryCommands::Show { category } => {
            let found = resolve_category(&category)
                .ok_or_else(|| BudgetError::category_not_found(category.clone()))?;
            let expenses: Vec<_> = store
                .state()
                .expenses
                .iter()
                .filter(|e| e.category.as_str() == found.id)
                .collect();
            let total: Money = expenses.iter().map(|e| e.amount).sum();

            println!("Categoría: {}", found.name);
            println!("  ID:     {}", found.id);
            println!("  Icono:  {}", found.icon_path());
            println!("  Gastos: {}", expenses.len());
            println!("  Total:  {}", format_currency(total, &settings.currency_symbol));
            if !expenses.is_empty() {
                println!();
                print!("{}", format_expense_table(expenses, settings));
            }
        }
    }

    Ok(())
}
