//! Expense CLI commands
//!
//! Every write goes through [`ExpenseForm`], so the CLI applies the same
//! validation (required fields, budget overflow) as the TUI.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{
    format_currency, format_expense_details, format_expense_row, format_expense_table,
};
use crate::error::{BudgetError, BudgetResult};
use crate::form::{parse_category, ExpenseForm, FormError};
use crate::models::{Expense, Money};
use crate::state::{BudgetAction, BudgetStore, Change, Dispatch, Outcome};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Expense name
        name: String,
        /// Amount (e.g., "12.50")
        amount: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses
    #[command(alias = "ls")]
    List {
        /// Only show expenses in this category (name or ID)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show expense details
    Show {
        /// Expense ID (full, exp-xxxxxxxx or a prefix)
        expense: String,
    },

    /// Edit an expense
    Edit {
        /// Expense ID
        expense: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Remove an expense
    #[command(alias = "rm")]
    Remove {
        /// Expense ID
        expense: String,
    },
}

/// Handle an expense command; `today` is the default date for new expenses
pub fn handle_expense_command(
    store: &mut BudgetStore,
    settings: &Settings,
    today: NaiveDate,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
            date,
        } => {
            let mut form = ExpenseForm::new(today);
            form.set_name(name);
            form.set_amount_input(&amount)?;
            form.set_category_input(&category)?;
            if let Some(date) = date {
                form.set_date_input(&date)?;
            }

            if let Outcome::Changed(Change::ExpenseAdded(expense)) = form.submit(store)? {
                println!("Gasto registrado: {} ({})", expense.expense_name, expense.id);
            }
            println!(
                "Disponible: {}",
                format_currency(store.state().remaining_budget(), &settings.currency_symbol)
            );
        }

        ExpenseCommands::List { category } => {
            if let Some(category) = category {
                let category = parse_category(&category)?;
                store.dispatch(BudgetAction::FilterCategory {
                    category: Some(category),
                })?;
            }

            let state = store.state();
            let visible = state.filtered_expenses();
            let total: Money = visible.iter().map(|e| e.amount).sum();
            let count = visible.len();

            print!("{}", format_expense_table(visible, settings));
            if count > 0 {
                println!(
                    "{} gastos, total {}",
                    count,
                    format_currency(total, &settings.currency_symbol)
                );
            }
        }

        ExpenseCommands::Show { expense } => {
            let found = find_expense(store, &expense)?;
            print!("{}", format_expense_details(found, settings));
        }

        ExpenseCommands::Edit {
            expense,
            name,
            amount,
            category,
            date,
        } => {
            let id = find_expense(store, &expense)?.id;
            store.dispatch(BudgetAction::GetExpenseById { id })?;

            let mut form = ExpenseForm::new(today);
            form.sync_with(store.state());

            let result = apply_edits(&mut form, name, amount, category, date)
                .map_err(BudgetError::from)
                .and_then(|()| form.submit(store));

            match result {
                Ok(Outcome::Changed(Change::ExpenseUpdated { after, .. })) => {
                    println!("Gasto actualizado: {} ({})", after.expense_name, after.id);
                }
                Ok(_) => {}
                Err(err) => {
                    store.dispatch(BudgetAction::CloseModal)?;
                    return Err(err);
                }
            }
        }

        ExpenseCommands::Remove { expense } => {
            let id = find_expense(store, &expense)?.id;
            if let Outcome::Changed(Change::ExpenseRemoved(removed)) =
                store.dispatch(BudgetAction::RemoveExpense { id })?
            {
                println!("Gasto eliminado:");
                println!("  {}", format_expense_row(&removed, settings));
            }
        }
    }

    Ok(())
}

fn apply_edits(
    form: &mut ExpenseForm,
    name: Option<String>,
    amount: Option<String>,
    category: Option<String>,
    date: Option<String>,
) -> Result<(), FormError> {
    if let Some(name) = name {
        form.set_name(name);
    }
    if let Some(amount) = amount {
        form.set_amount_input(&amount)?;
    }
    if let Some(category) = category {
        form.set_category_input(&category)?;
    }
    if let Some(date) = date {
        form.set_date_input(&date)?;
    }
    Ok(())
}

/// Resolve a user-supplied identifier to exactly one expense
fn find_expense<'a>(store: &'a BudgetStore, identifier: &str) -> BudgetResult<&'a Expense> {
    let matches: Vec<&Expense> = store
        .state()
        .expenses
        .iter()
        .filter(|e| e.id.matches(identifier))
        .collect();

    match matches.as_slice() {
        [expense] => Ok(*expense),
        [] => Err(BudgetError::expense_not_found(identifier)),
        _ => Err(BudgetError::Validation(format!(
            "El identificador '{}' coincide con {} gastos",
            identifier,
            matches.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;
    use crate::state::BudgetState;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 2).unwrap()
    }

    fn store() -> BudgetStore {
        let mut store = BudgetStore::in_memory(BudgetState::default());
        store
            .dispatch(BudgetAction::DefineBudget {
                budget: Money::from_units(100),
            })
            .unwrap();
        store
    }

    fn add(store: &mut BudgetStore, name: &str, amount: &str) -> BudgetResult<()> {
        handle_expense_command(
            store,
            &Settings::default(),
            today(),
            ExpenseCommands::Add {
                name: name.into(),
                amount: amount.into(),
                category: "comida".into(),
                date: None,
            },
        )
    }

    #[test]
    fn test_add_uses_form_validation() {
        let mut store = store();
        add(&mut store, "Pan", "2.50").unwrap();
        assert_eq!(store.state().expenses[0].date, today());

        let err = add(&mut store, "Caviar", "500").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Ese gasto se sale del presupuesto"
        );
        assert_eq!(store.state().expenses.len(), 1);
    }

    #[test]
    fn test_edit_failure_closes_form() {
        let mut store = store();
        add(&mut store, "Luz", "50").unwrap();
        let id = store.state().expenses[0].id.to_string();

        let err = handle_expense_command(
            &mut store,
            &Settings::default(),
            today(),
            ExpenseCommands::Edit {
                expense: id,
                name: None,
                amount: Some("200".into()),
                category: None,
                date: None,
            },
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(store.state().editing_id, None);
        assert!(!store.state().modal);
        assert_eq!(store.state().expenses[0].amount, Money::from_units(50));
    }

    #[test]
    fn test_edit_and_remove_by_short_id() {
        let mut store = store();
        add(&mut store, "Luz", "50").unwrap();
        let short = store.state().expenses[0].id.to_string();

        handle_expense_command(
            &mut store,
            &Settings::default(),
            today(),
            ExpenseCommands::Edit {
                expense: short.clone(),
                name: Some("Luz y gas".into()),
                amount: Some("60".into()),
                category: None,
                date: None,
            },
        )
        .unwrap();
        assert_eq!(store.state().expenses[0].expense_name, "Luz y gas");
        assert_eq!(store.state().remaining_budget(), Money::from_units(40));

        handle_expense_command(
            &mut store,
            &Settings::default(),
            today(),
            ExpenseCommands::Remove { expense: short },
        )
        .unwrap();
        assert!(store.state().expenses.is_empty());
    }

    #[test]
    fn test_unknown_expense_is_not_found() {
        let mut store = store();
        let err = handle_expense_command(
            &mut store,
            &Settings::default(),
            today(),
            ExpenseCommands::Remove {
                expense: ExpenseId::new().to_string(),
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
