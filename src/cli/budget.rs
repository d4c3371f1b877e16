//! Budget CLI commands
//!
//! Define, inspect and reset the budget ceiling.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_budget_summary;
use crate::error::BudgetResult;
use crate::form::BudgetForm;
use crate::state::{BudgetAction, BudgetStore, Dispatch, Outcome};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Define the budget ceiling (e.g., "500" or "1,250.00")
    Set {
        /// Budget amount
        amount: String,
    },

    /// Show budget, spent amount and remaining budget
    Show,

    /// Discard the budget and every expense
    Reset {
        /// Skip the safety check
        #[arg(long)]
        force: bool,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &mut BudgetStore,
    settings: &Settings,
    cmd: BudgetCommands,
) -> BudgetResult<()> {
    match cmd {
        BudgetCommands::Set { amount } => {
            let mut form = BudgetForm::new();
            form.set_input(amount);
            match form.submit(store)? {
                Outcome::Changed(_) => println!("Presupuesto definido: {}", store.state().budget),
                Outcome::Unchanged => println!("El presupuesto ya era {}", store.state().budget),
            }
            print!("{}", format_budget_summary(store.state(), settings));
        }

        BudgetCommands::Show => {
            print!("{}", format_budget_summary(store.state(), settings));
        }

        BudgetCommands::Reset { force } => {
            if !force {
                println!(
                    "Esto borrará el presupuesto y {} gastos.",
                    store.state().expenses.len()
                );
                println!("Vuelve a ejecutar con --force para confirmar.");
                return Ok(());
            }
            match store.dispatch(BudgetAction::ResetApp)? {
                Outcome::Changed(_) => println!("Aplicación reiniciada."),
                Outcome::Unchanged => println!("No había nada que reiniciar."),
            }
        }
    }

    Ok(())
}
