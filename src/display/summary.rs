//! Budget summary and category catalog output

use crate::config::Settings;
use crate::models::CATEGORIES;
use crate::state::BudgetState;

use super::format::{format_bar, format_currency, format_percentage};

const BAR_WIDTH: usize = 30;

/// Budget, spent, remaining and spent percentage
pub fn format_budget_summary(state: &BudgetState, settings: &Settings) -> String {
    if !state.is_budget_defined() {
        return "No hay presupuesto definido. Usa `budget set <cantidad>`.\n".to_string();
    }

    let symbol = settings.currency_symbol.as_str();
    let pct = state.spent_percentage();
    let mut output = String::new();

    output.push_str(&format!(
        "Presupuesto: {:>14}\n",
        format_currency(state.budget, symbol)
    ));
    output.push_str(&format!(
        "Gastado:     {:>14}\n",
        format_currency(state.total_expenses(), symbol)
    ));
    output.push_str(&format!(
        "Disponible:  {:>14}\n",
        format_currency(state.remaining_budget(), symbol)
    ));
    output.push_str(&format!(
        "{} {}\n",
        format_bar(pct, 100.0, BAR_WIDTH),
        format_percentage(pct)
    ));

    if state.remaining_budget().is_negative() {
        output.push_str("Presupuesto excedido\n");
    }

    output
}

/// The bundled category catalog
pub fn format_category_list() -> String {
    let name_width = CATEGORIES.iter().map(|c| c.name.chars().count()).max().unwrap_or(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<3} {:<width$}  {}\n",
        "ID",
        "Categoría",
        "Icono",
        width = name_width
    ));
    output.push_str(&format!("{}\n", "-".repeat(name_width + 28)));

    for category in CATEGORIES {
        output.push_str(&format!(
            "{:<3} {:<width$}  {}\n",
            category.id,
            category.name,
            category.icon_path(),
            width = name_width
        ));
    }

    output
}
