//! Expense list view
//!
//! One row per expense under the current filter. Each row exposes two
//! gestures: the leading one opens the expense in the form, the trailing
//! one removes it. On a keyboard the gestures map to ← and →.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::format::truncate;
use crate::display::{category_icon_path, category_label, format_currency, format_date_long};
use crate::models::{find_category, ExpenseId};
use crate::state::BudgetAction;
use crate::tui::app::App;

/// Swipe direction on a list row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Swipe from the leading edge: edit
    Leading,
    /// Swipe from the trailing edge: delete
    Trailing,
}

/// Action a gesture on the row of `id` dispatches
pub fn gesture_action(id: ExpenseId, gesture: Gesture) -> BudgetAction {
    match gesture {
        Gesture::Leading => BudgetAction::GetExpenseById { id },
        Gesture::Trailing => BudgetAction::RemoveExpense { id },
    }
}

/// Keyboard stand-in for a swipe
pub fn gesture_for_key(key: &KeyEvent) -> Option<Gesture> {
    match key.code {
        KeyCode::Left | KeyCode::Char('e') => Some(Gesture::Leading),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Delete => Some(Gesture::Trailing),
        _ => None,
    }
}

/// Render the expense list
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let title = match app.state().current_category.as_ref().and_then(find_category) {
        Some(category) => format!(" Gastos · {} ", category.name),
        None => " Gastos ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let expenses = app.visible_expenses();
    if expenses.is_empty() {
        let message = if app.state().expenses.is_empty() {
            "No hay gastos todavía. Pulsa 'n' para añadir uno."
        } else {
            "No hay gastos en esta categoría."
        };
        let text = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(26), // Date
        Constraint::Min(16),    // Name
        Constraint::Length(15), // Category
        Constraint::Length(22), // Icon
        Constraint::Length(13), // Amount
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Fecha").style(bold),
        Cell::from("Gasto").style(bold),
        Cell::from("Categoría").style(bold),
        Cell::from("Icono").style(bold),
        Cell::from("Cantidad").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = &app.settings.currency_symbol;
    let rows: Vec<Row> = expenses
        .iter()
        .map(|expense| {
            Row::new(vec![
                Cell::from(format_date_long(expense.date)),
                Cell::from(truncate(&expense.expense_name, 30)),
                Cell::from(category_label(expense)).style(Style::default().fg(Color::Cyan)),
                Cell::from(category_icon_path(expense)).style(Style::default().fg(Color::DarkGray)),
                Cell::from(format!("{:>12}", format_currency(expense.amount, symbol)))
                    .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_gesture_actions() {
        let id = ExpenseId::new();
        assert_eq!(
            gesture_action(id, Gesture::Leading),
            BudgetAction::GetExpenseById { id }
        );
        assert_eq!(
            gesture_action(id, Gesture::Trailing),
            BudgetAction::RemoveExpense { id }
        );
    }

    #[test]
    fn test_gesture_keys() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(gesture_for_key(&key(KeyCode::Left)), Some(Gesture::Leading));
        assert_eq!(gesture_for_key(&key(KeyCode::Char('e'))), Some(Gesture::Leading));
        assert_eq!(gesture_for_key(&key(KeyCode::Right)), Some(Gesture::Trailing));
        assert_eq!(gesture_for_key(&key(KeyCode::Delete)), Some(Gesture::Trailing));
        assert_eq!(gesture_for_key(&key(KeyCode::Char('x'))), None);
    }
}
