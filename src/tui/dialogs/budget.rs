//! Budget definition dialog
//!
//! Shown full-screen until a budget exists, and as a modal when the user
//! redefines it later.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::error::BudgetResult;
use crate::form::BudgetForm;
use crate::models::Money;
use crate::state::{Dispatch, Outcome};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// State of the budget dialog
#[derive(Debug, Clone)]
pub struct BudgetDialogState {
    pub input: TextInput,
    pub form: BudgetForm,
}

impl Default for BudgetDialogState {
    fn default() -> Self {
        let mut input = TextInput::new().label("Presupuesto").placeholder("0.00");
        input.focused = true;
        Self {
            input,
            form: BudgetForm::new(),
        }
    }
}

impl BudgetDialogState {
    /// Prefill with the current budget
    pub fn load(&mut self, budget: Money) {
        self.form = BudgetForm::with_budget(budget);
        self.input.set_content(self.form.input().to_string());
    }

    /// Validate and dispatch the typed budget
    pub fn submit<D: Dispatch + ?Sized>(&mut self, store: &mut D) -> BudgetResult<Outcome> {
        self.form.set_input(self.input.value());
        self.form.submit(store)
    }

    pub fn error_message(&self) -> Option<String> {
        self.form.error().map(ToString::to_string)
    }
}

/// Render the budget dialog centered in `area`
pub fn render(frame: &mut Frame, dialog: &BudgetDialogState, area: Rect, first_time: bool) {
    let area = centered_rect_fixed(52, 9, area);
    frame.render_widget(Clear, area);

    let title = if first_time {
        " Definir presupuesto "
    } else {
        " Cambiar presupuesto "
    };
    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(&dialog.input, chunks[0]);

    if let Some(error) = dialog.error_message() {
        frame.render_widget(
            Paragraph::new(Span::styled(error, Style::default().fg(Color::Red))),
            chunks[2],
        );
    }

    let cancel = if first_time { " Salir" } else { " Cancelar" };
    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Definir  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(cancel),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{BudgetState, BudgetStore};

    #[test]
    fn test_submit_from_input() {
        let mut store = BudgetStore::in_memory(BudgetState::default());
        let mut dialog = BudgetDialogState::default();
        for c in "750".chars() {
            dialog.input.insert(c);
        }

        assert!(dialog.submit(&mut store).unwrap().is_changed());
        assert_eq!(store.state().budget, Money::from_units(750));
    }

    #[test]
    fn test_invalid_budget_message() {
        let mut store = BudgetStore::in_memory(BudgetState::default());
        let mut dialog = BudgetDialogState::default();
        dialog.input.insert('0');

        assert!(dialog.submit(&mut store).is_err());
        assert_eq!(dialog.error_message().as_deref(), Some("Presupuesto no válido"));
    }

    #[test]
    fn test_load_prefills() {
        let mut dialog = BudgetDialogState::default();
        dialog.load(Money::from_units(90));
        assert_eq!(dialog.input.value(), "90.00");
        assert!(dialog.input.focused);
    }
}
