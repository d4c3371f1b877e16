//! Reset confirmation
//!
//! Spells out what a reset discards before asking for a yes/no answer.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::display::format_currency;
use crate::state::BudgetState;
use crate::tui::layout::centered_rect_fixed;

/// Lines describing what a reset would discard
fn reset_details(state: &BudgetState, symbol: &str) -> Vec<String> {
    let count = state.expenses.len();
    let expenses = match count {
        0 => "ningún gasto".to_string(),
        1 => "1 gasto".to_string(),
        n => format!("{} gastos", n),
    };
    vec![
        format!("Presupuesto: {}", format_currency(state.budget, symbol)),
        format!("Se borrarán {} por {}", expenses, format_currency(state.total_expenses(), symbol)),
    ]
}

/// Render the reset confirmation over the tracker
pub fn render(frame: &mut Frame, state: &BudgetState, symbol: &str) {
    let area = centered_rect_fixed(56, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Reiniciar ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Red));

    let mut lines = vec![Line::from(Span::styled(
        "¿Empezar de cero?",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    lines.extend(
        reset_details(state, symbol)
            .into_iter()
            .map(|detail| Line::from(Span::styled(detail, Style::default().fg(Color::Gray)))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("s", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(" borrar todo   "),
        Span::styled("n/Esc", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw(" volver"),
    ]));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
