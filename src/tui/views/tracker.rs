//! Budget summary panel
//!
//! Budget, spent and remaining figures on the left, a gauge with the spent
//! percentage on the right.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::display::{format_currency, format_percentage};
use crate::tui::app::App;
use crate::tui::layout::summary_columns;

/// Gauge color for a spent percentage
fn gauge_color(pct: f64) -> Color {
    if pct >= 100.0 {
        Color::Red
    } else if pct >= 75.0 {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// Render the summary panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Control de gastos ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (figures_area, gauge_area) = summary_columns(inner);
    let state = app.state();
    let symbol = &app.settings.currency_symbol;
    let remaining = state.remaining_budget();

    let remaining_color = if remaining.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let figure = |label: &'static str, value: String, style: Style| {
        Line::from(vec![
            Span::styled(format!("{:<13}", label), Style::default().fg(Color::White)),
            Span::styled(value, style),
        ])
    };

    let lines = vec![
        figure(
            "Presupuesto:",
            format_currency(state.budget, symbol),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        figure(
            "Gastado:",
            format_currency(state.total_expenses(), symbol),
            Style::default().fg(Color::Yellow),
        ),
        figure(
            "Disponible:",
            format_currency(remaining, symbol),
            Style::default()
                .fg(remaining_color)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), figures_area);

    let pct = state.spent_percentage();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Gastado "))
        .gauge_style(Style::default().fg(gauge_color(pct)))
        .ratio((pct / 100.0).clamp(0.0, 1.0))
        .label(format_percentage(pct));
    frame.render_widget(gauge, gauge_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_color_thresholds() {
        assert_eq!(gauge_color(10.0), Color::Green);
        assert_eq!(gauge_color(80.0), Color::Yellow);
        assert_eq!(gauge_color(120.5), Color::Red);
    }
}
