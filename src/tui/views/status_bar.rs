//! Status bar view
//!
//! Shows the remaining budget, the active filter, the last status message
//! and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::display::format_currency;
use crate::models::find_category;
use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.state();
    let remaining = state.remaining_budget();
    let remaining_color = if remaining.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let mut spans = vec![
        Span::styled(" Disponible: ", Style::default().fg(Color::White)),
        Span::styled(
            format_currency(remaining, &app.settings.currency_symbol),
            Style::default()
                .fg(remaining_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
    ];

    let filter = state
        .current_category
        .as_ref()
        .and_then(find_category)
        .map(|c| c.name)
        .unwrap_or("Todas");
    spans.push(Span::styled(
        format!("Filtro: {}", filter),
        Style::default().fg(Color::Cyan),
    ));

    if let Some(message) = &app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        "n:Nuevo ←:Editar →:Borrar f:Filtrar ?:Ayuda q:Salir",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
