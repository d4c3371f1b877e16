//! Help dialog
//!
//! Lists the keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Ayuda ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        heading("Lista de gastos"),
        Line::from(""),
        key_line("j/k ↑/↓", "Mover la selección"),
        key_line("n", "Nuevo gasto"),
        key_line("← / e", "Editar el gasto seleccionado"),
        key_line("→ / d / Supr", "Eliminar el gasto seleccionado"),
        key_line("f", "Filtrar por la siguiente categoría"),
        key_line("0", "Quitar el filtro"),
        key_line("b", "Cambiar el presupuesto"),
        key_line("R", "Reiniciar la aplicación"),
        key_line("?", "Mostrar/ocultar ayuda"),
        key_line("q", "Salir"),
        Line::from(""),
        heading("Formulario de gasto"),
        Line::from(""),
        key_line("Tab / Shift+Tab", "Cambiar de campo"),
        key_line("←/→", "Cambiar categoría"),
        key_line("+/-", "Mover la fecha un día"),
        key_line("Enter", "Guardar"),
        key_line("Esc", "Cancelar"),
    ]
}

fn heading(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>16}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::raw(description),
    ])
}
