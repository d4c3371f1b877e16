//! TUI Views module
//!
//! The tracker screen (summary, expense list, status bar) and the
//! full-screen budget setup shown until a budget exists.

pub mod expense_list;
pub mod status_bar;
pub mod tracker;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    if app.needs_budget() {
        render_setup(frame, app);
        return;
    }

    let layout = AppLayout::new(frame.area());

    tracker::render(frame, app, layout.summary);
    expense_list::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    if app.expense_form_open() {
        dialogs::expense::render(frame, &app.expense_dialog);
    }

    render_dialog(frame, app);
}

/// First run: only the budget form is available
fn render_setup(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let banner = Paragraph::new("Planificador de gastos")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(
        banner,
        Rect {
            height: area.height.min(2),
            ..area
        },
    );

    dialogs::budget::render(frame, &app.budget_dialog, area, true);

    if app.active_dialog == ActiveDialog::Help {
        dialogs::help::render(frame);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::Budget => {
            dialogs::budget::render(frame, &app.budget_dialog, frame.area(), false);
        }
        ActiveDialog::ConfirmReset => {
            dialogs::confirm::render(frame, app.state(), &app.settings.currency_symbol);
        }
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}
