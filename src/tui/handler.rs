//! Event handler for the TUI
//!
//! Routes key events to the handler for whatever currently owns the
//! keyboard: the setup screen, the expense form, a dialog, or the list.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::dialogs::expense::ExpenseField;
use super::event::Event;
use super::views::expense_list::{gesture_action, gesture_for_key, Gesture};
use super::widgets::TextInput;
use crate::error::BudgetError;
use crate::state::{BudgetAction, Outcome};

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.active_dialog == ActiveDialog::Help {
        app.close_dialog();
        return Ok(());
    }

    if app.needs_budget() {
        return handle_budget_key(app, key, true);
    }

    if app.expense_form_open() {
        return handle_expense_form_key(app, key);
    }

    match app.active_dialog {
        ActiveDialog::Budget => handle_budget_key(app, key, false),
        ActiveDialog::ConfirmReset => handle_confirm_key(app, key),
        ActiveDialog::Help | ActiveDialog::None => handle_normal_key(app, key),
    }
}

/// Keys on the expense list
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if let Some(gesture) = gesture_for_key(&key) {
        if let Some(id) = app.selected_expense_id() {
            let outcome = app.dispatch(gesture_action(id, gesture));
            if gesture == Gesture::Trailing && matches!(outcome, Some(Outcome::Changed(_))) {
                app.set_status("Gasto eliminado");
            }
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('n') | KeyCode::Char('a') => {
            app.clear_status();
            app.expense_dialog.open_new();
            app.dispatch(BudgetAction::ShowModal);
        }
        KeyCode::Char('f') => {
            let category = app.next_filter();
            app.selected_index = 0;
            app.dispatch(BudgetAction::FilterCategory { category });
        }
        KeyCode::Char('0') => {
            app.selected_index = 0;
            app.dispatch(BudgetAction::FilterCategory { category: None });
        }
        KeyCode::Char('b') => {
            let budget = app.state().budget;
            app.budget_dialog.load(budget);
            app.open_dialog(ActiveDialog::Budget);
        }
        KeyCode::Char('R') => {
            if app.settings.confirm_reset {
                app.open_dialog(ActiveDialog::ConfirmReset);
            } else {
                reset(app);
            }
        }
        _ => {}
    }

    Ok(())
}

fn reset(app: &mut App) {
    if let Some(Outcome::Changed(_)) = app.dispatch(BudgetAction::ResetApp) {
        app.budget_dialog = Default::default();
        app.set_status("Aplicación reiniciada");
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.close_dialog();
            reset(app);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
        _ => {}
    }
    Ok(())
}

/// Budget form, either as the setup screen or as a dialog
fn handle_budget_key(app: &mut App, key: KeyEvent, setup: bool) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            if setup {
                app.quit();
            } else {
                app.close_dialog();
            }
        }
        KeyCode::Enter => match app.budget_dialog.submit(&mut app.store) {
            Ok(_) => {
                app.after_dispatch();
                app.close_dialog();
                app.set_status("Presupuesto definido");
            }
            Err(BudgetError::Validation(_)) => {}
            Err(err) => {
                tracing::error!(error = %err, "failed to define budget");
                app.set_status(err.to_string());
            }
        },
        KeyCode::Char('?') if setup => app.open_dialog(ActiveDialog::Help),
        _ => edit_input(&mut app.budget_dialog.input, key),
    }
    Ok(())
}

/// Keys while the expense form is open
fn handle_expense_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let dialog = &mut app.expense_dialog;

    match key.code {
        KeyCode::Esc => {
            dialog.open_new();
            app.dispatch(BudgetAction::CloseModal);
        }
        KeyCode::Tab | KeyCode::Down => dialog.next_field(),
        KeyCode::BackTab | KeyCode::Up => dialog.prev_field(),
        KeyCode::Enter => {
            let editing = dialog.form.is_editing();
            match dialog.submit(&mut app.store) {
                Ok(_) => {
                    app.after_dispatch();
                    app.set_status(if editing {
                        "Gasto actualizado"
                    } else {
                        "Gasto registrado"
                    });
                }
                // Validation errors stay on the form
                Err(BudgetError::Validation(_)) => {}
                Err(err) => {
                    tracing::error!(error = %err, "failed to save expense");
                    app.set_status(err.to_string());
                }
            }
        }
        _ => match dialog.focused_field {
            ExpenseField::Category => match key.code {
                KeyCode::Right | KeyCode::Char(' ') => dialog.cycle_category(true),
                KeyCode::Left => dialog.cycle_category(false),
                _ => {}
            },
            ExpenseField::Date if matches!(key.code, KeyCode::Char('+') | KeyCode::Char('-')) => {
                dialog.shift_date(if key.code == KeyCode::Char('+') { 1 } else { -1 });
            }
            _ => {
                if let Some(input) = dialog.focused_input() {
                    edit_input(input, key);
                }
            }
        },
    }

    Ok(())
}

/// Line-editing keys shared by every text input
fn edit_input(input: &mut TextInput, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}
