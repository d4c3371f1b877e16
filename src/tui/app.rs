//! Application state for the TUI
//!
//! The App owns the budget store, the dialog states and the list selection.
//! Every state transition goes through [`App::dispatch`] (or a form submit),
//! after which [`App::after_dispatch`] re-syncs the expense dialog and keeps
//! the selection in range.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::{CategoryId, Expense, ExpenseId, CATEGORIES};
use crate::models::category::catalog_index;
use crate::state::{BudgetAction, BudgetState, BudgetStore, Dispatch, Outcome};

use super::dialogs::budget::BudgetDialogState;
use super::dialogs::expense::ExpenseDialogState;

/// Dialogs other than the expense form, whose visibility lives in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Budget,
    ConfirmReset,
    Help,
}

/// Main application state
pub struct App {
    pub store: BudgetStore,
    pub settings: Settings,
    pub should_quit: bool,
    pub active_dialog: ActiveDialog,
    /// Index into the filtered expense list
    pub selected_index: usize,
    pub status_message: Option<String>,
    pub expense_dialog: ExpenseDialogState,
    pub budget_dialog: BudgetDialogState,
}

impl App {
    pub fn new(store: BudgetStore, settings: Settings, today: NaiveDate) -> Self {
        Self {
            store,
            settings,
            should_quit: false,
            active_dialog: ActiveDialog::None,
            selected_index: 0,
            status_message: None,
            expense_dialog: ExpenseDialogState::new(today),
            budget_dialog: BudgetDialogState::default(),
        }
    }

    pub fn state(&self) -> &BudgetState {
        self.store.state()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// No budget yet: the setup screen takes over
    pub fn needs_budget(&self) -> bool {
        !self.state().is_budget_defined()
    }

    /// Whether the expense form is open
    pub fn expense_form_open(&self) -> bool {
        self.state().modal
    }

    /// Dispatch an action; storage failures are logged and shown in the
    /// status bar
    pub fn dispatch(&mut self, action: BudgetAction) -> Option<Outcome> {
        match self.store.dispatch(action) {
            Ok(outcome) => {
                self.after_dispatch();
                Some(outcome)
            }
            Err(err) => {
                tracing::error!(error = %err, "dispatch failed");
                self.set_status(err.to_string());
                None
            }
        }
    }

    /// Bring view state in line with the store
    pub fn after_dispatch(&mut self) {
        self.expense_dialog.sync_with(self.store.state());
        self.clamp_selection();
    }

    /// Expenses under the current filter
    pub fn visible_expenses(&self) -> Vec<&Expense> {
        self.state().filtered_expenses()
    }

    pub fn selected_expense_id(&self) -> Option<ExpenseId> {
        self.visible_expenses()
            .get(self.selected_index)
            .map(|e| e.id)
    }

    pub fn move_down(&mut self) {
        let len = self.visible_expenses().len();
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_expenses().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Filter after the current one: all, then each category, then all again
    pub fn next_filter(&self) -> Option<CategoryId> {
        let next = match self.state().current_category.as_ref() {
            None => Some(0),
            Some(current) => catalog_index(current).map(|i| i + 1),
        };
        next.and_then(|i| CATEGORIES.get(i)).map(|c| c.category_id())
    }
}
