//! Expense entry/edit dialog
//!
//! Modal form over the expense list. The text inputs mirror the
//! [`ExpenseForm`] draft; submitting pushes them into the form, which
//! validates against the remaining budget and dispatches the add or update.

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::display::format_date_long;
use crate::error::BudgetResult;
use crate::form::{ExpenseForm, INPUT_DATE_FORMAT};
use crate::models::find_category;
use crate::state::{BudgetState, Dispatch, Outcome};
use crate::tui::layout::centered_rect;
use crate::tui::widgets::TextInput;

/// Which field is focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Name,
    Amount,
    Category,
    Date,
}

impl ExpenseField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Date,
            Self::Amount => Self::Name,
            Self::Category => Self::Amount,
            Self::Date => Self::Category,
        }
    }
}

/// State of the expense dialog
#[derive(Debug, Clone)]
pub struct ExpenseDialogState {
    pub focused_field: ExpenseField,
    pub name_input: TextInput,
    pub amount_input: TextInput,
    pub date_input: TextInput,
    pub form: ExpenseForm,
}

impl ExpenseDialogState {
    pub fn new(today: NaiveDate) -> Self {
        let mut state = Self {
            focused_field: ExpenseField::Name,
            name_input: TextInput::new()
                .label("Nombre")
                .placeholder("Ej. Supermercado"),
            amount_input: TextInput::new().label("Cantidad").placeholder("0.00"),
            date_input: TextInput::new().label("Fecha").placeholder("AAAA-MM-DD"),
            form: ExpenseForm::new(today),
        };
        state.refill();
        state
    }

    /// Empty form for a new expense
    pub fn open_new(&mut self) {
        self.form.reset();
        self.refill();
    }

    /// Follow the store's editing selection, reloading inputs when it moves
    pub fn sync_with(&mut self, state: &BudgetState) {
        let before = self.form.editing_id();
        self.form.sync_with(state);
        if self.form.editing_id() != before {
            self.refill();
        }
    }

    /// Copy the draft into the text inputs
    fn refill(&mut self) {
        let draft = self.form.draft();
        self.name_input.set_content(draft.expense_name.clone());
        self.amount_input.set_content(if draft.amount.is_zero() {
            String::new()
        } else {
            draft.amount.to_input_string()
        });
        self.date_input
            .set_content(draft.date.format(INPUT_DATE_FORMAT).to_string());
        self.set_focus(ExpenseField::Name);
    }

    pub fn set_focus(&mut self, field: ExpenseField) {
        self.focused_field = field;
        self.name_input.focused = field == ExpenseField::Name;
        self.amount_input.focused = field == ExpenseField::Amount;
        self.date_input.focused = field == ExpenseField::Date;
    }

    pub fn next_field(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    pub fn prev_field(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    /// Text input behind the focused field; the category field has none
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Name => Some(&mut self.name_input),
            ExpenseField::Amount => Some(&mut self.amount_input),
            ExpenseField::Date => Some(&mut self.date_input),
            ExpenseField::Category => None,
        }
    }

    pub fn cycle_category(&mut self, forward: bool) {
        self.form.cycle_category(forward);
    }

    /// Move the date by whole days, starting from the typed date when valid
    pub fn shift_date(&mut self, days: i64) {
        if self.form.set_date_input(self.date_input.value()).is_err() {
            return;
        }
        self.form.shift_date(days);
        self.date_input
            .set_content(self.form.draft().date.format(INPUT_DATE_FORMAT).to_string());
    }

    /// Push the inputs into the form and submit it
    pub fn submit<D: Dispatch + ?Sized>(&mut self, store: &mut D) -> BudgetResult<Outcome> {
        self.form.set_name(self.name_input.value());
        self.form.set_amount_input(self.amount_input.value())?;
        self.form.set_date_input(self.date_input.value())?;

        let outcome = self.form.submit(store)?;
        self.refill();
        Ok(outcome)
    }

    pub fn error_message(&self) -> Option<String> {
        self.form.error().map(ToString::to_string)
    }
}

/// Render the expense dialog
pub fn render(frame: &mut Frame, dialog: &ExpenseDialogState) {
    let area = centered_rect(60, 50, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", dialog.form.title()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Length(1), // Date
            Constraint::Length(1), // Long date preview
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(&dialog.name_input, chunks[0]);
    frame.render_widget(&dialog.amount_input, chunks[1]);
    render_category_field(frame, dialog, chunks[2]);
    frame.render_widget(&dialog.date_input, chunks[3]);

    let preview = NaiveDate::parse_from_str(dialog.date_input.value(), INPUT_DATE_FORMAT)
        .map(format_date_long)
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Span::styled(preview, Style::default().fg(Color::DarkGray))),
        chunks[4],
    );

    if let Some(error) = dialog.error_message() {
        let error_line = Line::from(Span::styled(error, Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(error_line), chunks[6]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Siguiente  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(format!(" {}  ", dialog.form.submit_label())),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancelar"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}

fn render_category_field(frame: &mut Frame, dialog: &ExpenseDialogState, area: Rect) {
    let focused = dialog.focused_field == ExpenseField::Category;
    let selected = dialog.form.draft().category.as_ref().and_then(find_category);

    let value = match selected {
        Some(category) => category.name.to_string(),
        None => "-- Selecciona --".to_string(),
    };
    let value_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else if selected.is_some() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![
        Span::styled("Categoría", Style::default().fg(Color::Cyan)),
        Span::raw(": "),
        Span::styled(value, value_style),
    ];
    if focused {
        spans.push(Span::styled(
            "  ←/→ para cambiar",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
