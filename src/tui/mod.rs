//! Terminal User Interface module
//!
//! The interactive budget tracker built on ratatui: a setup screen until a
//! budget exists, then the summary panel, the expense list and the modal
//! expense form.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
