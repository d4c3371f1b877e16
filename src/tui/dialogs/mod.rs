//! Dialog modules for the TUI
//!
//! Modal dialogs drawn over the tracker screen

pub mod budget;
pub mod confirm;
pub mod expense;
pub mod help;
