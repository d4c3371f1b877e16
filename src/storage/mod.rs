//! Storage layer for budget-tracker
//!
//! Atomic JSON documents and the persisted budget state.

pub mod file_io;
pub mod state;

pub use file_io::{read_json, write_json_atomic};
pub use state::{PersistedState, StateRepository};
