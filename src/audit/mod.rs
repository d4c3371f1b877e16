//! Audit logging for budget-tracker
//!
//! Every committed change to the budget or to an expense is appended to a
//! line-delimited JSON log with before/after values.
//!
//! - `AuditEntry`: one log line (timestamp, operation, entity, values).
//! - `AuditLogger`: appends entries and reads them back.
//! - `generate_diff`: summary of changed fields for updates.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
