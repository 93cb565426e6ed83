//! Audit logging for the expense tracker
//!
//! Records registrations, logins, added expenses, loads and saves in an
//! append-only JSONL file. Passwords are never written to the log.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::login("alice"))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
