//! Storage layer for the expense tracker
//!
//! Flat text files under the data directory: the append-only users file,
//! the expenses file, and the audit log.

pub mod credentials;
pub mod expenses;
pub mod file_io;

pub use credentials::CredentialRepository;
pub use expenses::ExpenseRepository;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseError;

/// Storage coordinator that provides access to both repositories
pub struct Storage {
    paths: ExpensePaths,
    pub credentials: CredentialRepository,
    pub expenses: ExpenseRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance, ensuring the data directory exists
    pub fn new(paths: ExpensePaths, settings: &Settings) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            credentials: CredentialRepository::new(paths.users_file()),
            expenses: ExpenseRepository::new(paths.expenses_file())
                .with_atomic_save(settings.atomic_save),
            audit,
            paths,
        })
    }

    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Append to the audit log when auditing is enabled
    pub fn log(&self, entry: AuditEntry) -> Result<(), ExpenseError> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }
}
