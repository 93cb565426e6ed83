//! Ledger service
//!
//! Moves the in-memory ledger to and from the expenses file and audits
//! each change.

use crate::audit::AuditEntry;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{AddedExpense, Ledger, Session, FIELD_SEPARATOR};
use crate::storage::Storage;

use super::audit;

/// Service for loading, saving and adding expenses
pub struct LedgerService<'a> {
    storage: &'a Storage,
    user: Option<&'a str>,
}

impl<'a> LedgerService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            user: None,
        }
    }

    /// Attribute audit entries to the session's user
    pub fn for_session(mut self, session: &'a Session) -> Self {
        self.user = session.current_user();
        self
    }

    /// Add an expense from raw text input
    ///
    /// A date or category the expenses file cannot hold is rejected, as is a
    /// bad amount; either way the ledger is left untouched.
    pub fn add_expense(
        &self,
        ledger: &mut Ledger,
        date: &str,
        category: &str,
        amount_text: &str,
    ) -> ExpenseResult<AddedExpense> {
        require_storable("Date", date)?;
        require_storable("Category", category)?;
        let added = ledger.add_record(date, category, amount_text)?;

        if let Some(record) = ledger.records().last() {
            audit(
                self.storage,
                AuditEntry::create(&record.category, record).by(self.user),
            );
        }

        Ok(added)
    }

    /// Replay every line of the expenses file into `ledger`
    ///
    /// Returns the number of records applied. A missing file applies nothing.
    /// The first malformed line stops the load with an error; records from
    /// earlier lines stay in the ledger.
    pub fn load_from_store(&self, ledger: &mut Ledger) -> ExpenseResult<usize> {
        let lines = self.storage.expenses.read_lines()?;

        let mut applied = 0;
        for (index, line) in lines.iter().enumerate() {
            ledger.apply_line(line, index + 1)?;
            applied += 1;
        }

        audit(
            self.storage,
            AuditEntry::load(&self.file_name(), applied).by(self.user),
        );
        Ok(applied)
    }

    /// Overwrite the expenses file with the ledger's records
    pub fn save_to_store(&self, ledger: &Ledger) -> ExpenseResult<()> {
        self.storage.expenses.write_records(ledger.records())?;

        audit(
            self.storage,
            AuditEntry::save(&self.file_name(), ledger.len()).by(self.user),
        );
        Ok(())
    }

    fn file_name(&self) -> String {
        self.storage
            .expenses
            .path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Fields are written unescaped, so a separator or line break would corrupt the file
fn require_storable(field: &str, value: &str) -> ExpenseResult<()> {
    if value.contains([FIELD_SEPARATOR, '\n', '\r']) {
        return Err(ExpenseError::Validation(format!(
            "{} cannot contain '{}' or line breaks",
            field, FIELD_SEPARATOR
        )));
    }
    Ok(())
}
