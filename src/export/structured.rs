//! JSON and YAML export

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Amount, CategoryTotal, ExpenseRecord, Ledger};

/// Snapshot of a ledger for structured export
#[derive(Debug, Serialize)]
pub struct LedgerExport<'a> {
    pub exported_at: DateTime<Utc>,
    pub records: &'a [ExpenseRecord],
    pub total: Amount,
    pub categories: Vec<CategoryTotal>,
}

impl<'a> LedgerExport<'a> {
    pub fn from_ledger(ledger: &'a Ledger) -> Self {
        Self {
            exported_at: Utc::now(),
            records: ledger.records(),
            total: ledger.total(),
            categories: ledger.category_breakdown(),
        }
    }
}

pub fn export_json<W: Write>(ledger: &Ledger, writer: W) -> ExpenseResult<()> {
    serde_json::to_writer_pretty(writer, &LedgerExport::from_ledger(ledger))
        .map_err(|e| ExpenseError::Export(format!("Failed to write JSON: {}", e)))
}

pub fn export_yaml<W: Write>(ledger: &Ledger, writer: W) -> ExpenseResult<()> {
    serde_yaml::to_writer(writer, &LedgerExport::from_ledger(ledger))
        .map_err(|e| ExpenseError::Export(format!("Failed to write YAML: {}", e)))
}
