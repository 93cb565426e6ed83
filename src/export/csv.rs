//! CSV export
//!
//! Fields are quoted when needed, so categories containing commas survive.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Ledger;

/// Write all records as CSV with a `date,category,amount` header
pub fn export_expenses_csv<W: Write>(ledger: &Ledger, writer: W) -> ExpenseResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["date", "category", "amount"])
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for record in ledger.records() {
        let amount = record.amount.to_storage_string();
        csv_writer
            .write_record([record.date.as_str(), record.category.as_str(), &amount])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))
}
