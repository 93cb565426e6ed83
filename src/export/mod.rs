//! Export module for the expense tracker
//!
//! Writes the ledger in formats other tools can read:
//! - CSV: properly quoted records, unlike the native expenses file
//! - JSON / YAML: records together with the total and category breakdown

pub mod csv;
pub mod structured;

pub use self::csv::export_expenses_csv;
pub use structured::{export_json, export_yaml, LedgerExport};

use std::io::Write;
use std::str::FromStr;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Ledger;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Write `ledger` in this format
    pub fn write<W: Write>(self, ledger: &Ledger, writer: W) -> ExpenseResult<()> {
        match self {
            Self::Csv => export_expenses_csv(ledger, writer),
            Self::Json => export_json(ledger, writer),
            Self::Yaml => export_yaml(ledger, writer),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(ExpenseError::Export(format!(
                "Unknown export format '{}'. Use csv, json or yaml",
                other
            ))),
        }
    }
}
