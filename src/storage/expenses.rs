//! Expense repository backed by the expenses file
//!
//! One `date,category,amount` line per record, in ledger order.

use std::path::PathBuf;

use crate::error::ExpenseError;
use crate::models::ExpenseRecord;

use super::file_io::{read_lines, write_lines_atomic, write_lines_in_place};

pub struct ExpenseRepository {
    path: PathBuf,
    atomic: bool,
}

impl ExpenseRepository {
    /// Create a repository that saves through a temp file
    pub fn new(path: PathBuf) -> Self {
        Self { path, atomic: true }
    }

    /// Choose between temp-and-rename and truncate-in-place saves
    pub fn with_atomic_save(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Raw lines of the expenses file; empty if the file doesn't exist
    pub fn read_lines(&self) -> Result<Vec<String>, ExpenseError> {
        Ok(read_lines(&self.path)?.unwrap_or_default())
    }

    /// Overwrite the file with one line per record
    pub fn write_records(&self, records: &[ExpenseRecord]) -> Result<(), ExpenseError> {
        let lines = records.iter().map(ExpenseRecord::to_line);
        if self.atomic {
            write_lines_atomic(&self.path, lines)
        } else {
            write_lines_in_place(&self.path, lines)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use tempfile::TempDir;

    fn sample_records() -> Vec<ExpenseRecord> {
        vec![
            ExpenseRecord::new("2024-01-01", "Food", Amount::new(12.5)),
            ExpenseRecord::new("2024-01-02", "Rent", Amount::new(900.0)),
        ]
    }

    #[test]
    fn test_empty_read() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.txt"));
        assert!(repo.read_lines().unwrap().is_empty());
    }

    #[test]
    fn test_write_records_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");
        let repo = ExpenseRepository::new(path.clone());

        repo.write_records(&sample_records()).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "2024-01-01,Food,12.5\n2024-01-02,Rent,900.0\n"
        );
        assert_eq!(repo.read_lines().unwrap().len(), 2);
    }

    #[test]
    fn test_in_place_save() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");
        let repo = ExpenseRepository::new(path.clone()).with_atomic_save(false);

        repo.write_records(&sample_records()).unwrap();
        repo.write_records(&sample_records()[..1]).unwrap();

        assert_eq!(repo.read_lines().unwrap(), vec!["2024-01-01,Food,12.5"]);
    }

    #[test]
    fn test_write_to_unwritable_path_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the file should be makes both the rename and
        // the create fail.
        let path = temp_dir.path().join("expenses.txt");
        std::fs::create_dir(&path).unwrap();

        let repo = ExpenseRepository::new(path.clone());
        let err = repo.write_records(&sample_records()).unwrap_err();
        assert!(matches!(err, ExpenseError::Io(_)));

        let repo = ExpenseRepository::new(path).with_atomic_save(false);
        let err = repo.write_records(&sample_records()).unwrap_err();
        assert!(matches!(err, ExpenseError::Io(_)));
    }
}
