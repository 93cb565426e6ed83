//! Expense record model

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use crate::error::{ExpenseError, ExpenseResult};

/// Field separator of the expenses file
pub const FIELD_SEPARATOR: char = ',';

/// A single dated expense
///
/// Date and category are kept exactly as entered; neither is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub date: String,
    pub category: String,
    pub amount: Amount,
}

impl ExpenseRecord {
    pub fn new(date: impl Into<String>, category: impl Into<String>, amount: Amount) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
        }
    }

    /// The line shown to the user after adding or loading a record
    pub fn format_line(&self) -> String {
        format!(
            "Date: {}, Category: {}, Amount: {}",
            self.date, self.category, self.amount
        )
    }

    /// Serialize as `date,category,amount`
    ///
    /// Fields are not escaped; a comma in the date or category yields a line
    /// that [`ExpenseRecord::parse_line`] rejects.
    pub fn to_line(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.date,
            self.category,
            self.amount.to_storage_string(),
            sep = FIELD_SEPARATOR
        )
    }

    /// Parse one `date,category,amount` line of the expenses file
    ///
    /// `line_no` is 1-based and only used for error reporting.
    pub fn parse_line(line: &str, line_no: usize) -> ExpenseResult<Self> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() != 3 {
            return Err(ExpenseError::Format {
                line: line_no,
                reason: format!("expected 3 fields, found {}", fields.len()),
            });
        }

        let amount = Amount::parse(fields[2]).map_err(|e| e.at_line(line_no))?;
        Ok(Self::new(fields[0], fields[1], amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let record = ExpenseRecord::new("2024-01-01", "Food", Amount::new(12.5));
        assert_eq!(
            record.format_line(),
            "Date: 2024-01-01, Category: Food, Amount: $12.50"
        );
    }

    #[test]
    fn test_to_line() {
        let record = ExpenseRecord::new("2024-01-01", "Food", Amount::new(12.5));
        assert_eq!(record.to_line(), "2024-01-01,Food,12.5");
    }

    #[test]
    fn test_parse_line() {
        let record = ExpenseRecord::parse_line("2024-01-02,Rent,-900.0", 1).unwrap();
        assert_eq!(record.date, "2024-01-02");
        assert_eq!(record.category, "Rent");
        assert_eq!(record.amount.value(), -900.0);
    }

    #[test]
    fn test_parse_line_keeps_unvalidated_fields() {
        let record = ExpenseRecord::parse_line("yesterday, Snacks ,1", 1).unwrap();
        assert_eq!(record.date, "yesterday");
        assert_eq!(record.category, " Snacks ");
    }

    #[test]
    fn test_parse_line_wrong_field_count() {
        let err = ExpenseRecord::parse_line("2024-01-01,Food", 4).unwrap_err();
        assert!(matches!(err, ExpenseError::Format { line: 4, .. }));

        let err = ExpenseRecord::parse_line("2024-01-01,Food,Fast,3.0", 5).unwrap_err();
        assert!(matches!(err, ExpenseError::Format { line: 5, .. }));
    }

    #[test]
    fn test_parse_line_bad_amount() {
        let err = ExpenseRecord::parse_line("2024-01-01,Food,twelve", 2).unwrap_err();
        assert!(matches!(
            err,
            ExpenseError::Parse {
                line: Some(2),
                ..
            }
        ));
    }

    #[test]
    fn test_comma_in_category_does_not_survive_storage() {
        let record = ExpenseRecord::new("2024-01-01", "Food, drinks", Amount::new(1.0));
        assert!(ExpenseRecord::parse_line(&record.to_line(), 1).is_err());
    }
}
