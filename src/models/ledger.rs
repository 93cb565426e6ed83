//! In-memory expense ledger
//!
//! Keeps records in insertion order together with two accumulators: the grand
//! total and a per-category total. Both are only ever extended by applying a
//! record, so each always equals the sum over the records it covers.

use std::collections::HashMap;

use serde::Serialize;

use super::amount::Amount;
use super::expense::ExpenseRecord;
use crate::error::ExpenseResult;

/// Result of adding an expense, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct AddedExpense {
    /// Grand total after the add
    pub total: Amount,
    /// `Date: ..., Category: ..., Amount: $...`
    pub line: String,
}

/// One row of the category breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Amount,
}

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
    total: Amount,
    by_category: HashMap<String, Amount>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `amount_text` and append a new record
    ///
    /// A non-numeric amount returns a parse error and leaves the ledger
    /// untouched.
    pub fn add_record(
        &mut self,
        date: &str,
        category: &str,
        amount_text: &str,
    ) -> ExpenseResult<AddedExpense> {
        let amount = Amount::parse(amount_text)?;
        let record = ExpenseRecord::new(date, category, amount);
        let line = record.format_line();
        self.apply(record);

        Ok(AddedExpense {
            total: self.total,
            line,
        })
    }

    /// Parse one line of the expenses file and apply it like [`Ledger::add_record`]
    pub fn apply_line(&mut self, line: &str, line_no: usize) -> ExpenseResult<&ExpenseRecord> {
        let record = ExpenseRecord::parse_line(line, line_no)?;
        Ok(self.apply(record))
    }

    fn apply(&mut self, record: ExpenseRecord) -> &ExpenseRecord {
        self.total += record.amount;
        *self
            .by_category
            .entry(record.category.clone())
            .or_insert_with(Amount::zero) += record.amount;
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Category totals, sorted by category name
    pub fn category_breakdown(&self) -> Vec<CategoryTotal> {
        let mut rows: Vec<CategoryTotal> = self
            .by_category
            .iter()
            .map(|(category, total)| CategoryTotal {
                category: category.clone(),
                total: *total,
            })
            .collect();
        rows.sort_by(|a, b| a.category.cmp(&b.category));
        rows
    }

    pub fn category_total(&self, category: &str) -> Option<Amount> {
        self.by_category.get(category).copied()
    }

    /// Records in insertion order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn total(&self) -> Amount {
        self.total
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), Amount::zero());
        assert!(ledger.category_breakdown().is_empty());
    }

    #[test]
    fn test_add_record_example() {
        let mut ledger = Ledger::new();
        let first = ledger.add_record("2024-01-01", "Food", "12.50").unwrap();
        assert_eq!(first.total.value(), 12.5);
        assert_eq!(
            first.line,
            "Date: 2024-01-01, Category: Food, Amount: $12.50"
        );

        let second = ledger.add_record("2024-01-02", "Food", "7.50").unwrap();
        assert_eq!(second.total.to_string(), "$20.00");
        assert_eq!(
            ledger.category_breakdown(),
            vec![CategoryTotal {
                category: "Food".into(),
                total: Amount::new(20.0),
            }]
        );
    }

    #[test]
    fn test_totals_equal_sums() {
        let entries = [
            ("2024-01-01", "Food", "12.25"),
            ("2024-01-01", "Rent", "950"),
            ("2024-01-03", "Food", "-2.5"),
            ("2024-01-04", "Travel", "0"),
            ("2024-01-05", "Rent", "1e1"),
            ("2024-01-06", "Food", "0.1"),
        ];

        let mut ledger = Ledger::new();
        for (date, category, amount) in entries {
            ledger.add_record(date, category, amount).unwrap();
        }

        let parsed: Vec<(&str, f64)> = entries
            .iter()
            .map(|(_, c, a)| (*c, a.parse::<f64>().unwrap()))
            .collect();

        let grand: f64 = parsed.iter().fold(0.0, |acc, (_, a)| acc + a);
        assert_eq!(ledger.total().value(), grand);

        for row in ledger.category_breakdown() {
            let expected = parsed
                .iter()
                .filter(|(c, _)| *c == row.category)
                .fold(0.0, |acc, (_, a)| acc + a);
            assert_eq!(row.total.value(), expected, "category {}", row.category);
        }
        assert_eq!(ledger.category_breakdown().len(), 3);
        assert_eq!(ledger.len(), entries.len());
    }

    #[test]
    fn test_invalid_amount_leaves_state_unchanged() {
        let mut ledger = Ledger::new();
        ledger.add_record("2024-01-01", "Food", "5").unwrap();

        let err = ledger.add_record("2024-01-02", "Food", "five").unwrap_err();
        assert!(err.is_parse());

        let err = ledger.add_record("2024-01-02", "Books", "").unwrap_err();
        assert!(err.is_parse());

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total().value(), 5.0);
        assert_eq!(ledger.category_total("Food"), Some(Amount::new(5.0)));
        assert_eq!(ledger.category_total("Books"), None);
    }

    #[test]
    fn test_records_keep_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.add_record("2024-02-01", "B", "1").unwrap();
        ledger.add_record("2024-01-01", "A", "2").unwrap();

        let dates: Vec<&str> = ledger.records().iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-02-01", "2024-01-01"]);
    }

    #[test]
    fn test_breakdown_sorted_by_category() {
        let mut ledger = Ledger::new();
        ledger.add_record("d", "Travel", "1").unwrap();
        ledger.add_record("d", "Food", "1").unwrap();
        ledger.add_record("d", "Rent", "1").unwrap();

        let names: Vec<String> = ledger
            .category_breakdown()
            .into_iter()
            .map(|row| row.category)
            .collect();
        assert_eq!(names, vec!["Food", "Rent", "Travel"]);
    }

    #[test]
    fn test_apply_line() {
        let mut ledger = Ledger::new();
        let record = ledger.apply_line("2024-01-01,Food,3.5", 1).unwrap();
        assert_eq!(record.category, "Food");
        assert_eq!(ledger.total().value(), 3.5);

        assert!(ledger.apply_line("2024-01-01,Food", 2).is_err());
        assert_eq!(ledger.len(), 1);
    }
}
