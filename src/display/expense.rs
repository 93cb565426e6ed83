//! Expense display formatting
//!
//! Renders ledger contents for the terminal: a record table, the running
//! total, and the category-wise breakdown.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Amount, CategoryTotal, ExpenseRecord};

#[derive(Tabled)]
struct ExpenseRow<'a> {
    #[tabled(rename = "Date")]
    date: &'a str,
    #[tabled(rename = "Category")]
    category: &'a str,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// `Total Expenses: $20.00`
pub fn format_total(total: Amount, symbol: &str) -> String {
    format!("Total Expenses: {}", total.format_with_symbol(symbol))
}

/// Format records as a table in ledger order
pub fn format_expense_table(records: &[ExpenseRecord], symbol: &str) -> String {
    if records.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let rows = records.iter().map(|r| ExpenseRow {
        date: &r.date,
        category: &r.category,
        amount: r.amount.format_with_symbol(symbol),
    });

    Table::new(rows).with(Style::sharp()).to_string()
}

/// Format the category breakdown, one `category: $total` line each
pub fn format_breakdown(rows: &[CategoryTotal], symbol: &str) -> String {
    let mut output = String::from("Category-wise Expenses:\n");
    for row in rows {
        output.push_str(&format!(
            "{}: {}\n",
            row.category,
            row.total.format_with_symbol(symbol)
        ));
    }
    output
}
