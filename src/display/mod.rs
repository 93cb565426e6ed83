//! Display formatting for terminal output

pub mod expense;

pub use expense::{format_breakdown, format_expense_table, format_total};
