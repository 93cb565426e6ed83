//! Core data models for the expense tracker
//!
//! Expense records, the in-memory ledger built from them, stored credentials
//! and the login session.

pub mod amount;
pub mod credential;
pub mod expense;
pub mod ledger;
pub mod session;

pub use amount::Amount;
pub use credential::Credential;
pub use expense::{ExpenseRecord, FIELD_SEPARATOR};
pub use ledger::{AddedExpense, CategoryTotal, Ledger};
pub use session::Session;
