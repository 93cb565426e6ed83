//! Expense Tracker - single-user expense tracking over flat files
//!
//! Users register and log in against a plaintext users file, enter dated
//! expenses, view category-wise totals, and save records to a
//! comma-delimited expenses file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expense records, the in-memory ledger, credentials, session
//! - `storage`: Flat-file repositories for users and expenses
//! - `services`: Authentication and ledger load/save/add
//! - `audit`: Append-only audit log
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers and the interactive shell
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::models::{Ledger, Session};
//! use expense_tracker::services::{AuthService, LedgerService};
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//!
//! let mut session = Session::new();
//! AuthService::new(&storage).authenticate(&mut session, "alice", "pw1")?;
//!
//! let service = LedgerService::new(&storage).for_session(&session);
//! let mut ledger = Ledger::new();
//! service.load_from_store(&mut ledger)?;
//! service.add_expense(&mut ledger, "2024-01-01", "Food", "12.50")?;
//! service.save_to_store(&ledger)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
