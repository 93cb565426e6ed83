//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Every handler
//! authenticates first; the ledger is only touched once a session exists.

pub mod auth;
pub mod expense;
pub mod shell;

pub use auth::{handle_register, login, LoginArgs};
pub use expense::{handle_add, handle_breakdown, handle_export, handle_list};
pub use shell::Shell;
