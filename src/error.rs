//! Custom error types for the expense tracker
//!
//! Every failure the core can produce is one of these variants. The
//! presentation layer renders them as messages; none of them are fatal.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A field was empty or cannot be stored
    #[error("Validation error: {0}")]
    Validation(String),

    /// An amount could not be read as a number
    #[error("Invalid amount '{input}'{}", line_suffix(.line))]
    Parse { input: String, line: Option<usize> },

    /// A persisted line did not have the expected shape
    #[error("Malformed record at line {line}: {reason}")]
    Format { line: usize, reason: String },

    /// No stored credential matched
    #[error("Invalid username or password")]
    Authentication,

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(" at line {}", n),
        None => String::new(),
    }
}

impl ExpenseError {
    /// Create a parse error for amount text entered by the user
    pub fn invalid_amount(input: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            line: None,
        }
    }

    /// Attach a file line number to a parse error
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Self::Parse { input, .. } => Self::Parse {
                input,
                line: Some(line),
            },
            other => other,
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an amount parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if this is an authentication failure
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication)
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
