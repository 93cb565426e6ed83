//! Session state
//!
//! Holds the authenticated user for the lifetime of the process. There is
//! no logout.

use crate::error::{ExpenseError, ExpenseResult};

#[derive(Debug, Clone, Default)]
pub struct Session {
    current_user: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful login
    ///
    /// Logging in again as the same user is a no-op. Switching users is
    /// rejected since a session is never cleared.
    pub fn login(&mut self, username: &str) -> ExpenseResult<()> {
        match &self.current_user {
            Some(current) if current == username => Ok(()),
            Some(current) => Err(ExpenseError::Validation(format!(
                "Already logged in as '{}'",
                current
            ))),
            None => {
                self.current_user = Some(username.to_string());
                Ok(())
            }
        }
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }
}
