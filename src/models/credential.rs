//! Credential model
//!
//! Usernames and passwords are stored in clear text, one pair per line.
//! This is insecure and kept only for compatibility with existing users files.

use super::expense::FIELD_SEPARATOR;

/// A stored username/password pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Serialize as `username,password`
    pub fn to_line(&self) -> String {
        format!("{}{}{}", self.username, FIELD_SEPARATOR, self.password)
    }

    /// Parse a users file line
    ///
    /// Returns `None` for lines with fewer than two fields. Extra fields are
    /// ignored.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.split(FIELD_SEPARATOR);
        let username = fields.next()?;
        let password = fields.next()?;
        Some(Self::new(username, password))
    }

    /// Exact, case-sensitive comparison of both fields
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
