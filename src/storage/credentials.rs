//! Credential repository backed by the users file
//!
//! The file only ever grows: registration appends, login scans.

use std::path::PathBuf;

use crate::error::ExpenseError;
use crate::models::Credential;

use super::file_io::{append_line, read_lines};

pub struct CredentialRepository {
    path: PathBuf,
}

impl CredentialRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Append a credential line; duplicates are not checked
    pub fn append(&self, credential: &Credential) -> Result<(), ExpenseError> {
        append_line(&self.path, &credential.to_line())
    }

    /// Return the first stored credential matching both fields exactly
    ///
    /// A missing users file yields `None`. Lines that don't hold two fields
    /// are skipped.
    pub fn find(&self, username: &str, password: &str) -> Result<Option<Credential>, ExpenseError> {
        let Some(lines) = read_lines(&self.path)? else {
            return Ok(None);
        };

        Ok(lines
            .iter()
            .filter_map(|line| Credential::parse_line(line))
            .find(|cred| cred.matches(username, password)))
    }

    /// Number of stored credential lines
    pub fn count(&self) -> Result<usize, ExpenseError> {
        Ok(read_lines(&self.path)?.map_or(0, |lines| lines.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, CredentialRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = CredentialRepository::new(temp_dir.path().join("users.txt"));
        (temp_dir, repo)
    }

    #[test]
    fn test_find_without_file() {
        let (_temp_dir, repo) = create_test_repo();
        assert_eq!(repo.find("alice", "pw1").unwrap(), None);
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_append_and_find() {
        let (_temp_dir, repo) = create_test_repo();
        repo.append(&Credential::new("alice", "pw1")).unwrap();
        repo.append(&Credential::new("bob", "pw2")).unwrap();

        assert_eq!(
            repo.find("bob", "pw2").unwrap(),
            Some(Credential::new("bob", "pw2"))
        );
        assert_eq!(repo.find("bob", "pw1").unwrap(), None);
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_duplicate_usernames_allowed() {
        let (_temp_dir, repo) = create_test_repo();
        repo.append(&Credential::new("alice", "old")).unwrap();
        repo.append(&Credential::new("alice", "new")).unwrap();

        assert!(repo.find("alice", "old").unwrap().is_some());
        assert!(repo.find("alice", "new").unwrap().is_some());
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(temp_dir.path().join("users.txt"), "garbage\n\nalice,pw1\n").unwrap();

        assert!(repo.find("alice", "pw1").unwrap().is_some());
    }
}
