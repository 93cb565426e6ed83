//! Authentication service
//!
//! Registration and login against the plaintext users file.

use crate::audit::AuditEntry;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Credential, Session};
use crate::storage::Storage;

use super::audit;

/// Service for user registration and login
pub struct AuthService<'a> {
    storage: &'a Storage,
}

impl<'a> AuthService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Append a new credential
    ///
    /// Usernames are not checked for uniqueness.
    pub fn register(&self, username: &str, password: &str) -> ExpenseResult<()> {
        require_fields(username, password)?;

        self.storage
            .credentials
            .append(&Credential::new(username, password))?;

        audit(self.storage, AuditEntry::register(username));
        Ok(())
    }

    /// Check a username/password pair and start the session on success
    ///
    /// A missing users file is treated like a file with no matching line.
    pub fn authenticate(
        &self,
        session: &mut Session,
        username: &str,
        password: &str,
    ) -> ExpenseResult<()> {
        require_fields(username, password)?;

        if self.storage.credentials.find(username, password)?.is_none() {
            return Err(ExpenseError::Authentication);
        }

        session.login(username)?;
        audit(self.storage, AuditEntry::login(username));
        Ok(())
    }
}

fn require_fields(username: &str, password: &str) -> ExpenseResult<()> {
    if username.is_empty() || password.is_empty() {
        return Err(ExpenseError::Validation(
            "Username and password cannot be empty".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::{ExpensePaths, Settings};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_register_then_authenticate() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AuthService::new(&storage);
        let mut session = Session::new();

        service.register("alice", "pw1").unwrap();
        service.authenticate(&mut session, "alice", "pw1").unwrap();

        assert_eq!(session.current_user(), Some("alice"));
    }

    #[test]
    fn test_wrong_password() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AuthService::new(&storage);
        let mut session = Session::new();

        service.register("alice", "pw1").unwrap();
        let err = service
            .authenticate(&mut session, "alice", "wrong")
            .unwrap_err();

        assert!(err.is_authentication());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_authenticate_without_users_file() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AuthService::new(&storage);
        let mut session = Session::new();

        let err = service.authenticate(&mut session, "alice", "pw1").unwrap_err();
        assert!(err.is_authentication());
        assert!(!storage.credentials.path().exists());
    }

    #[test]
    fn test_empty_fields_are_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AuthService::new(&storage);
        let mut session = Session::new();

        assert!(service.register("", "pw1").unwrap_err().is_validation());
        assert!(service.register("alice", "").unwrap_err().is_validation());
        assert!(service
            .authenticate(&mut session, "", "pw1")
            .unwrap_err()
            .is_validation());
        assert!(!storage.credentials.path().exists());
    }

    #[test]
    fn test_duplicate_registration_succeeds() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AuthService::new(&storage);

        service.register("alice", "pw1").unwrap();
        service.register("alice", "pw2").unwrap();

        assert_eq!(storage.credentials.count().unwrap(), 2);

        let mut session = Session::new();
        service.authenticate(&mut session, "alice", "pw2").unwrap();
    }

    #[test]
    fn test_events_are_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AuthService::new(&storage);
        let mut session = Session::new();

        service.register("alice", "secret-pw").unwrap();
        service.authenticate(&mut session, "alice", "secret-pw").unwrap();

        let entries = storage.audit().unwrap().read_all().unwrap();
        let ops: Vec<Operation> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(ops, vec![Operation::Register, Operation::Login]);

        let raw = std::fs::read_to_string(storage.paths().audit_log()).unwrap();
        assert!(!raw.contains("secret-pw"));
    }
}
