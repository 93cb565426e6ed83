//! Registration and login for one-shot commands

use clap::Args;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Session;
use crate::services::AuthService;
use crate::storage::Storage;

/// Environment variable consulted when `--password` is omitted
pub const PASSWORD_ENV: &str = "EXPENSES_PASSWORD";

/// Credentials accepted by every command that needs a session
#[derive(Args, Debug, Clone)]
pub struct LoginArgs {
    /// Username to log in as
    #[arg(short, long)]
    pub user: String,

    /// Password (prompted for if not given)
    #[arg(short, long, env = PASSWORD_ENV, hide_env_values = true)]
    pub password: Option<String>,
}

/// Use the given password or prompt for one with hidden input
pub fn resolve_password(password: Option<String>) -> ExpenseResult<String> {
    match password {
        Some(password) => Ok(password),
        None => prompt_password("Password: "),
    }
}

pub(crate) fn prompt_password(prompt: &str) -> ExpenseResult<String> {
    rpassword::prompt_password(prompt)
        .map_err(|e| ExpenseError::Io(format!("Failed to read password: {}", e)))
}

/// Authenticate and return the started session
pub fn login(storage: &Storage, args: LoginArgs) -> ExpenseResult<Session> {
    let password = resolve_password(args.password)?;

    let mut session = Session::new();
    AuthService::new(storage).authenticate(&mut session, &args.user, &password)?;
    Ok(session)
}

/// Handle `register`
pub fn handle_register(
    storage: &Storage,
    username: &str,
    password: Option<String>,
) -> ExpenseResult<()> {
    let password = resolve_password(password)?;
    AuthService::new(storage).register(username, &password)?;

    println!("Registration successful.");
    println!(
        "Note: passwords are stored unencrypted in {}",
        storage.credentials.path().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExpensePaths, Settings};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_resolve_given_password() {
        assert_eq!(resolve_password(Some("pw".into())).unwrap(), "pw");
    }

    #[test]
    fn test_register_and_login() {
        let (_temp_dir, storage) = create_test_storage();
        handle_register(&storage, "alice", Some("pw1".into())).unwrap();

        let session = login(
            &storage,
            LoginArgs {
                user: "alice".into(),
                password: Some("pw1".into()),
            },
        )
        .unwrap();
        assert_eq!(session.current_user(), Some("alice"));

        let err = login(
            &storage,
            LoginArgs {
                user: "alice".into(),
                password: Some("nope".into()),
            },
        )
        .unwrap_err();
        assert!(err.is_authentication());
    }
}
