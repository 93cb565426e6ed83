//! Interactive shell
//!
//! Mirrors a desktop session: a login screen first, then an expense screen
//! that keeps the ledger in memory until the user saves. The session lasts
//! until the shell exits.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::{format_breakdown, format_expense_table, format_total};
use crate::error::ExpenseResult;
use crate::models::{Ledger, Session};
use crate::services::{AuthService, LedgerService};
use crate::storage::Storage;

use super::auth::prompt_password;

const LOGIN_HELP: &str = "Commands: login, register, quit";

const TRACKER_HELP: &str = "\
Commands:
  add        Add an expense (prompts for date, category, amount)
  list       Show all expenses
  breakdown  Show category-wise totals
  total      Show the running total
  save       Save expenses to file
  help       Show this help
  quit       Exit";

/// Line-driven shell over any reader/writer pair
pub struct Shell<'a, R, W> {
    storage: &'a Storage,
    settings: &'a Settings,
    input: R,
    output: W,
    session: Session,
    ledger: Ledger,
    unsaved: bool,
    hide_passwords: bool,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(storage: &'a Storage, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            storage,
            settings,
            input,
            output,
            session: Session::new(),
            ledger: Ledger::new(),
            unsaved: false,
            hide_passwords: false,
        }
    }

    /// Read passwords from the terminal without echo instead of from `input`
    pub fn hide_passwords(mut self, hide: bool) -> Self {
        self.hide_passwords = hide;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "Expense Tracker")?;
        writeln!(self.output, "{}", LOGIN_HELP)?;

        if self.login_screen()? {
            self.tracker_screen()?;
        }
        Ok(())
    }

    /// Returns `true` once a user has logged in
    fn login_screen(&mut self) -> ExpenseResult<bool> {
        loop {
            let Some(command) = self.read_line("> ")? else {
                return Ok(false);
            };

            match command.trim() {
                "" => {}
                "login" => {
                    if self.login()? {
                        return Ok(true);
                    }
                }
                "register" => self.register()?,
                "quit" | "exit" => return Ok(false),
                "help" => writeln!(self.output, "{}", LOGIN_HELP)?,
                other => writeln!(
                    self.output,
                    "Unknown command '{}'. {}",
                    other, LOGIN_HELP
                )?,
            }
        }
    }

    fn read_credentials(&mut self) -> ExpenseResult<Option<(String, String)>> {
        let Some(username) = self.read_line("Username: ")? else {
            return Ok(None);
        };
        let password = if self.hide_passwords {
            prompt_password("Password: ")?
        } else {
            match self.read_line("Password: ")? {
                Some(password) => password,
                None => return Ok(None),
            }
        };
        Ok(Some((username, password)))
    }

    fn register(&mut self) -> ExpenseResult<()> {
        let Some((username, password)) = self.read_credentials()? else {
            return Ok(());
        };

        match AuthService::new(self.storage).register(&username, &password) {
            Ok(()) => writeln!(self.output, "Registration successful.")?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    fn login(&mut self) -> ExpenseResult<bool> {
        let Some((username, password)) = self.read_credentials()? else {
            return Ok(false);
        };

        let auth = AuthService::new(self.storage);
        if let Err(e) = auth.authenticate(&mut self.session, &username, &password) {
            writeln!(self.output, "Error: {}", e)?;
            return Ok(false);
        }
        writeln!(self.output, "Login successful.")?;

        let service = LedgerService::new(self.storage).for_session(&self.session);
        match service.load_from_store(&mut self.ledger) {
            Ok(_) => writeln!(self.output, "Expenses loaded successfully.")?,
            Err(e) => writeln!(self.output, "Error loading expenses from file: {}", e)?,
        }
        let total = self.total_line();
        writeln!(self.output, "{}", total)?;
        Ok(true)
    }

    fn tracker_screen(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "{}", TRACKER_HELP)?;

        loop {
            let prompt = format!("{}> ", self.session.current_user().unwrap_or_default());
            let Some(command) = self.read_line(&prompt)? else {
                break;
            };

            match command.trim() {
                "" => {}
                "add" => {
                    if !self.add()? {
                        break;
                    }
                }
                "list" => {
                    let table =
                        format_expense_table(self.ledger.records(), &self.settings.currency_symbol);
                    let total = self.total_line();
                    writeln!(self.output, "{}\n{}", table, total)?;
                }
                "breakdown" => {
                    let breakdown = format_breakdown(
                        &self.ledger.category_breakdown(),
                        &self.settings.currency_symbol,
                    );
                    write!(self.output, "{}", breakdown)?;
                }
                "total" => {
                    let total = self.total_line();
                    writeln!(self.output, "{}", total)?;
                }
                "save" => self.save()?,
                "help" => writeln!(self.output, "{}", TRACKER_HELP)?,
                "quit" | "exit" => break,
                other => writeln!(
                    self.output,
                    "Unknown command '{}'. Type 'help' for a list of commands.",
                    other
                )?,
            }
        }

        if self.unsaved {
            writeln!(self.output, "Unsaved expenses were discarded.")?;
        }
        Ok(())
    }

    /// Returns `false` if input ended mid-entry
    fn add(&mut self) -> ExpenseResult<bool> {
        let Some(date) = self.read_line("Date (YYYY-MM-DD): ")? else {
            return Ok(false);
        };
        let Some(category) = self.read_line("Category: ")? else {
            return Ok(false);
        };
        let Some(amount) = self.read_line("Amount: ")? else {
            return Ok(false);
        };

        let service = LedgerService::new(self.storage).for_session(&self.session);
        match service.add_expense(&mut self.ledger, &date, &category, &amount) {
            Ok(added) => {
                self.unsaved = true;
                writeln!(self.output, "{}", added.line)?;
                writeln!(
                    self.output,
                    "{}",
                    format_total(added.total, &self.settings.currency_symbol)
                )?;
            }
            Err(e) if e.is_parse() => {
                writeln!(self.output, "Please enter a valid amount. ({})", e)?
            }
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(true)
    }

    fn save(&mut self) -> ExpenseResult<()> {
        let service = LedgerService::new(self.storage).for_session(&self.session);
        match service.save_to_store(&self.ledger) {
            Ok(()) => {
                self.unsaved = false;
                writeln!(self.output, "Expenses saved to file.")?;
            }
            Err(e) => writeln!(self.output, "Error saving expenses to file: {}", e)?,
        }
        Ok(())
    }

    fn total_line(&self) -> String {
        format_total(self.ledger.total(), &self.settings.currency_symbol)
    }

    /// Prompt and read one line without its terminator; `None` at end of input
    fn read_line(&mut self, prompt: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
