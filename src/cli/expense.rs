//! Expense CLI commands
//!
//! Each command logs in, loads the ledger from the expenses file, and
//! renders the result.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::Settings;
use crate::display::{format_breakdown, format_expense_table, format_total};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::ExportFormat;
use crate::models::{Ledger, Session};
use crate::services::LedgerService;
use crate::storage::Storage;

use super::auth::{login, LoginArgs};

fn open_ledger(storage: &Storage, args: LoginArgs) -> ExpenseResult<(Session, Ledger)> {
    let session = login(storage, args)?;

    let mut ledger = Ledger::new();
    LedgerService::new(storage)
        .for_session(&session)
        .load_from_store(&mut ledger)?;

    Ok((session, ledger))
}

/// Handle `add`: append one expense and save
pub fn handle_add(
    storage: &Storage,
    settings: &Settings,
    args: LoginArgs,
    date: &str,
    category: &str,
    amount: &str,
) -> ExpenseResult<()> {
    let (session, mut ledger) = open_ledger(storage, args)?;
    let service = LedgerService::new(storage).for_session(&session);

    let added = service.add_expense(&mut ledger, date, category, amount)?;
    service.save_to_store(&ledger)?;

    println!("{}", added.line);
    println!("{}", format_total(added.total, &settings.currency_symbol));
    Ok(())
}

/// Handle `list`
pub fn handle_list(storage: &Storage, settings: &Settings, args: LoginArgs) -> ExpenseResult<()> {
    let (_session, ledger) = open_ledger(storage, args)?;

    println!(
        "{}",
        format_expense_table(ledger.records(), &settings.currency_symbol)
    );
    println!("{}", format_total(ledger.total(), &settings.currency_symbol));
    Ok(())
}

/// Handle `breakdown`
pub fn handle_breakdown(
    storage: &Storage,
    settings: &Settings,
    args: LoginArgs,
) -> ExpenseResult<()> {
    let (_session, ledger) = open_ledger(storage, args)?;

    print!(
        "{}",
        format_breakdown(&ledger.category_breakdown(), &settings.currency_symbol)
    );
    Ok(())
}

/// Handle `export`: write to a file, or stdout when no output is given
pub fn handle_export(
    storage: &Storage,
    args: LoginArgs,
    format: &str,
    output: Option<PathBuf>,
) -> ExpenseResult<()> {
    let format: ExportFormat = format.parse()?;
    let (_session, ledger) = open_ledger(storage, args)?;

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                ExpenseError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            format.write(&ledger, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ExpenseError::Export(e.to_string()))?;
            println!("Exported {} expenses to {}", ledger.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            format.write(&ledger, stdout.lock())?;
        }
    }

    Ok(())
}
