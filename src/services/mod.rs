//! Service layer for the expense tracker
//!
//! Services sit between the presentation layer and storage: they validate
//! input, drive the ledger, and write audit entries.

pub mod auth;
pub mod ledger;

pub use auth::AuthService;
pub use ledger::LedgerService;

use crate::audit::AuditEntry;
use crate::storage::Storage;

/// Write an audit entry without failing the operation it describes
///
/// The operation has already taken effect by the time it is audited, so a
/// broken audit log is reported on stderr instead.
pub(crate) fn audit(storage: &Storage, entry: AuditEntry) {
    if let Err(e) = storage.log(entry) {
        eprintln!("Warning: failed to write audit log: {}", e);
    }
}
