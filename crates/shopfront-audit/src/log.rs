//! # Audit Log File
//!
//! ## Line Format
//! ```text
//! [LOG] -> Order ID: <id> has been successfully checked out and paid using <method>
//! ```
//!
//! The file is opened in append mode for each line and closed straight
//! after; no handle is kept between checkouts.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use shopfront_core::{Order, OrderJournal};
use tracing::{debug, warn};

use crate::error::{AuditError, AuditResult};

/// Formats the audit line for `order` (without trailing newline).
///
/// ## Example
/// ```rust
/// use shopfront_audit::format_entry;
/// use shopfront_core::{Money, OrderLedger, PaymentMethod};
///
/// let mut ledger = OrderLedger::new();
/// let order = ledger.record(Money::from_major(100), PaymentMethod::Card, &[]).unwrap();
/// assert_eq!(
///     format_entry(order),
///     "[LOG] -> Order ID: 1 has been successfully checked out and paid using Credit / Debit Card"
/// );
/// ```
pub fn format_entry(order: &Order) -> String {
    format!(
        "[LOG] -> Order ID: {} has been successfully checked out and paid using {}",
        order.id,
        order.method_label()
    )
}

/// Append-only audit log at a fixed path.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    /// Points the log at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        AuditLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends the line for `order`.
    pub fn append(&self, order: &Order) -> AuditResult<()> {
        let line = format_entry(order);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;
        writeln!(file, "{}", line).map_err(|source| self.io_error(source))?;

        debug!(path = ?self.path, order_id = order.id, "Audit line appended");
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> AuditError {
        AuditError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl OrderJournal for AuditLog {
    fn order_completed(&mut self, order: &Order) {
        if let Err(e) = self.append(order) {
            warn!(order_id = order.id, error = %e, "Order recorded but audit line was not written");
        }
    }
}
