//! # Audit Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Audit log failures.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The log file could not be opened or written.
    ///
    /// ## When This Occurs
    /// - Parent directory does not exist
    /// - File permissions issue
    /// - Disk full
    #[error("Failed to write audit log {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for audit operations.
pub type AuditResult<T> = Result<T, AuditError>;
