//! # Console Error Type
//!
//! Unified error type for the menu loop and its commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Shopfront                              │
//! │                                                                         │
//! │  Bad input (recoverable)                                                │
//! │  ───────────────────────                                                │
//! │  CoreError::ProductNotFound ──┐                                         │
//! │  CoreError::InvalidQuantity ──┼──► ConsoleError ──► "Error: ..."        │
//! │  InvalidNumber / MenuChoice ──┘                     loop continues      │
//! │                                                                         │
//! │  Environment failures (fatal)                                           │
//! │  ────────────────────────────                                           │
//! │  Io (stdin/stdout) ───────────┐                                         │
//! │  Config / Validation ─────────┴──► returned from run() ──► exit 1       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shopfront_core::{CoreError, ValidationError};
use thiserror::Error;

/// Console application errors.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Business rule failure from shopfront-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Top-level menu input did not name a menu entry.
    #[error("Invalid choice: {0}")]
    InvalidMenuChoice(String),

    /// A number was expected.
    #[error("Invalid {field}: {input}")]
    InvalidNumber { field: &'static str, input: String },

    /// Reading stdin or writing stdout failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be read or parsed.
    #[error("Failed to load config: {0}")]
    Config(String),

    /// Config values failed validation.
    #[error("Invalid config: {0}")]
    Validation(#[from] ValidationError),
}

impl From<toml::de::Error> for ConsoleError {
    fn from(err: toml::de::Error) -> Self {
        ConsoleError::Config(err.to_string())
    }
}

impl ConsoleError {
    /// True for errors caused by what the user typed.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ConsoleError::Core(_)
                | ConsoleError::InvalidMenuChoice(_)
                | ConsoleError::InvalidNumber { .. }
        )
    }
}

/// Result type alias for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_display_transparently() {
        let err: ConsoleError = CoreError::ProductNotFound("P042".to_string()).into();
        assert_eq!(err.to_string(), "Product ID not found: P042");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_invalid_number_message() {
        let err = ConsoleError::InvalidNumber {
            field: "quantity",
            input: "two".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid quantity: two");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_environment_errors_are_not_input_errors() {
        let err: ConsoleError = std::io::Error::other("broken pipe").into();
        assert!(!err.is_input_error());

        let err = ConsoleError::Config("bad toml".to_string());
        assert!(!err.is_input_error());
    }
}
