//! # shopfront-audit: Audit Log for Shopfront
//!
//! Appends one line per completed checkout to a plain-text file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Data Flow                              │
//! │                                                                         │
//! │  Checkout::pay (shopfront-core)                                        │
//! │       │ OrderJournal::order_completed(&order)                          │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  shopfront-audit (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   open(append) ──► write one line ──► close                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  log.txt                                                               │
//! │  [LOG] -> Order ID: 1 has been successfully checked out and paid ...  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shopfront_audit::AuditLog;
//!
//! let log = AuditLog::new("log.txt");
//! // Hand `&mut log` to `Checkout::pay` as its journal.
//! ```

pub mod error;
pub mod log;

pub use error::{AuditError, AuditResult};
pub use log::{format_entry, AuditLog};
