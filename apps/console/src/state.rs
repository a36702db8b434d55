//! # Session State
//!
//! Everything one console session owns. Single-threaded, so plain fields
//! instead of shared locks; commands borrow the parts they need.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    AppState                                             │
//! │                                                                         │
//! │  config     ConsoleConfig      read-only after startup                  │
//! │  catalog    Catalog            fixed product list                       │
//! │  cart       Cart               cleared after each checkout              │
//! │  ledger     OrderLedger        grows by one per checkout                │
//! │  processor  PaymentProcessor   stateless                                │
//! │  audit      AuditLog           appends to config.audit_log_path         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shopfront_audit::AuditLog;
use shopfront_core::{Cart, Catalog, OrderLedger, PaymentProcessor};

use crate::config::ConsoleConfig;

#[derive(Debug)]
pub struct AppState {
    pub config: ConsoleConfig,
    pub catalog: Catalog,
    pub cart: Cart,
    pub ledger: OrderLedger,
    pub processor: PaymentProcessor,
    pub audit: AuditLog,
}

impl AppState {
    /// Creates a fresh session with the standard catalog.
    pub fn new(config: ConsoleConfig) -> Self {
        let audit = AuditLog::new(config.audit_log_path.clone());

        AppState {
            config,
            catalog: Catalog::standard(),
            cart: Cart::new(),
            ledger: OrderLedger::new(),
            processor: PaymentProcessor::new(),
            audit,
        }
    }
}
