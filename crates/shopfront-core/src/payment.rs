//! # Payment
//!
//! The single dispatch point every checkout pays through.
//!
//! ## Payment Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Select Payment Method: 2                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PaymentMethod::from_choice("2") ──► PaymentMethod::Card                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PaymentProcessor::pay(Card, 100.00) ← THIS MODULE                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "Paid 100.00 using Credit / Debit Card."                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No money moves: every method only confirms. Payment cannot fail.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;
use crate::types::PaymentMethod;

/// Result of a payment: what was charged and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub method: PaymentMethod,
    pub amount: Money,
}

impl fmt::Display for PaymentConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paid {} using {}.", self.amount, self.method.label())
    }
}

/// Routes payments to the behavior of the chosen method.
///
/// Stateless; construct one where checkout happens and pass it down.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentProcessor;

impl PaymentProcessor {
    pub fn new() -> Self {
        PaymentProcessor
    }

    /// Pays `amount` with `method`.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::{Money, PaymentMethod, PaymentProcessor};
    ///
    /// let confirmation = PaymentProcessor::new().pay(PaymentMethod::Cash, Money::from_major(15));
    /// assert_eq!(confirmation.to_string(), "Paid 15.00 using Cash.");
    /// ```
    pub fn pay(&self, method: PaymentMethod, amount: Money) -> PaymentConfirmation {
        PaymentConfirmation { method, amount }
    }
}
