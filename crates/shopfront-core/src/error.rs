//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                     │
//! │  ├── CoreError        - Catalog, cart, payment and ledger failures     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  shopfront-audit errors (separate crate)                               │
//! │  └── AuditError       - Audit log write failures                       │
//! │                                                                         │
//! │  Console errors (in app)                                               │
//! │  └── ConsoleError     - What the menu loop reports                     │
//! │                                                                         │
//! │  Flow: CoreError → ConsoleError → "Error: ..."                          │
//! │        ValidationError (config) → ConsoleError → exit 1                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant here is recoverable: the console prints it and carries on.

use thiserror::Error;

use crate::checkout::CheckoutStage;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No catalog product matches the requested ID.
    #[error("Product ID not found: {0}")]
    ProductNotFound(String),

    /// Quantity was zero or negative.
    ///
    /// ## User Workflow
    /// ```text
    /// Enter the Product ID to add to cart: P002
    /// Enter quantity: 0
    ///      │
    ///      ▼
    /// InvalidQuantity { quantity: 0 }
    ///      │
    ///      ▼
    /// "Error: Invalid quantity: 0" (cart unchanged)
    /// ```
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity { quantity: i64 },

    /// Payment menu selection did not map to a payment method.
    #[error("Invalid payment method: {0}")]
    InvalidPaymentChoice(String),

    /// A bounded collection (catalog, cart, ledger) is full.
    #[error("{collection} cannot hold more than {max} entries")]
    CapacityExceeded {
        collection: &'static str,
        max: usize,
    },

    /// A line or cart total does not fit the money representation.
    #[error("Amount is too large")]
    AmountOverflow,

    /// A checkout transition was requested from the wrong stage.
    #[error("Checkout is {actual:?}, expected {expected:?}")]
    InvalidCheckoutState {
        expected: CheckoutStage,
        actual: CheckoutStage,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("P999".to_string());
        assert_eq!(err.to_string(), "Product ID not found: P999");

        let err = CoreError::CapacityExceeded {
            collection: "Cart",
            max: 20,
        };
        assert_eq!(err.to_string(), "Cart cannot hold more than 20 entries");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "store_name".to_string(),
        };
        assert_eq!(err.to_string(), "store_name is required");
    }
}
