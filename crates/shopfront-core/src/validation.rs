//! # Validation Module
//!
//! Input and capacity rules shared by the catalog, cart, ledger and console.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console (apps/console)                                       │
//! │  ├── Parse typed text into numbers                                     │
//! │  └── Report "Error: ..." and re-prompt                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Quantity positivity                                               │
//! │  ├── Collection capacity                                               │
//! │  └── Required configuration values                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing beyond quantity positivity and product-ID lookup is checked on
//! user input.

use crate::error::{CoreError, CoreResult, ValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// ## Example
/// ```rust
/// use shopfront_core::validation::validate_quantity;
///
/// assert!(validate_quantity(2).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(-3).is_err());
/// ```
pub fn validate_quantity(quantity: i64) -> CoreResult<()> {
    if quantity <= 0 {
        return Err(CoreError::InvalidQuantity { quantity });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that a bounded collection has room for one more entry.
///
/// ## Rules
/// - `current` must be strictly below `max`
pub fn validate_capacity(collection: &'static str, current: usize, max: usize) -> CoreResult<()> {
    if current >= max {
        return Err(CoreError::CapacityExceeded { collection, max });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a required text value is present.
///
/// ## Rules
/// - Must not be empty after trimming
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
