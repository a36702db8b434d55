//! # Domain Types
//!
//! Core domain types used throughout Shopfront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   CartEntry     │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id ("P002")    │◄──│  product (copy) │◄──│  id (1, 2, ...) │       │
//! │  │  name           │   │  quantity       │   │  total_cents    │       │
//! │  │  price_cents    │   └─────────────────┘   │  payment_method │       │
//! │  └─────────────────┘                         │  items          │       │
//! │                                              │  placed_at      │       │
//! │  ┌─────────────────┐                         └─────────────────┘       │
//! │  │ PaymentMethod   │                                                   │
//! │  │  ─────────────  │                                                   │
//! │  │  Cash           │                                                   │
//! │  │  Card           │                                                   │
//! │  │  GCash          │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Cart entries copy the product they were created from, and orders copy the
//! cart entries. Nothing holds a reference back into the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Business identifier, matched case-insensitively ("P001").
    pub id: String,

    /// Display name.
    pub name: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,
}

impl Product {
    /// Creates a product.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price_cents: price.cents(),
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether `id` names this product, ignoring ASCII case.
    #[inline]
    pub fn matches_id(&self, id: &str) -> bool {
        self.id.eq_ignore_ascii_case(id)
    }
}

// =============================================================================
// Cart Entry
// =============================================================================

/// A line in the cart, and later in an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Product copied at the time it was added.
    pub product: Product,

    /// Quantity, always positive.
    pub quantity: i64,
}

impl CartEntry {
    /// Returns price × quantity, or `AmountOverflow` if it does not fit.
    ///
    /// Never fails for entries produced by [`Cart`](crate::Cart).
    pub fn line_total(&self) -> CoreResult<Money> {
        self.product
            .price()
            .checked_multiply_quantity(self.quantity)
            .ok_or(CoreError::AmountOverflow)
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// The ways a customer can pay.
///
/// ## Menu Mapping
/// ```text
/// 1. Cash                 → PaymentMethod::Cash
/// 2. Credit / Debit Card  → PaymentMethod::Card
/// 3. GCash                → PaymentMethod::GCash
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Credit or debit card.
    Card,
    /// GCash mobile wallet.
    #[serde(rename = "gcash")]
    GCash,
}

impl PaymentMethod {
    /// All methods in menu order.
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Cash,
        PaymentMethod::Card,
        PaymentMethod::GCash,
    ];

    /// Human-readable label, as shown in menus, orders and the audit log.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Credit / Debit Card",
            PaymentMethod::GCash => "GCash",
        }
    }

    /// The menu number that selects this method.
    pub const fn choice(&self) -> u32 {
        match self {
            PaymentMethod::Cash => 1,
            PaymentMethod::Card => 2,
            PaymentMethod::GCash => 3,
        }
    }

    /// Maps typed menu input to a method.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::PaymentMethod;
    ///
    /// assert_eq!(PaymentMethod::from_choice("2").unwrap(), PaymentMethod::Card);
    /// assert!(PaymentMethod::from_choice("9").is_err());
    /// assert!(PaymentMethod::from_choice("card").is_err());
    /// ```
    pub fn from_choice(input: &str) -> CoreResult<Self> {
        let trimmed = input.trim();
        trimmed
            .parse::<u32>()
            .ok()
            .and_then(|n| Self::ALL.into_iter().find(|m| m.choice() == n))
            .ok_or_else(|| CoreError::InvalidPaymentChoice(trimmed.to_string()))
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Order
// =============================================================================

/// A completed checkout. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Sequential identifier, starting at 1.
    pub id: u64,

    /// Total charged, in cents.
    pub total_cents: i64,

    /// How the order was paid.
    pub payment_method: PaymentMethod,

    /// Cart entries at checkout time (frozen).
    pub items: Vec<CartEntry>,

    /// When the order was recorded.
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Returns the payment method label.
    #[inline]
    pub fn method_label(&self) -> &'static str {
        self.payment_method.label()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_matches_id_case_insensitively() {
        let pen = Product::new("P001", "Pen", Money::from_major(10));
        assert!(pen.matches_id("P001"));
        assert!(pen.matches_id("p001"));
        assert!(!pen.matches_id("P0011"));
        assert!(!pen.matches_id(""));
    }

    #[test]
    fn test_cart_entry_line_total() {
        let entry = CartEntry {
            product: Product::new("P002", "Notebook", Money::from_major(50)),
            quantity: 2,
        };
        assert_eq!(entry.line_total().unwrap(), Money::from_major(100));
    }

    #[test]
    fn test_cart_entry_line_total_overflow() {
        let entry = CartEntry {
            product: Product::new("P002", "Notebook", Money::from_major(50)),
            quantity: i64::MAX,
        };
        assert!(matches!(entry.line_total(), Err(CoreError::AmountOverflow)));
    }

    #[test]
    fn test_payment_method_labels() {
        assert_eq!(PaymentMethod::Cash.label(), "Cash");
        assert_eq!(PaymentMethod::Card.label(), "Credit / Debit Card");
        assert_eq!(PaymentMethod::GCash.to_string(), "GCash");
    }

    #[test]
    fn test_payment_method_from_choice() {
        assert_eq!(PaymentMethod::from_choice("1").unwrap(), PaymentMethod::Cash);
        assert_eq!(PaymentMethod::from_choice(" 2 ").unwrap(), PaymentMethod::Card);
        assert_eq!(PaymentMethod::from_choice("3").unwrap(), PaymentMethod::GCash);

        for bad in ["0", "4", "9", "-1", "", "cash"] {
            assert!(matches!(
                PaymentMethod::from_choice(bad),
                Err(CoreError::InvalidPaymentChoice(_))
            ));
        }
    }

    #[test]
    fn test_choice_round_trips_for_every_method() {
        for method in PaymentMethod::ALL {
            let parsed = PaymentMethod::from_choice(&method.choice().to_string()).unwrap();
            assert_eq!(parsed, method);
        }
    }
}
