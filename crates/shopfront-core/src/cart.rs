//! # Cart
//!
//! The session's shopping cart.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Console Action             Cart Method          Cart Change            │
//! │  ──────────────             ───────────          ───────────            │
//! │                                                                         │
//! │  Enter ID + quantity ─────► add() ─────────────► entries.push(entry)   │
//! │                                                                         │
//! │  View Shopping Cart ──────► list() / total() ──► (read only)           │
//! │                                                                         │
//! │  Successful checkout ─────► clear() ───────────► entries.clear()       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartEntry, Product};
use crate::validation::{validate_capacity, validate_quantity};
use crate::MAX_CART_ITEMS;

/// The shopping cart.
///
/// ## Invariants
/// - Entries keep insertion order; adding a product twice yields two entries
/// - Every quantity is > 0
/// - At most [`MAX_CART_ITEMS`] entries
/// - The total of all entries fits in [`Money`]
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
    total: Money,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            entries: Vec::new(),
            total: Money::zero(),
        }
    }

    /// Appends `quantity` of `product` to the cart.
    ///
    /// The product is copied, so the entry keeps the price it had when added.
    ///
    /// ## Errors
    /// - `InvalidQuantity` if `quantity <= 0`
    /// - `CapacityExceeded` if the cart already holds [`MAX_CART_ITEMS`] entries
    /// - `AmountOverflow` if the line or cart total would not fit
    ///
    /// The cart is unchanged on every error.
    pub fn add(&mut self, product: &Product, quantity: i64) -> CoreResult<&CartEntry> {
        validate_quantity(quantity)?;
        validate_capacity("Cart", self.entries.len(), MAX_CART_ITEMS)?;

        let entry = CartEntry {
            product: product.clone(),
            quantity,
        };
        let total = self
            .total
            .checked_add(entry.line_total()?)
            .ok_or(CoreError::AmountOverflow)?;

        self.total = total;
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Entries in insertion order.
    pub fn list(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Sum of price × quantity across all entries.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.total = Money::zero();
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
