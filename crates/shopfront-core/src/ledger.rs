//! # Order Ledger
//!
//! Append-only history of completed checkouts, kept for the life of the
//! process. Orders are never updated or removed.

use chrono::Utc;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{CartEntry, Order, PaymentMethod};
use crate::validation::validate_capacity;
use crate::MAX_ORDERS;

/// The list of recorded orders, oldest first.
#[derive(Debug, Clone, Default)]
pub struct OrderLedger {
    orders: Vec<Order>,
}

impl OrderLedger {
    pub fn new() -> Self {
        OrderLedger { orders: Vec::new() }
    }

    /// Records a completed checkout and returns the stored order.
    ///
    /// The order ID is the current order count plus one. `items` is copied.
    ///
    /// ## Errors
    /// `CapacityExceeded` once [`MAX_ORDERS`] orders exist.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::{Money, OrderLedger, PaymentMethod};
    ///
    /// let mut ledger = OrderLedger::new();
    /// let order = ledger.record(Money::from_major(5), PaymentMethod::Cash, &[]).unwrap();
    /// assert_eq!(order.id, 1);
    /// ```
    pub fn record(
        &mut self,
        total: Money,
        method: PaymentMethod,
        items: &[CartEntry],
    ) -> CoreResult<&Order> {
        self.ensure_room()?;

        let order = Order {
            id: self.orders.len() as u64 + 1,
            total_cents: total.cents(),
            payment_method: method,
            items: items.to_vec(),
            placed_at: Utc::now(),
        };
        self.orders.push(order);

        Ok(&self.orders[self.orders.len() - 1])
    }

    /// Fails with `CapacityExceeded` if another order cannot be recorded.
    pub fn ensure_room(&self) -> CoreResult<()> {
        validate_capacity("Order ledger", self.orders.len(), MAX_ORDERS)
    }

    /// All orders in creation order.
    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    /// The most recently recorded order.
    pub fn latest(&self) -> Option<&Order> {
        self.orders.last()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
