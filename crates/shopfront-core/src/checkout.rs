//! # Checkout
//!
//! The state machine that turns the cart into an order.
//!
//! ## Stages
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Lifecycle                                   │
//! │                                                                         │
//! │  ┌──────────┐ review() ┌────────────┐ confirm(true) ┌──────────────────┐│
//! │  │ Browsing │─────────►│ CartReview │──────────────►│ PaymentSelection ││
//! │  └──────────┘          └────────────┘               └────────┬─────────┘│
//! │       │                      │                               │          │
//! │       │ cart empty           │ confirm(false)         pay(choice)       │
//! │       ▼                      ▼                       ┌───────┴───────┐  │
//! │  ┌──────────┐          ┌───────────┐                 ▼               ▼  │
//! │  │  Empty   │          │ Cancelled │◄──── invalid ─ choice?      valid  │
//! │  └──────────┘          └───────────┘                                 │  │
//! │                                                      ┌───────────┐   │  │
//! │                                                      │ Completed │◄──┘  │
//! │                                                      └───────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Completing
//! A valid payment choice runs, in order: total → payment → order recorded
//! → [`OrderJournal`] notified → cart cleared. Nothing happens on any
//! other path: the cart keeps its entries and no order exists.

use serde::Serialize;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::ledger::OrderLedger;
use crate::money::Money;
use crate::payment::{PaymentConfirmation, PaymentProcessor};
use crate::types::{CartEntry, Order, PaymentMethod};

/// Where a checkout is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStage {
    /// Not started.
    Browsing,
    /// Cart was empty; nothing to check out.
    Empty,
    /// Cart shown, waiting for the customer to confirm.
    CartReview,
    /// Confirmed, waiting for a payment method.
    PaymentSelection,
    /// Paid and recorded.
    Completed,
    /// Declined or given an invalid payment method.
    Cancelled,
}

impl CheckoutStage {
    /// True once no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CheckoutStage::Empty | CheckoutStage::Completed | CheckoutStage::Cancelled
        )
    }
}

/// Receives each order as soon as it is recorded.
///
/// Implemented by the audit log. Write failures are the journal's to report;
/// they never undo a recorded order.
pub trait OrderJournal {
    fn order_completed(&mut self, order: &Order);
}

/// Outcome of a completed checkout.
#[derive(Debug, Clone)]
pub struct CompletedCheckout {
    pub order: Order,
    pub payment: PaymentConfirmation,
}

/// One pass through the checkout flow over a cart and ledger.
#[derive(Debug)]
pub struct Checkout<'a> {
    cart: &'a mut Cart,
    ledger: &'a mut OrderLedger,
    stage: CheckoutStage,
}

impl<'a> Checkout<'a> {
    /// Starts in [`CheckoutStage::Browsing`].
    pub fn new(cart: &'a mut Cart, ledger: &'a mut OrderLedger) -> Self {
        Checkout {
            cart,
            ledger,
            stage: CheckoutStage::Browsing,
        }
    }

    pub fn stage(&self) -> CheckoutStage {
        self.stage
    }

    /// Entries being checked out.
    pub fn entries(&self) -> &[CartEntry] {
        self.cart.list()
    }

    /// Amount that will be charged.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Opens the cart for review; an empty cart ends the checkout.
    pub fn review(&mut self) -> CoreResult<CheckoutStage> {
        self.expect_stage(CheckoutStage::Browsing)?;

        self.stage = if self.cart.is_empty() {
            CheckoutStage::Empty
        } else {
            CheckoutStage::CartReview
        };
        Ok(self.stage)
    }

    /// Records the customer's answer to "checkout all products?".
    pub fn confirm(&mut self, proceed: bool) -> CoreResult<CheckoutStage> {
        self.expect_stage(CheckoutStage::CartReview)?;

        self.stage = if proceed {
            CheckoutStage::PaymentSelection
        } else {
            CheckoutStage::Cancelled
        };
        Ok(self.stage)
    }

    /// Pays with the method typed at the payment menu and records the order.
    ///
    /// ## Errors
    /// - `InvalidPaymentChoice`: the choice maps to no method; checkout is
    ///   cancelled, the cart is kept
    /// - `CapacityExceeded`: the ledger is full; checkout is cancelled
    ///   before any payment is made
    pub fn pay(
        &mut self,
        choice: &str,
        processor: &PaymentProcessor,
        journal: &mut dyn OrderJournal,
    ) -> CoreResult<CompletedCheckout> {
        self.expect_stage(CheckoutStage::PaymentSelection)?;

        let method = match self.select(choice) {
            Ok(method) => method,
            Err(err) => {
                self.stage = CheckoutStage::Cancelled;
                return Err(err);
            }
        };

        let total = self.cart.total();
        let payment = processor.pay(method, total);
        let order = self.ledger.record(total, method, self.cart.list())?.clone();
        journal.order_completed(&order);
        self.cart.clear();

        self.stage = CheckoutStage::Completed;
        Ok(CompletedCheckout { order, payment })
    }

    fn select(&self, choice: &str) -> CoreResult<PaymentMethod> {
        let method = PaymentMethod::from_choice(choice)?;
        self.ledger.ensure_room()?;
        Ok(method)
    }

    fn expect_stage(&self, expected: CheckoutStage) -> CoreResult<()> {
        if self.stage != expected {
            return Err(CoreError::InvalidCheckoutState {
                expected,
                actual: self.stage,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::MAX_ORDERS;

    #[derive(Default)]
    struct RecordingJournal {
        order_ids: Vec<u64>,
    }

    impl OrderJournal for RecordingJournal {
        fn order_completed(&mut self, order: &Order) {
            self.order_ids.push(order.id);
        }
    }

    fn cart_with_notebooks(quantity: i64) -> Cart {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add(catalog.lookup("P002").unwrap(), quantity).unwrap();
        cart
    }

    #[test]
    fn test_empty_cart_short_circuits() {
        let mut cart = Cart::new();
        let mut ledger = OrderLedger::new();
        let mut checkout = Checkout::new(&mut cart, &mut ledger);

        assert_eq!(checkout.review().unwrap(), CheckoutStage::Empty);
        assert!(checkout.stage().is_terminal());
        assert!(matches!(
            checkout.confirm(true),
            Err(CoreError::InvalidCheckoutState { .. })
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_completed_checkout() {
        let mut cart = cart_with_notebooks(2);
        let mut ledger = OrderLedger::new();
        let mut journal = RecordingJournal::default();
        let processor = PaymentProcessor::new();

        let pre_total = cart.total();
        let done = {
            let mut checkout = Checkout::new(&mut cart, &mut ledger);
            assert_eq!(checkout.review().unwrap(), CheckoutStage::CartReview);
            assert_eq!(checkout.confirm(true).unwrap(), CheckoutStage::PaymentSelection);
            let done = checkout.pay("2", &processor, &mut journal).unwrap();
            assert_eq!(checkout.stage(), CheckoutStage::Completed);
            done
        };

        assert_eq!(done.order.id, 1);
        assert_eq!(done.order.total(), Money::from_major(100));
        assert_eq!(done.order.total(), pre_total);
        assert_eq!(done.order.method_label(), "Credit / Debit Card");
        assert_eq!(done.order.items.len(), 1);
        assert_eq!(done.order.items[0].product.name, "Notebook");
        assert_eq!(done.order.items[0].quantity, 2);
        assert_eq!(done.payment.to_string(), "Paid 100.00 using Credit / Debit Card.");

        assert!(cart.is_empty());
        assert_eq!(ledger.latest().unwrap().total(), pre_total);
        assert_eq!(journal.order_ids, [1]);
    }

    #[test]
    fn test_declined_checkout_keeps_cart() {
        let mut cart = cart_with_notebooks(1);
        let mut ledger = OrderLedger::new();

        let mut checkout = Checkout::new(&mut cart, &mut ledger);
        checkout.review().unwrap();
        assert_eq!(checkout.confirm(false).unwrap(), CheckoutStage::Cancelled);

        assert_eq!(cart.len(), 1);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_invalid_payment_choice_cancels() {
        let mut cart = cart_with_notebooks(3);
        let mut ledger = OrderLedger::new();
        let mut journal = RecordingJournal::default();

        let mut checkout = Checkout::new(&mut cart, &mut ledger);
        checkout.review().unwrap();
        checkout.confirm(true).unwrap();
        assert!(matches!(
            checkout.pay("9", &PaymentProcessor::new(), &mut journal),
            Err(CoreError::InvalidPaymentChoice(_))
        ));
        assert_eq!(checkout.stage(), CheckoutStage::Cancelled);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.list()[0].quantity, 3);
        assert!(ledger.is_empty());
        assert!(journal.order_ids.is_empty());
    }

    #[test]
    fn test_pay_requires_confirmation() {
        let mut cart = cart_with_notebooks(1);
        let mut ledger = OrderLedger::new();
        let mut journal = RecordingJournal::default();

        let mut checkout = Checkout::new(&mut cart, &mut ledger);
        checkout.review().unwrap();
        let err = checkout
            .pay("1", &PaymentProcessor::new(), &mut journal)
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::InvalidCheckoutState {
                expected: CheckoutStage::PaymentSelection,
                actual: CheckoutStage::CartReview,
            }
        ));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_order_ids_increase_across_checkouts() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        let mut ledger = OrderLedger::new();
        let mut journal = RecordingJournal::default();
        let processor = PaymentProcessor::new();

        for (round, choice) in ["1", "2", "3", "1"].into_iter().enumerate() {
            cart.add(catalog.lookup("P001").unwrap(), round as i64 + 1).unwrap();
            let mut checkout = Checkout::new(&mut cart, &mut ledger);
            checkout.review().unwrap();
            checkout.confirm(true).unwrap();
            let done = checkout.pay(choice, &processor, &mut journal).unwrap();
            assert_eq!(done.order.id, round as u64 + 1);
        }

        assert_eq!(journal.order_ids, [1, 2, 3, 4]);
        let totals: Vec<i64> = ledger.list().iter().map(|o| o.total().major()).collect();
        assert_eq!(totals, [10, 20, 30, 40]);
    }

    #[test]
    fn test_full_ledger_cancels_before_payment() {
        let mut ledger = OrderLedger::new();
        for _ in 0..MAX_ORDERS {
            ledger
                .record(Money::from_major(1), PaymentMethod::Cash, &[])
                .unwrap();
        }
        let mut cart = cart_with_notebooks(1);
        let mut journal = RecordingJournal::default();

        let mut checkout = Checkout::new(&mut cart, &mut ledger);
        checkout.review().unwrap();
        checkout.confirm(true).unwrap();
        assert!(matches!(
            checkout.pay("1", &PaymentProcessor::new(), &mut journal),
            Err(CoreError::CapacityExceeded { .. })
        ));
        assert_eq!(checkout.stage(), CheckoutStage::Cancelled);
        assert_eq!(cart.len(), 1);
        assert!(journal.order_ids.is_empty());
    }
}
