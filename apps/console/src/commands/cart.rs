//! # Cart Commands
//!
//! Viewing the cart leads straight into checkout.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Flow                                        │
//! │                                                                         │
//! │  review ──► Empty ──────────────► "Shopping cart is empty!"             │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  CartReview ──► "checkout all products? (Y/N)" ──► N ──► Cancelled      │
//! │    │ Y                                                                  │
//! │    ▼                                                                    │
//! │  PaymentSelection ──► 1 / 2 / 3 ──► pay, record, log, clear ──► done    │
//! │                         │ other                                         │
//! │                         └──► "Transaction cancelled." (cart kept)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use shopfront_core::{Checkout, CheckoutStage, CoreError, PaymentMethod};
use tracing::{debug, info, warn};

use crate::commands::report;
use crate::console::Console;
use crate::display;
use crate::error::ConsoleResult;
use crate::state::AppState;

/// Shows the cart and offers to check it out.
pub fn view_cart<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut AppState,
) -> ConsoleResult<()> {
    let AppState {
        cart,
        ledger,
        processor,
        audit,
        ..
    } = state;
    let mut checkout = Checkout::new(cart, ledger);

    console.say("")?;
    let stage = checkout.review()?;
    debug!(?stage, entries = checkout.entries().len(), "Cart reviewed");
    if stage == CheckoutStage::Empty {
        return console.say("Shopping cart is empty!");
    }

    console.say(display::entry_table(checkout.entries()))?;
    console.say(format!("Total: {}", checkout.total()))?;
    console.say("")?;

    let proceed = console.confirm("Do you want to checkout all products? (Y/N): ")?;
    let stage = checkout.confirm(proceed)?;
    debug!(?stage, "Checkout confirmation");
    if stage == CheckoutStage::Cancelled {
        info!("Checkout declined, cart kept");
        return Ok(());
    }

    console.say("")?;
    console.say("Select Payment Method:")?;
    for method in PaymentMethod::ALL {
        console.say(format!("{}. {}", method.choice(), method.label()))?;
    }
    let Some(choice) = console.prompt("Choice: ")? else {
        return Ok(());
    };

    match checkout.pay(&choice, processor, audit) {
        Ok(completed) => {
            info!(
                order_id = completed.order.id,
                total = %completed.payment.amount,
                method = completed.payment.method.label(),
                "Checkout completed"
            );
            console.say(completed.payment)?;
            console.say("")?;
            console.say("You have successfully checked out the products!")
        }
        Err(CoreError::InvalidPaymentChoice(input)) => {
            warn!(choice = %input, "Invalid payment choice, checkout cancelled");
            console.say("Invalid payment method. Transaction cancelled.")
        }
        Err(err) => report(console, err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConsoleConfig;
    use std::io::Cursor;

    fn state_in(dir: &tempfile::TempDir) -> AppState {
        let config = ConsoleConfig {
            audit_log_path: dir.path().join("log.txt"),
            ..ConsoleConfig::default()
        };
        AppState::new(config)
    }

    fn run(state: &mut AppState, input: &str) -> String {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        view_cart(&mut console, state).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    fn add(state: &mut AppState, id: &str, quantity: i64) {
        let product = state.catalog.lookup(id).unwrap();
        state.cart.add(product, quantity).unwrap();
    }

    #[test]
    fn test_empty_cart_skips_checkout() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);

        let out = run(&mut state, "y\n1\n");

        assert!(out.contains("Shopping cart is empty!"));
        assert!(!out.contains("checkout all products"));
        assert!(state.ledger.is_empty());
    }

    #[test]
    fn test_checkout_with_gcash() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        add(&mut state, "P001", 2);
        add(&mut state, "P003", 1);

        let out = run(&mut state, "Y\n3\n");

        assert!(out.contains("Total: 25.00"));
        assert!(out.contains("3. GCash"));
        assert!(out.contains("Paid 25.00 using GCash."));
        assert!(out.contains("You have successfully checked out the products!"));
        assert!(state.cart.is_empty());

        let order = state.ledger.latest().unwrap();
        assert_eq!(order.id, 1);
        assert_eq!(order.items.len(), 2);

        let log = std::fs::read_to_string(dir.path().join("log.txt")).unwrap();
        assert!(log.contains("Order ID: 1"));
        assert!(log.contains("GCash"));
    }

    #[test]
    fn test_declined_checkout_keeps_cart() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        add(&mut state, "P004", 1);

        let out = run(&mut state, "n\n");

        assert!(!out.contains("Select Payment Method:"));
        assert_eq!(state.cart.len(), 1);
        assert!(state.ledger.is_empty());
    }

    #[test]
    fn test_invalid_payment_choice_cancels() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        add(&mut state, "P002", 2);

        let out = run(&mut state, "y\n4\n");

        assert!(out.contains("Invalid payment method. Transaction cancelled."));
        assert_eq!(state.cart.len(), 1);
        assert!(state.ledger.is_empty());
        assert!(!dir.path().join("log.txt").exists());
    }

    #[test]
    fn test_unwritable_log_still_completes_checkout() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConsoleConfig {
            audit_log_path: dir.path().join("missing").join("log.txt"),
            ..ConsoleConfig::default()
        };
        let mut state = AppState::new(config);
        add(&mut state, "P005", 1);

        let out = run(&mut state, "y\n1\n");

        assert!(out.contains("Paid 8.00 using Cash."));
        assert_eq!(state.ledger.len(), 1);
        assert!(state.cart.is_empty());
    }
}
