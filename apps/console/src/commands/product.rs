//! # Product Commands
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  product table                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Enter the Product ID ──► lookup ──► Enter quantity ──► Cart::add       │
//! │       ▲                     │ err           │ err            │          │
//! │       │                     └──── "Error: ..." ◄─────────────┤          │
//! │       │                                                      ▼          │
//! │       └──────── Y ◄── Add another product? (Y/N) ◄── "Product added"    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::commands::report;
use crate::console::Console;
use crate::display;
use crate::error::{ConsoleError, ConsoleResult};
use crate::state::AppState;

/// Shows the catalog and lets the customer add products until they stop.
pub fn view_products<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut AppState,
) -> ConsoleResult<()> {
    console.say("")?;
    console.say(display::product_table(state.catalog.list()))?;

    loop {
        match add_to_cart(console, state) {
            Ok(true) => console.say("Product added successfully!")?,
            // end of input
            Ok(false) => return Ok(()),
            Err(err) => report(console, err)?,
        }

        if !console.confirm("Add another product? (Y/N): ")? {
            return Ok(());
        }
    }
}

/// Prompts for one product and quantity. Returns `false` at end of input.
fn add_to_cart<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut AppState,
) -> ConsoleResult<bool> {
    console.say("")?;
    let Some(id) = console.prompt("Enter the Product ID to add to cart: ")? else {
        return Ok(false);
    };
    let product = state.catalog.lookup(&id)?;

    let Some(input) = console.prompt("Enter quantity: ")? else {
        return Ok(false);
    };
    let quantity = parse_quantity(&input)?;

    debug!(product_id = %product.id, quantity, "Adding to cart");
    state.cart.add(product, quantity)?;
    info!(
        product_id = %product.id,
        quantity,
        cart_entries = state.cart.len(),
        "Product added to cart"
    );

    Ok(true)
}

fn parse_quantity(input: &str) -> ConsoleResult<i64> {
    let trimmed = input.trim();
    trimmed.parse().map_err(|_| ConsoleError::InvalidNumber {
        field: "quantity",
        input: trimmed.to_string(),
    })
}
