//! Order history.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::display;
use crate::error::ConsoleResult;
use crate::state::AppState;

/// Prints every recorded order, oldest first.
pub fn view_orders<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &AppState,
) -> ConsoleResult<()> {
    console.say("")?;
    if state.ledger.is_empty() {
        return console.say("No orders available!");
    }

    for order in state.ledger.list() {
        console.say(display::order_summary(order))?;
        console.say("")?;
    }
    Ok(())
}
