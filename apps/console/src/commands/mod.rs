//! # Menu Commands
//!
//! One function per menu entry.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── 1. View Products, then add to cart
//! ├── cart.rs     ◄─── 2. View Shopping Cart, then checkout
//! └── order.rs    ◄─── 3. View Orders
//! ```
//!
//! Each command takes the console and the session state it acts on.
//! Input errors are reported on the console and the command carries on;
//! only terminal I/O failures are returned.

pub mod cart;
pub mod order;
pub mod product;

pub use cart::view_cart;
pub use order::view_orders;
pub use product::view_products;

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::{ConsoleError, ConsoleResult};

/// Prints an input error as `Error: ...`, or returns any other error.
pub(crate) fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: ConsoleError,
) -> ConsoleResult<()> {
    if err.is_input_error() {
        console.say(format!("Error: {err}"))
    } else {
        Err(err)
    }
}
