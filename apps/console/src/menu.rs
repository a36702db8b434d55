//! # Top-Level Menu
//!
//! Prints the menu, reads a choice, dispatches to a command, and repeats
//! until the customer picks Exit or input runs out.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use crate::commands::{self, report};
use crate::console::Console;
use crate::error::{ConsoleError, ConsoleResult};
use crate::state::AppState;

/// An entry of the top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewProducts,
    ViewCart,
    ViewOrders,
    Exit,
}

impl MenuChoice {
    /// All entries in menu order.
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::ViewProducts,
        MenuChoice::ViewCart,
        MenuChoice::ViewOrders,
        MenuChoice::Exit,
    ];

    pub const fn number(&self) -> u32 {
        match self {
            MenuChoice::ViewProducts => 1,
            MenuChoice::ViewCart => 2,
            MenuChoice::ViewOrders => 3,
            MenuChoice::Exit => 4,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            MenuChoice::ViewProducts => "View Products",
            MenuChoice::ViewCart => "View Shopping Cart",
            MenuChoice::ViewOrders => "View Orders",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u32>()
            .ok()
            .and_then(|n| Self::ALL.into_iter().find(|c| c.number() == n))
            .ok_or_else(|| ConsoleError::InvalidMenuChoice(trimmed.to_string()))
    }
}

/// Runs the menu loop.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut AppState,
) -> ConsoleResult<()> {
    console.say(format!("Welcome to {}!", state.config.store_name))?;

    loop {
        console.say("")?;
        console.say("===== MENU =====")?;
        for entry in MenuChoice::ALL {
            console.say(format!("{}. {}", entry.number(), entry.label()))?;
        }

        let Some(input) = console.prompt("Enter choice: ")? else {
            debug!("End of input at menu");
            break;
        };

        let choice = match input.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(err) => {
                debug!(error = %err, "Rejected menu input");
                console.say("Invalid choice. Please try again.")?;
                continue;
            }
        };

        debug!(?choice, "Menu choice");
        let outcome = match choice {
            MenuChoice::ViewProducts => commands::view_products(console, state),
            MenuChoice::ViewCart => commands::view_cart(console, state),
            MenuChoice::ViewOrders => commands::view_orders(console, state),
            MenuChoice::Exit => break,
        };
        if let Err(err) = outcome {
            report(console, err)?;
        }
    }

    console.say("Exiting program...")
}
