//! # Shopfront Console Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load configuration (defaults, shopfront.toml, environment)
//! 3. Create the session state (catalog, cart, ledger, audit log)
//! 4. Run the menu loop until "Exit" or end of input

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match shopfront_console::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("shopfront: {e}");
            ExitCode::FAILURE
        }
    }
}
