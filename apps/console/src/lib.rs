//! # Shopfront Console Library
//!
//! Core library for the Shopfront console application.
//!
//! ## Module Organization
//! ```text
//! shopfront_console/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── menu.rs         ◄─── Top-level menu loop
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── View products, add to cart
//! │   ├── cart.rs     ◄─── View cart, checkout
//! │   └── order.rs    ◄─── View orders
//! ├── console.rs      ◄─── Prompt/print over any BufRead + Write
//! ├── display.rs      ◄─── Product, cart and order tables
//! ├── state.rs        ◄─── Session state
//! ├── config.rs       ◄─── Configuration loading
//! └── error.rs        ◄─── Console error type
//! ```
//!
//! ## Menu
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ===== MENU =====                                                       │
//! │  1. View Products        ──► commands::product::view_products           │
//! │  2. View Shopping Cart   ──► commands::cart::view_cart                  │
//! │  3. View Orders          ──► commands::order::view_orders               │
//! │  4. Exit                                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod console;
pub mod display;
pub mod error;
pub mod menu;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::ConsoleConfig;
pub use console::Console;
pub use error::{ConsoleError, ConsoleResult};
pub use state::AppState;

/// Runs the console application on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging                                                  │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration                                                  │
/// │     • defaults → shopfront.toml → SHOPFRONT_* environment               │
/// │                                                                         │
/// │  3. Initialize State                                                    │
/// │     • Standard catalog, empty cart, empty ledger, audit log path        │
/// │                                                                         │
/// │  4. Run Menu Loop                                                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ConsoleResult<()> {
    init_tracing();

    info!("Starting Shopfront console");

    let config = ConsoleConfig::load(None)?;
    info!(store = %config.store_name, audit_log = ?config.audit_log_path, "Configuration loaded");

    let mut state = AppState::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    menu::run(&mut console, &mut state)?;

    info!(orders = state.ledger.len(), "Shopfront console stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopfront_core=trace` - Trace a single crate
/// - Default: WARN, so diagnostics stay out of the way of the prompts
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
