//! # shopfront-core: Pure Business Logic for Shopfront
//!
//! This crate is the **heart** of Shopfront. It contains the catalog, cart,
//! payment, order ledger and checkout logic as plain data and functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/console)                       │   │
//! │  │    Menu ──► Products ──► Cart ──► Payment ──► Orders            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopfront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ │   │
//! │  │   │ catalog │ │  cart   │ │ payment │ │ ledger  │ │ checkout │ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └────┬─────┘ │   │
//! │  │                                                        │       │   │
//! │  │   NO I/O • NO STDIN • NO FILES                         │       │   │
//! │  └────────────────────────────────────────────────────────┼───────┘   │
//! │                                          OrderJournal     │           │
//! │  ┌────────────────────────────────────────────────────────▼───────┐   │
//! │  │                 shopfront-audit (log.txt)                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Domain types (Product, CartEntry, Order, PaymentMethod)
//! - [`catalog`] - The fixed product catalog
//! - [`cart`] - The shopping cart
//! - [`payment`] - Payment dispatch
//! - [`ledger`] - Append-only order history
//! - [`checkout`] - The checkout state machine
//! - [`validation`] - Input rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::{Cart, Catalog};
//!
//! let catalog = Catalog::standard();
//! let mut cart = Cart::new();
//!
//! let notebook = catalog.lookup("p002").unwrap();
//! cart.add(notebook, 2).unwrap();
//!
//! assert_eq!(cart.total().to_string(), "100.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ledger;
pub mod money;
pub mod payment;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use catalog::Catalog;
pub use checkout::{Checkout, CheckoutStage, CompletedCheckout, OrderJournal};
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::OrderLedger;
pub use money::Money;
pub use payment::PaymentProcessor;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum products the catalog can hold.
pub const MAX_CATALOG_PRODUCTS: usize = 10;

/// Maximum entries allowed in a single cart.
///
/// Every add appends a new entry, so this also caps the number of adds
/// between checkouts.
pub const MAX_CART_ITEMS: usize = 20;

/// Maximum orders retained by the ledger for the lifetime of the process.
pub const MAX_ORDERS: usize = 50;
