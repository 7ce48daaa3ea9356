//! # shopfront-core: Pure Domain Logic for Shopfront
//!
//! This crate is the **heart** of the Shopfront client. It contains all
//! domain logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shopfront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront Pages (external)                     │   │
//! │  │    Catalog ──► Product ──► Cart ──► Checkout ──► Orders        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ reads state / invokes operations       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shopfront-store                              │   │
//! │  │    Store handle, session, checkout, snapshot persistence       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ shopfront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │   seed    │  │   │
//! │  │   │   Order   │  │  (cents)  │  │ CartItem  │  │ products  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, User, Order, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart and cart-item arithmetic
//! - [`catalog`] - Fixed demo catalog seed
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic where possible
//! 2. **No I/O**: File system and network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64)
//! 4. **Lenient Core**: Cart mutators degrade to no-ops instead of failing;
//!    strict checks (e.g. stock gating) belong to the presentation layer
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::cart::Cart;
//! use shopfront_core::catalog;
//!
//! let products = catalog::seed_products();
//! let mut cart = Cart::new();
//!
//! cart.add_product(&products[0]);
//! cart.add_product(&products[0]);
//!
//! assert_eq!(cart.items[0].quantity, 2);
//! assert_eq!(cart.subtotal().cents(), products[0].price_cents * 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopfront_core::Money` instead of
// `use shopfront_core::money::Money`.

pub use cart::{Cart, CartItem};
pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Identifier of the fabricated demo user created by `login`.
///
/// Login performs no real credential verification; any non-empty
/// email/password pair signs in this fixed demo account.
pub const DEMO_USER_ID: &str = "1";

/// Display name of the fabricated demo user.
pub const DEMO_USER_NAME: &str = "John Doe";
