//! # Store State
//!
//! The full in-memory state snapshot behind the storefront pages.
//!
//! ## State Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          StoreState                                     │
//! │                                                                         │
//! │  Catalog (rebuilt every init)   Session + history (persisted subset)   │
//! │  ┌───────────────────────┐      ┌───────────────────────────────────┐  │
//! │  │ products              │      │ cart                              │  │
//! │  │ categories            │      │ user / is_authenticated           │  │
//! │  └───────────────────────┘      │ orders                            │  │
//! │                                 └───────────────────────────────────┘  │
//! │  UI-selection state (ephemeral)                                        │
//! │  ┌───────────────────────────────────────────────────────────────┐     │
//! │  │ is_loading / search_query / selected_category                 │     │
//! │  └───────────────────────────────────────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only `cart`, `user`, `is_authenticated` and `orders` survive a process
//! restart; see [`crate::persist`].

use serde::{Deserialize, Serialize};
use shopfront_core::{Cart, Money, Order, Product, User};

// =============================================================================
// Store State
// =============================================================================

/// The complete client state.
///
/// ## Invariants
/// - `is_authenticated` is true iff `user` is `Some` (maintained by every
///   session operation; rehydration trusts the persisted pair)
/// - `products`/`categories` come only from the catalog seed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    /// Product catalog. Populated by `initialize_data`, never mutated.
    pub products: Vec<Product>,

    /// Distinct category labels derived from the catalog.
    pub categories: Vec<String>,

    /// The shopping cart.
    pub cart: Cart,

    /// Signed-in user, if any.
    pub user: Option<User>,

    /// Whether a user is signed in. Redundant with `user.is_some()` but
    /// part of the state shape and of the persisted layout.
    pub is_authenticated: bool,

    /// Order history visible in this session.
    pub orders: Vec<Order>,

    /// True while a login/register call is awaiting its simulated latency.
    pub is_loading: bool,

    /// Latest search query entered on the listing page. Filtering itself
    /// happens in the presentation layer; this is selection state only.
    pub search_query: String,

    /// Currently selected category filter. Empty string means "all".
    pub selected_category: String,
}

impl StoreState {
    /// Looks up a catalog product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up an order by id.
    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Cart totals summary for the header badge and the cart page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
}

impl CartSummary {
    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        CartSummary {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal().cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
