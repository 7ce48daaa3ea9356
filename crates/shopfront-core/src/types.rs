//! # Domain Types
//!
//! Core domain types used throughout Shopfront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      User       │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id (time-based)│       │
//! │  │  name           │   │  name           │   │  user_id        │       │
//! │  │  price_cents    │   │  email          │   │  items snapshot │       │
//! │  │  category       │   │  address?       │   │  total_cents    │       │
//! │  │  stock/rating   │   └─────────────────┘   │  status         │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Address      │   │   OrderStatus   │                             │
//! │  │  street, city   │   │   Pending       │                             │
//! │  │  state, zip     │   │   Processing    │                             │
//! │  │  country        │   │   Shipped       │                             │
//! │  └─────────────────┘   │   Delivered     │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! An `Order` freezes the cart items and the shipping address at creation
//! time. Later cart or profile mutations never touch an existing order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartItem;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Catalog records are immutable: they are created once by
/// `catalog::seed_products` and never mutated by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name shown on listing and detail pages.
    pub name: String,

    /// Price in cents (smallest currency unit). Never negative.
    pub price_cents: i64,

    /// Image reference (path or URL) for the presentation layer.
    pub image: String,

    /// Longer description for the product detail page.
    pub description: String,

    /// Category label used for filtering.
    pub category: String,

    /// Units in stock. The presentation layer gates add-to-cart on this;
    /// the cart itself does not.
    pub stock: u32,

    /// Average rating, 0.0 to 5.0.
    pub rating: f32,

    /// Number of reviews behind the rating.
    pub reviews: u32,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks if the product has any units left.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// Address
// =============================================================================

/// A shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

// =============================================================================
// User
// =============================================================================

/// A signed-in user.
///
/// Created by `login` (fixed demo account) or `register` (time-based id);
/// cleared by `logout`. There is no real authentication behind this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Email address as entered at login/registration.
    pub email: String,

    /// Optional shipping address.
    pub address: Option<Address>,
}

/// A partial user update for profile edits.
///
/// Every field is optional; `None` leaves the current value untouched.
/// Mirrors the "merge the given fields" contract of profile updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<Address>,
}

impl User {
    /// Merges a patch into this user, field by field.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(address) = patch.address {
            self.address = Some(address);
        }
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of an order.
///
/// Orders are append-only at this layer: they are created as `Pending`
/// and no status transition is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order created, awaiting (mock) fulfilment.
    Pending,
    /// Order is being prepared.
    Processing,
    /// Order has left the (imaginary) warehouse.
    Shipped,
    /// Order arrived.
    Delivered,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Order
// =============================================================================

/// A placed order.
///
/// Uses the snapshot pattern: `items` and `shipping_address` are value
/// copies taken at checkout. Mutating the cart afterwards does not affect
/// an existing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Time-based identifier (see `checkout`).
    pub id: String,

    /// Id of the user who placed the order.
    pub user_id: String,

    /// Cart items at creation time (frozen).
    pub items: Vec<CartItem>,

    /// Sum of price × quantity over `items`, in cents (frozen).
    pub total_cents: i64,

    /// Current status. Always `Pending` at creation.
    pub status: OrderStatus,

    /// When the order was placed.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Shipping address at creation time (frozen).
    pub shipping_address: Option<Address>,
}

impl Order {
    /// Returns the order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
