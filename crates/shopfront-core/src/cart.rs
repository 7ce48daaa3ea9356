//! # Cart
//!
//! The mutable set of product-quantity pairs a user intends to purchase.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Page Action              Store Operation          Cart Change          │
//! │  ───────────              ───────────────          ───────────          │
//! │                                                                         │
//! │  Click "Add to cart" ────► add_to_cart() ───────► qty += 1 or insert   │
//! │                                                                         │
//! │  Change quantity ────────► update_quantity() ───► qty = n (≤0 removes) │
//! │                                                                         │
//! │  Click remove ───────────► remove_from_cart() ──► items.retain(...)    │
//! │                                                                         │
//! │  Checkout / clear ───────► clear_cart() ────────► items.clear()        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lenient-Core Contract
//! Cart mutators do NOT check or clamp against `Product.stock`. The
//! presentation layer is expected to gate the controls (e.g. disable the
//! add button when stock is exhausted). Keeping the core lenient makes the
//! operations total: every call degrades to an increment, a replacement,
//! or a no-op, never a failure.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Item
// =============================================================================

/// An item in the shopping cart: a product snapshot plus a quantity.
///
/// ## Design Notes
/// - The full product is embedded (flattened on the wire) so the cart and
///   order pages can render without a catalog lookup, and so an `Order`
///   snapshot stays self-contained.
/// - `quantity` is always ≥ 1; a mutation that would drop it to 0 or below
///   removes the item from the cart instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// The product this line refers to (flattened into the item on the
    /// wire, matching the persisted layout).
    #[serde(flatten)]
    #[ts(flatten)]
    pub product: Product,

    /// Quantity in cart. Invariant: ≥ 1.
    pub quantity: i64,
}

impl CartItem {
    /// Creates a cart item with quantity 1.
    pub fn new(product: &Product) -> Self {
        CartItem {
            product: product.clone(),
            quantity: 1,
        }
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price() * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one entry per product id (adding again increases quantity)
/// - Every entry has quantity ≥ 1
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in the cart.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by 1
    /// - Product not in cart: appended with quantity 1
    ///
    /// Stock is deliberately not checked here; see the module docs.
    pub fn add_product(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem::new(product));
        }
    }

    /// Sets the quantity of an item.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: delegates to [`Cart::remove`]
    /// - Product not in cart: no-op
    /// - Otherwise: replaces the quantity exactly (no stock clamp)
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Removes an item by product id. No-op when the id is not in the cart.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Removes all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Finds an item by product id.
    pub fn find(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Returns the number of distinct products in the cart.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all items (the header badge count).
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the cart subtotal: Σ price × quantity.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|i| i.line_total()).sum()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price_cents,
            image: format!("/images/product-{}.jpg", id),
            description: String::new(),
            category: "Electronics".to_string(),
            stock: 10,
            rating: 4.5,
            reviews: 12,
        }
    }

    #[test]
    fn test_add_product_inserts_with_quantity_one() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("1", 9999));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn test_repeated_adds_keep_single_entry() {
        let mut cart = Cart::new();
        let product = test_product("1", 9999);

        for _ in 0..4 {
            cart.add_product(&product);
        }

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity, 4);
    }

    #[test]
    fn test_update_quantity_replaces_exactly() {
        let mut cart = Cart::new();
        let product = test_product("1", 9999);

        cart.add_product(&product);
        cart.add_product(&product);
        cart.update_quantity("1", 5);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity, 5);
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("1", 9999));
        cart.update_quantity("1", 0);
        assert!(cart.is_empty());

        cart.add_product(&test_product("1", 9999));
        cart.update_quantity("1", -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("1", 9999));
        cart.update_quantity("nope", 3);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_product(&test_product("1", 9999));
        cart.remove("nope");

        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_subtotal_sums_lines() {
        let mut cart = Cart::new();
        let a = test_product("1", 9999); // $99.99
        let b = test_product("2", 2999); // $29.99

        cart.add_product(&a);
        cart.add_product(&a);
        cart.add_product(&b);

        // 2 × $99.99 + 1 × $29.99 = $229.97
        assert_eq!(cart.subtotal().cents(), 22997);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_item_wire_layout_is_flat() {
        let item = CartItem {
            product: test_product("1", 9999),
            quantity: 3,
        };
        let json = serde_json::to_value(&item).unwrap();

        // Product fields are flattened next to quantity, matching the
        // persisted layout of the storefront.
        assert_eq!(json["id"], "1");
        assert_eq!(json["priceCents"], 9999);
        assert_eq!(json["quantity"], 3);
    }
}
