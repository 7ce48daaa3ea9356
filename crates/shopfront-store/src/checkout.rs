//! # Checkout
//!
//! Turns the current cart into an order.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      create_order                                       │
//! │                                                                         │
//! │  signed out or empty cart ────────────────────────────► None           │
//! │                                                                         │
//! │  otherwise, in ONE state transition:                                    │
//! │    1. total   = Σ price × quantity over the cart                        │
//! │    2. order   = snapshot(items) + time-based id + Pending + timestamp   │
//! │    3. orders.push(order)                                                │
//! │    4. cart.clear()                                                      │
//! │                                                                         │
//! │  No observer ever sees the order appended with the cart still          │
//! │  populated, or the cart cleared without the order.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::{debug, info};

use shopfront_core::{Address, Order, OrderStatus};

use crate::store::Store;

impl Store {
    /// Creates an order from the current cart.
    ///
    /// ## Behavior
    /// - No signed-in user or empty cart: returns `None` and changes
    ///   nothing (silent failure, by design — see the error docs)
    /// - Otherwise: appends a `Pending` order snapshotting the cart and
    ///   the given shipping address, clears the cart atomically with the
    ///   append, and returns the new order id
    pub fn create_order(&self, shipping_address: Option<Address>) -> Option<String> {
        debug!("create_order");

        self.commit(|s| {
            let user = s.user.as_ref()?;
            if s.cart.is_empty() {
                return None;
            }

            let total = s.cart.subtotal();
            let order = Order {
                id: generate_order_id(),
                user_id: user.id.clone(),
                items: s.cart.items.clone(),
                total_cents: total.cents(),
                status: OrderStatus::Pending,
                created_at: Utc::now(),
                shipping_address,
            };
            let order_id = order.id.clone();

            info!(order_id = %order_id, total = %total, items = order.items.len(), "order created");

            s.orders.push(order);
            s.cart.clear();
            Some(order_id)
        })
    }
}

/// Generates a time-based order identifier, e.g. `250823-143059-0471`.
///
/// The sub-second suffix keeps two orders placed within the same second
/// from colliding.
fn generate_order_id() -> String {
    let now = Utc::now();
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    format!("{}-{:04}", now.format("%y%m%d-%H%M%S"), nanos % 10000)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;

    async fn signed_in_store() -> Store {
        let store = Store::with_config(StoreConfig::default().with_login_latency_ms(0));
        store.initialize_data();
        assert!(store.login("a@b.com", "pw").await);
        store
    }

    #[tokio::test]
    async fn test_create_order_snapshots_cart_and_clears_it() {
        let store = signed_in_store().await;
        let headphones = store.product("1").unwrap(); // $99.99
        let tshirt = store.product("3").unwrap(); // $29.99

        store.add_to_cart(&headphones);
        store.add_to_cart(&headphones);
        store.add_to_cart(&tshirt);

        let address = store.user().unwrap().address;
        let order_id = store.create_order(address.clone()).expect("order id");

        let order = store.order(&order_id).expect("order lookup");
        assert_eq!(order.total_cents, 2 * 9999 + 2999);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.user_id, "1");
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.shipping_address, address);
        assert!(store.cart().is_empty());
    }

    #[tokio::test]
    async fn test_create_order_empty_cart_fails_silently() {
        let store = signed_in_store().await;
        assert!(store.create_order(None).is_none());
        assert!(store.orders().is_empty());
    }

    #[tokio::test]
    async fn test_create_order_signed_out_fails_silently() {
        let store = Store::new();
        store.initialize_data();
        let product = store.product("1").unwrap();
        store.add_to_cart(&product);

        assert!(store.create_order(None).is_none());
        assert!(store.orders().is_empty());
        // The cart is untouched by the failed attempt.
        assert_eq!(store.cart_summary().total_quantity, 1);
    }

    #[tokio::test]
    async fn test_order_snapshot_is_independent_of_later_cart_mutations() {
        let store = signed_in_store().await;
        let product = store.product("2").unwrap();
        store.add_to_cart(&product);

        let order_id = store.create_order(None).expect("order id");

        // Mutate the cart after checkout; the order must not move.
        store.add_to_cart(&product);
        store.update_quantity("2", 7);

        let order = store.order(&order_id).unwrap();
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_append_and_clear_are_one_transition() {
        use std::sync::{Arc, Mutex};

        let store = signed_in_store().await;
        let product = store.product("1").unwrap();
        store.add_to_cart(&product);

        // Record (orders seen, cart emptiness) at every notification.
        let seen: Arc<Mutex<Vec<(usize, bool)>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |s| {
            sink.lock()
                .expect("test sink")
                .push((s.orders.len(), s.cart.is_empty()));
        });

        store.create_order(None).expect("order id");

        let seen = seen.lock().expect("test sink");
        // Exactly one notification for checkout, and it already shows both
        // effects: the order appended AND the cart cleared.
        assert_eq!(seen.as_slice(), &[(1, true)]);
    }

    #[test]
    fn test_order_id_shape() {
        let id = generate_order_id();
        // yymmdd-hhmmss-nnnn
        assert_eq!(id.len(), 18);
        assert_eq!(id.matches('-').count(), 2);
    }
}
