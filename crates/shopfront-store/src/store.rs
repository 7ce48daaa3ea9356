//! # Store Handle
//!
//! The observable state container. All mutation goes through [`Store`];
//! pages hold a (cheaply cloned) handle and never touch state directly.
//!
//! ## Thread Safety
//! The state is wrapped in `Arc<Mutex<T>>`:
//! 1. Multiple consumers may hold handles to the same store
//! 2. Only one operation mutates state at a time
//! 3. The session operations are async and may interleave
//!
//! ## Why Not RwLock?
//! Operations are quick and most of them mutate. A RwLock would add
//! complexity with minimal benefit.
//!
//! ## Commit Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  commit(f):  lock ──► f(&mut state) ──► notify listeners ──► unlock    │
//! │                                                                         │
//! │  Listeners observe the state only AFTER the closure has fully applied, │
//! │  so a multi-field transition (append order + clear cart) is atomic     │
//! │  from every observer's point of view.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tracing::debug;

use shopfront_core::{catalog, Cart, Order, Product, User};

use crate::config::StoreConfig;
use crate::state::{CartSummary, StoreState};

/// A state-change listener.
///
/// Called with the post-transition state after every committed operation.
/// The snapshot writer is the canonical listener; see [`crate::persist`].
pub type Listener = Box<dyn Fn(&StoreState) + Send + 'static>;

// =============================================================================
// Store
// =============================================================================

/// The storefront state container.
///
/// An explicit, constructed object: create one with [`Store::new`] (or
/// [`Store::with_config`]) and hand clones to consumers. There is no
/// process-wide singleton.
#[derive(Clone)]
pub struct Store {
    state: Arc<Mutex<StoreState>>,
    listeners: Arc<Mutex<Vec<Listener>>>,
    config: Arc<StoreConfig>,
}

impl Store {
    /// Creates an empty store with default configuration.
    pub fn new() -> Self {
        Store::with_config(StoreConfig::default())
    }

    /// Creates an empty store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Store {
            state: Arc::new(Mutex::new(StoreState::default())),
            listeners: Arc::new(Mutex::new(Vec::new())),
            config: Arc::new(config),
        }
    }

    /// Returns the store configuration.
    #[inline]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Registers a state-change listener.
    ///
    /// The listener runs under the state lock after every committed
    /// operation. It must not call store operations itself (that would
    /// deadlock) and should not block; the snapshot writer logs-and-drops
    /// its own failures for exactly this reason.
    pub fn subscribe(&self, listener: impl Fn(&StoreState) + Send + 'static) {
        self.listeners
            .lock()
            .expect("listener mutex poisoned")
            .push(Box::new(listener));
    }

    /// Executes a function with read access to the state.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let badge = store.with_state(|s| s.cart.total_quantity());
    /// ```
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&StoreState) -> R,
    {
        let state = self.state.lock().expect("state mutex poisoned");
        f(&state)
    }

    /// Applies a mutation as a single state transition and notifies
    /// listeners with the resulting state.
    pub(crate) fn commit<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut StoreState) -> R,
    {
        let mut state = self.state.lock().expect("state mutex poisoned");
        let result = f(&mut state);

        let listeners = self.listeners.lock().expect("listener mutex poisoned");
        for listener in listeners.iter() {
            listener(&state);
        }

        result
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Populates the catalog from the fixed seed and derives the category
    /// list.
    ///
    /// Idempotent: safe to call any number of times, always recomputes
    /// from the same seed. There is no fetch and no failure mode.
    pub fn initialize_data(&self) {
        debug!("initialize_data");

        self.commit(|s| {
            s.products = catalog::seed_products();
            s.categories = catalog::distinct_categories(&s.products);
        });
    }

    /// Looks up a catalog product by id. `None` when absent; the
    /// presentation layer renders its own not-found state.
    pub fn product(&self, id: &str) -> Option<Product> {
        self.with_state(|s| s.product(id).cloned())
    }

    /// Returns the full catalog.
    pub fn products(&self) -> Vec<Product> {
        self.with_state(|s| s.products.clone())
    }

    /// Returns the derived category labels.
    pub fn categories(&self) -> Vec<String> {
        self.with_state(|s| s.categories.clone())
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Adds a product to the cart (increment-or-insert).
    ///
    /// Stock is not checked at this layer; the add control is expected to
    /// be disabled by the page when stock is exhausted.
    pub fn add_to_cart(&self, product: &Product) {
        debug!(product_id = %product.id, "add_to_cart");
        self.commit(|s| s.cart.add_product(product));
    }

    /// Removes a cart entry by product id. No-op when absent.
    pub fn remove_from_cart(&self, product_id: &str) {
        debug!(product_id = %product_id, "remove_from_cart");
        self.commit(|s| s.cart.remove(product_id));
    }

    /// Sets a cart entry's quantity exactly; `quantity <= 0` removes the
    /// entry instead.
    pub fn update_quantity(&self, product_id: &str, quantity: i64) {
        debug!(product_id = %product_id, quantity = %quantity, "update_quantity");
        self.commit(|s| s.cart.update_quantity(product_id, quantity));
    }

    /// Empties the cart unconditionally.
    pub fn clear_cart(&self) {
        debug!("clear_cart");
        self.commit(|s| s.cart.clear());
    }

    /// Returns a copy of the current cart.
    pub fn cart(&self) -> Cart {
        self.with_state(|s| s.cart.clone())
    }

    /// Returns the cart totals summary.
    pub fn cart_summary(&self) -> CartSummary {
        self.with_state(|s| CartSummary::from(&s.cart))
    }

    // =========================================================================
    // Session & Orders (reads; mutations live in session.rs / checkout.rs)
    // =========================================================================

    /// Returns the signed-in user, if any.
    pub fn user(&self) -> Option<User> {
        self.with_state(|s| s.user.clone())
    }

    /// Checks whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.with_state(|s| s.is_authenticated)
    }

    /// Returns the session-visible order history.
    pub fn orders(&self) -> Vec<Order> {
        self.with_state(|s| s.orders.clone())
    }

    /// Looks up an order by id.
    pub fn order(&self, id: &str) -> Option<Order> {
        self.with_state(|s| s.order(id).cloned())
    }

    // =========================================================================
    // Filter State
    // =========================================================================

    /// Stores the latest search query. Filtering happens in the
    /// presentation layer.
    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        debug!(query = %query, "set_search_query");
        self.commit(|s| s.search_query = query);
    }

    /// Stores the selected category filter (empty string = all).
    pub fn set_selected_category(&self, category: impl Into<String>) {
        let category = category.into();
        debug!(category = %category, "set_selected_category");
        self.commit(|s| s.selected_category = category);
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_data_is_idempotent() {
        let store = Store::new();
        store.initialize_data();
        let first = store.products();

        store.initialize_data();
        assert_eq!(store.products(), first);
        assert_eq!(store.categories().len(), 4);
    }

    #[test]
    fn test_product_lookup_absent_is_none() {
        let store = Store::new();
        store.initialize_data();
        assert!(store.product("999").is_none());
    }

    #[test]
    fn test_cart_operations_roundtrip() {
        let store = Store::new();
        store.initialize_data();
        let product = store.product("1").unwrap();

        store.add_to_cart(&product);
        store.add_to_cart(&product);
        assert_eq!(store.cart_summary().total_quantity, 2);

        store.update_quantity("1", 5);
        assert_eq!(store.cart().items[0].quantity, 5);

        store.remove_from_cart("1");
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_filter_state_stores_latest_value() {
        let store = Store::new();
        store.set_search_query("headphones");
        store.set_selected_category("Electronics");
        store.set_search_query("watch");

        store.with_state(|s| {
            assert_eq!(s.search_query, "watch");
            assert_eq!(s.selected_category, "Electronics");
        });
    }

    #[test]
    fn test_listeners_observe_every_commit() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let store = Store::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let observed = Arc::clone(&calls);
        store.subscribe(move |_| {
            observed.fetch_add(1, Ordering::SeqCst);
        });

        store.initialize_data();
        store.set_search_query("yoga");
        store.clear_cart();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_clones_share_state() {
        let store = Store::new();
        store.initialize_data();
        let handle = store.clone();

        let product = store.product("2").unwrap();
        handle.add_to_cart(&product);

        assert_eq!(store.cart_summary().item_count, 1);
    }
}
