//! # Snapshot Persistence
//!
//! Mirrors the persisted subset of the state to a single JSON document.
//!
//! ## Persisted Subset
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 StoreState ──► PersistedState                           │
//! │                                                                         │
//! │  persisted:   cart, user, isAuthenticated, orders                      │
//! │  rebuilt:     products, categories        (catalog seed on every init) │
//! │  ephemeral:   isLoading, searchQuery, selectedCategory                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract
//! - One named document, written wholesale after every committed mutation
//!   (the writer is a store listener; see [`Store::attach_snapshot`])
//! - Writes are fire-and-forget: failures are logged at warn level and
//!   never surfaced to the mutator's caller
//! - Rehydration happens once at startup; an unreadable or
//!   schema-mismatched document resets to defaults silently (no
//!   migration, no versioning)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use shopfront_core::{Cart, CartItem, Order, User};

use crate::error::StoreResult;
use crate::state::StoreState;
use crate::store::Store;

// =============================================================================
// Persisted State
// =============================================================================

/// The subset of [`StoreState`] that survives a process restart.
///
/// Unknown fields in an existing document are ignored and missing fields
/// default, so older snapshots degrade instead of erroring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedState {
    /// Cart entries (flattened product + quantity each).
    pub cart: Vec<CartItem>,

    /// Signed-in user, if any.
    pub user: Option<User>,

    /// Authentication flag, stored alongside `user` as in the original
    /// state shape.
    pub is_authenticated: bool,

    /// Session-visible order history.
    pub orders: Vec<Order>,
}

impl PersistedState {
    /// Captures the persisted subset from the full state.
    pub fn capture(state: &StoreState) -> Self {
        PersistedState {
            cart: state.cart.items.clone(),
            user: state.user.clone(),
            is_authenticated: state.is_authenticated,
            orders: state.orders.clone(),
        }
    }

    /// Restores the persisted subset into the full state, leaving the
    /// catalog and the ephemeral UI-selection fields untouched.
    pub fn restore_into(self, state: &mut StoreState) {
        state.cart = Cart { items: self.cart };
        state.user = self.user;
        state.is_authenticated = self.is_authenticated;
        state.orders = self.orders;
    }
}

// =============================================================================
// Snapshot File
// =============================================================================

/// The durable slot holding the persisted snapshot: one JSON document at
/// a fixed path.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Creates a snapshot handle for the given path. Nothing is touched
    /// on disk until [`SnapshotFile::save`] runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotFile { path: path.into() }
    }

    /// Returns the snapshot path.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the snapshot document.
    ///
    /// ## Behavior
    /// - File missing: `Ok(None)` (first run)
    /// - Document unreadable as the current schema: `Ok(None)` with a
    ///   warn log — stale state is silently dropped, not migrated
    /// - I/O failure other than not-found: `Err`
    pub fn load(&self) -> StoreResult<Option<PersistedState>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(persisted) => Ok(Some(persisted)),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "snapshot unreadable, resetting state");
                Ok(None)
            }
        }
    }

    /// Writes the snapshot document, creating parent directories as
    /// needed.
    pub fn save(&self, persisted: &PersistedState) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(persisted)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

// =============================================================================
// Store Wiring
// =============================================================================

impl Store {
    /// Rehydrates the store from the snapshot and subscribes the snapshot
    /// writer, so every subsequent mutation mirrors the persisted subset
    /// back to disk.
    ///
    /// Rehydration problems (missing file, stale schema, I/O faults) log
    /// and fall back to defaults; write failures log at warn level and
    /// are otherwise dropped. Neither can corrupt in-memory state.
    pub fn attach_snapshot(&self, snapshot: SnapshotFile) {
        match snapshot.load() {
            Ok(Some(persisted)) => {
                debug!(path = %snapshot.path().display(), "snapshot rehydrated");
                self.commit(|s| persisted.restore_into(s));
            }
            Ok(None) => {
                debug!(path = %snapshot.path().display(), "no snapshot, starting fresh");
            }
            Err(err) => {
                warn!(%err, "snapshot load failed, starting fresh");
            }
        }

        self.subscribe(move |state| {
            if let Err(err) = snapshot.save(&PersistedState::capture(state)) {
                warn!(%err, "snapshot write failed");
            }
        });
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::catalog;

    #[test]
    fn test_capture_takes_only_the_persisted_subset() {
        let mut state = StoreState::default();
        state.products = catalog::seed_products();
        state.search_query = "headphones".to_string();
        state.is_loading = true;
        let product = state.products[0].clone();
        state.cart.add_product(&product);

        let persisted = PersistedState::capture(&state);
        assert_eq!(persisted.cart.len(), 1);
        assert!(persisted.user.is_none());

        let json = serde_json::to_value(&persisted).unwrap();
        assert!(json.get("products").is_none());
        assert!(json.get("searchQuery").is_none());
        assert!(json.get("isLoading").is_none());
    }

    #[test]
    fn test_restore_leaves_catalog_and_ui_state_alone() {
        let mut state = StoreState::default();
        state.products = catalog::seed_products();
        state.selected_category = "Sports".to_string();

        let mut persisted = PersistedState::default();
        persisted.is_authenticated = false;
        persisted.cart = vec![CartItem {
            product: state.products[0].clone(),
            quantity: 3,
        }];
        persisted.restore_into(&mut state);

        assert_eq!(state.cart.items[0].quantity, 3);
        assert_eq!(state.products.len(), 6);
        assert_eq!(state.selected_category, "Sports");
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let snapshot = SnapshotFile::new(dir.path().join("missing.json"));
        assert!(snapshot.load().expect("load").is_none());
    }

    #[test]
    fn test_load_corrupt_document_resets() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");
        fs::write(&path, "{not json").expect("write");

        let snapshot = SnapshotFile::new(path);
        assert!(snapshot.load().expect("load").is_none());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let snapshot = SnapshotFile::new(dir.path().join("nested/state.json"));

        let products = catalog::seed_products();
        let mut persisted = PersistedState::default();
        persisted.cart = vec![CartItem {
            product: products[0].clone(),
            quantity: 3,
        }];

        snapshot.save(&persisted).expect("save");
        let loaded = snapshot.load().expect("load").expect("document");
        assert_eq!(loaded, persisted);
    }
}
