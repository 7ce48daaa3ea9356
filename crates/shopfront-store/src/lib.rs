//! # shopfront-store: Observable Client State
//!
//! The state container behind the storefront pages: catalog, cart,
//! session, order history, filter state, and the persisted snapshot.
//!
//! ## Module Organization
//! ```text
//! shopfront_store/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── state.rs        ◄─── StoreState snapshot struct + summaries
//! ├── store.rs        ◄─── Store handle: commit loop, observers, cart ops
//! ├── session.rs      ◄─── login / register / logout / update_profile
//! ├── checkout.rs     ◄─── create_order (atomic append + cart clear)
//! ├── persist.rs      ◄─── Snapshot file, persisted subset
//! ├── config.rs       ◄─── StoreConfig (defaults + env overrides)
//! └── error.rs        ◄─── StoreError (persistence faults)
//! ```
//!
//! ## State Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     One Commit, One Notification                        │
//! │                                                                         │
//! │  operation ──► lock state ──► apply closure ──► notify listeners       │
//! │                                                                         │
//! │  • Every operation is a single state transition: observers never see   │
//! │    a half-applied change (e.g. order appended but cart not cleared).   │
//! │  • The snapshot writer is just another listener; a failed write is     │
//! │    logged and swallowed, it can never corrupt in-memory state.         │
//! │  • The Store is an explicit constructed object. There is no global     │
//! │    singleton; consumers receive a handle (cheap to clone).             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use shopfront_store::Store;
//!
//! let store = Store::new();
//! store.initialize_data();
//!
//! let product = store.product("1").unwrap();
//! store.add_to_cart(&product);
//!
//! assert_eq!(store.cart().total_quantity(), 1);
//! ```

pub mod checkout;
pub mod config;
pub mod error;
pub mod persist;
pub mod session;
pub mod state;
pub mod store;

pub use config::StoreConfig;
pub use error::StoreError;
pub use persist::{PersistedState, SnapshotFile};
pub use state::{CartSummary, StoreState};
pub use store::Store;
