//! # Session Operations
//!
//! Login, registration, logout and profile updates.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Session Lifecycle                                   │
//! │                                                                         │
//! │  ┌──────────┐   login/register    ┌──────────────┐                     │
//! │  │ Signed   │────────────────────►│  Signed in   │                     │
//! │  │ out      │   (simulated        │  user: Some  │──┐ update_profile   │
//! │  └──────────┘    latency, then    └──────────────┘◄─┘ (field merge)    │
//! │       ▲          fabricated user)        │                              │
//! │       │                                  │ logout                       │
//! │       └──────────────────────────────────┘ (also clears orders)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Real Authentication
//! `login` verifies nothing: it suspends for the configured latency to
//! model a network round-trip, then signs in a fixed demo account for any
//! non-empty credential pair. Two concurrent calls race independently and
//! the last one to resolve wins (no de-duplication, no cancellation) —
//! each resolution unconditionally overwrites the session state.

use chrono::Utc;
use tracing::{debug, info};

use shopfront_core::validation::{validate_credentials, validate_registration};
use shopfront_core::{Address, User, UserPatch, DEMO_USER_ID, DEMO_USER_NAME};

use crate::store::Store;

impl Store {
    /// Signs in with the given credentials.
    ///
    /// ## Behavior
    /// - Suspends for the configured simulated latency
    /// - Both fields non-empty: fabricates the demo user with the given
    ///   email, sets `is_authenticated`, resolves `true`
    /// - Otherwise resolves `false` and leaves the session untouched
    pub async fn login(&self, email: &str, password: &str) -> bool {
        debug!(email = %email, "login");
        self.commit(|s| s.is_loading = true);

        // Simulated network round-trip; nothing is actually verified.
        tokio::time::sleep(self.config().login_latency()).await;

        if validate_credentials(email, password).is_err() {
            debug!("login rejected: missing credentials");
            self.commit(|s| s.is_loading = false);
            return false;
        }

        let user = demo_user(email);
        info!(user_id = %user.id, "login succeeded");

        self.commit(|s| {
            s.user = Some(user);
            s.is_authenticated = true;
            s.is_loading = false;
        });
        true
    }

    /// Registers a new account and signs it in.
    ///
    /// ## Behavior
    /// - Same simulated latency as `login`
    /// - All fields non-empty: creates a user with a freshly generated
    ///   time-based id and signs the session in, resolves `true`
    /// - Otherwise resolves `false`
    pub async fn register(&self, name: &str, email: &str, password: &str) -> bool {
        debug!(email = %email, "register");
        self.commit(|s| s.is_loading = true);

        tokio::time::sleep(self.config().login_latency()).await;

        if validate_registration(name, email, password).is_err() {
            debug!("registration rejected: missing fields");
            self.commit(|s| s.is_loading = false);
            return false;
        }

        let user = User {
            id: time_based_id(),
            name: name.to_string(),
            email: email.to_string(),
            address: None,
        };
        info!(user_id = %user.id, "registration succeeded");

        self.commit(|s| {
            s.user = Some(user);
            s.is_authenticated = true;
            s.is_loading = false;
        });
        true
    }

    /// Signs the session out.
    ///
    /// Clears the user, the authentication flag AND the order history:
    /// order visibility is session-scoped in this demo, so logging out
    /// discards the orders rather than keeping them keyed by user. The
    /// cart survives.
    pub fn logout(&self) {
        debug!("logout");
        self.commit(|s| {
            s.user = None;
            s.is_authenticated = false;
            s.orders.clear();
        });
    }

    /// Merges the given fields into the signed-in user's profile.
    /// No-op when signed out.
    pub fn update_profile(&self, patch: UserPatch) {
        debug!("update_profile");
        self.commit(|s| {
            if let Some(user) = s.user.as_mut() {
                user.apply(patch);
            }
        });
    }
}

/// Fabricates the fixed demo account for `login`.
///
/// Only the email varies; id, name and address are constants.
fn demo_user(email: &str) -> User {
    User {
        id: DEMO_USER_ID.to_string(),
        name: DEMO_USER_NAME.to_string(),
        email: email.to_string(),
        address: Some(Address {
            street: "123 Main St".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip_code: "10001".to_string(),
            country: "USA".to_string(),
        }),
    }
}

/// Generates a time-based identifier (milliseconds since the epoch),
/// matching the id scheme of registered users.
fn time_based_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;

    fn fast_store() -> Store {
        Store::with_config(StoreConfig::default().with_login_latency_ms(0))
    }

    #[tokio::test]
    async fn test_login_fabricates_demo_user() {
        let store = fast_store();

        assert!(store.login("a@b.com", "pw").await);
        assert!(store.is_authenticated());

        let user = store.user().unwrap();
        assert_eq!(user.id, DEMO_USER_ID);
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.address.unwrap().city, "New York");
        assert!(!store.with_state(|s| s.is_loading));
    }

    #[tokio::test]
    async fn test_login_rejects_empty_fields() {
        let store = fast_store();

        assert!(!store.login("", "pw").await);
        assert!(!store.login("a@b.com", "").await);
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
        assert!(!store.with_state(|s| s.is_loading));
    }

    #[tokio::test]
    async fn test_register_generates_time_based_id() {
        let store = fast_store();
        let before = Utc::now().timestamp_millis();

        assert!(store.register("Jane", "jane@example.com", "pw").await);

        let user = store.user().unwrap();
        let id: i64 = user.id.parse().expect("time-based id");
        assert!(id >= before);
        assert_eq!(user.name, "Jane");
        assert!(user.address.is_none());
        assert!(store.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_rejects_missing_name() {
        let store = fast_store();
        assert!(!store.register("", "jane@example.com", "pw").await);
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_orders() {
        let store = fast_store();
        store.initialize_data();
        assert!(store.login("a@b.com", "pw").await);

        let product = store.product("1").unwrap();
        store.add_to_cart(&product);
        assert!(store.create_order(None).is_some());

        store.logout();
        assert!(store.user().is_none());
        assert!(!store.is_authenticated());
        assert!(store.orders().is_empty());
    }

    #[tokio::test]
    async fn test_update_profile_merges_fields() {
        let store = fast_store();
        assert!(store.login("a@b.com", "pw").await);

        store.update_profile(UserPatch {
            name: Some("Jane Doe".to_string()),
            ..UserPatch::default()
        });

        let user = store.user().unwrap();
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.email, "a@b.com");
    }

    #[test]
    fn test_update_profile_signed_out_is_noop() {
        let store = fast_store();
        store.update_profile(UserPatch {
            name: Some("Nobody".to_string()),
            ..UserPatch::default()
        });
        assert!(store.user().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_logins_last_write_wins() {
        let store = fast_store();
        let a = store.clone();
        let b = store.clone();

        let first = tokio::spawn(async move { a.login("first@example.com", "pw").await });
        let second = tokio::spawn(async move { b.login("second@example.com", "pw").await });

        assert!(first.await.expect("join"));
        assert!(second.await.expect("join"));

        // Both completions overwrote the session; whichever resolved last
        // is the one left standing, and the session is signed in either way.
        let email = store.user().unwrap().email;
        assert!(email == "first@example.com" || email == "second@example.com");
        assert!(store.is_authenticated());
    }
}
