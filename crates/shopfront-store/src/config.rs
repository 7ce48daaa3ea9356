//! # Store Configuration
//!
//! Configuration for the state container.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOPFRONT_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// State container configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Store name (displayed by the demo app and on order summaries).
    pub store_name: String,

    /// Simulated network latency for login/register, in milliseconds.
    ///
    /// There is no auth service behind the store; the session suspends
    /// for this long to model one. Tests set this to 0.
    pub login_latency_ms: u64,

    /// File name of the persisted snapshot document.
    pub snapshot_file: String,
}

impl Default for StoreConfig {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Shopfront Demo Store"
    /// - Simulated login latency: 1000 ms (matches the original demo)
    /// - Snapshot file: `shopfront-state.json`
    fn default() -> Self {
        StoreConfig {
            store_name: "Shopfront Demo Store".to_string(),
            login_latency_ms: 1_000,
            snapshot_file: "shopfront-state.json".to_string(),
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHOPFRONT_STORE_NAME`: Override store name
    /// - `SHOPFRONT_LOGIN_LATENCY_MS`: Override simulated latency
    /// - `SHOPFRONT_SNAPSHOT_FILE`: Override snapshot file name
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(store_name) = std::env::var("SHOPFRONT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(latency_str) = std::env::var("SHOPFRONT_LOGIN_LATENCY_MS") {
            if let Ok(latency) = latency_str.parse::<u64>() {
                config.login_latency_ms = latency;
            }
        }

        if let Ok(snapshot_file) = std::env::var("SHOPFRONT_SNAPSHOT_FILE") {
            config.snapshot_file = snapshot_file;
        }

        config
    }

    /// Returns the simulated login latency as a Duration.
    #[inline]
    pub fn login_latency(&self) -> Duration {
        Duration::from_millis(self.login_latency_ms)
    }

    /// Returns a copy with the given simulated latency, for tests and
    /// demos that should not wait a full second per sign-in.
    pub fn with_login_latency_ms(mut self, latency_ms: u64) -> Self {
        self.login_latency_ms = latency_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.store_name, "Shopfront Demo Store");
        assert_eq!(config.login_latency(), Duration::from_millis(1_000));
        assert_eq!(config.snapshot_file, "shopfront-state.json");
    }

    #[test]
    fn test_with_login_latency() {
        let config = StoreConfig::default().with_login_latency_ms(0);
        assert_eq!(config.login_latency(), Duration::ZERO);
    }
}
