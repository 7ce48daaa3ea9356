//! # Shopfront Kiosk
//!
//! A scripted storefront session against the state container, standing in
//! for the browser pages that normally drive it.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Determine Snapshot Path ──────────────────────────────────────────► │
//! │     • Platform app-data directory, SHOPFRONT_DATA_PATH override         │
//! │                                                                         │
//! │  3. Build Store ──────────────────────────────────────────────────────► │
//! │     • Config from SHOPFRONT_* environment variables                     │
//! │     • Rehydrate snapshot, attach the snapshot writer                    │
//! │     • Seed the catalog                                                  │
//! │                                                                         │
//! │  4. Run the scripted session ─────────────────────────────────────────► │
//! │     browse → sign in → fill cart → checkout → order history             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Run it twice: the second run rehydrates the first run's orders from
//! the snapshot before the new session adds its own.

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shopfront_store::{SnapshotFile, Store, StoreConfig};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = StoreConfig::from_env();
    info!(store_name = %config.store_name, "starting kiosk session");

    let store = Store::with_config(config);
    let snapshot_path = snapshot_path(store.config());
    info!(path = %snapshot_path.display(), "snapshot slot");

    store.attach_snapshot(SnapshotFile::new(snapshot_path));
    store.initialize_data();

    run_session(&store).await;
}

/// Drives one shopper through the storefront.
async fn run_session(store: &Store) {
    println!("=== {} ===", store.config().store_name);

    if store.is_authenticated() {
        // Rehydrated from a previous run.
        let user = store.user().expect("authenticated session has a user");
        println!("welcome back, {} <{}>", user.name, user.email);
    } else if !store.login("shopper@example.com", "demo").await {
        println!("sign-in failed, leaving");
        return;
    }

    println!("\ncatalog:");
    for product in store.products() {
        println!(
            "  [{}] {:<32} {:>8}  ({}, {} in stock)",
            product.id,
            product.name,
            product.price().to_string(),
            product.category,
            product.stock,
        );
    }

    // Fill the cart the way the pages would: repeated adds plus one
    // explicit quantity edit.
    let headphones = store.product("1").expect("seeded product");
    let coffee = store.product("4").expect("seeded product");
    store.add_to_cart(&headphones);
    store.add_to_cart(&headphones);
    store.add_to_cart(&coffee);
    store.update_quantity(&coffee.id, 3);

    println!("\ncart:");
    for item in store.cart().items {
        println!(
            "  {:<32} x{:<3} {:>8}",
            item.product.name,
            item.quantity,
            item.line_total().to_string(),
        );
    }
    let summary = store.cart_summary();
    println!("  subtotal: {}", summary.subtotal());

    let shipping = store.user().and_then(|u| u.address);
    match store.create_order(shipping) {
        Some(order_id) => println!("\norder placed: {}", order_id),
        None => println!("\ncheckout refused (empty cart or signed out)"),
    }

    println!("\norder history this session:");
    for order in store.orders() {
        println!(
            "  {}  {:?}  {} item(s)  {}",
            order.id,
            order.status,
            order.items.len(),
            order.total(),
        );
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every store operation
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shopfront_store=debug,shopfront_core=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the snapshot file path.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.shopfront.demo/`
/// - **Windows**: `%APPDATA%\shopfront\demo\`
/// - **Linux**: `~/.local/share/shopfront-demo/`
///
/// ## Development Override
/// Set `SHOPFRONT_DATA_PATH` to use a custom directory.
fn snapshot_path(config: &StoreConfig) -> PathBuf {
    let data_dir = match std::env::var("SHOPFRONT_DATA_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => ProjectDirs::from("com", "shopfront", "demo")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    data_dir.join(&config.snapshot_file)
}
