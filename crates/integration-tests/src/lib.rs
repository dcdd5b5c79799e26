//! Integration tests for the dashboard seeder.
//!
//! # Running Tests
//!
//! ```bash
//! # In-memory pipeline tests
//! cargo test -p dashboard-seed-integration-tests
//!
//! # Include the live database tests
//! SEED_TEST_MONGO_URI=mongodb://localhost:27017/ \
//! SEED_TEST_POSTGRES_URI=postgres://localhost/seed_test \
//!     cargo test -p dashboard-seed-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `seed_pipeline` - every routine against [`MemoryStore`]
//! - `live_stores` - the same routines against real MongoDB / `PostgreSQL`

use std::collections::HashMap;

use dashboard_seed::config::PasswordConfig;
use dashboard_seed::db::{Collection, DocumentStore, MemoryStore, StoredDocument};
use dashboard_seed::services::Images;
use dashboard_seed::{SeedConfig, Seeder};

/// Configuration for fast, reproducible test runs: defaults from an empty
/// environment, bcrypt cost 4, fixed seed, plus `overrides`.
///
/// # Panics
///
/// Panics if `overrides` contains an invalid value.
#[must_use]
#[allow(clippy::expect_used)]
pub fn test_config(overrides: &[(&str, &str)]) -> SeedConfig {
    let vars: HashMap<String, String> = overrides
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    let mut config =
        SeedConfig::from_lookup(|key| vars.get(key).cloned()).expect("valid test configuration");
    config.passwords = PasswordConfig {
        bcrypt_cost: 4,
        ..config.passwords
    };
    config.rng_seed = config.rng_seed.or(Some(20_240_101));
    config
}

/// A seeder over `store` that never touches the network.
#[must_use]
pub fn offline_seeder<S: DocumentStore>(store: S, config: SeedConfig) -> Seeder<S> {
    let images = Images::offline(config.images.clone());
    Seeder::new(store, config, images)
}

/// Every document in `collection`.
///
/// # Panics
///
/// Panics if the store read fails.
#[allow(clippy::expect_used)]
pub async fn documents(store: &MemoryStore, collection: Collection) -> Vec<StoredDocument> {
    store
        .find_all(collection)
        .await
        .expect("in-memory reads do not fail")
}
