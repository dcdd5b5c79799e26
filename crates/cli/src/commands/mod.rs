//! Command implementations.

pub mod seed;
pub mod stats;

use dashboard_seed::db::{MemoryStore, Store};
use dashboard_seed::services::Images;
use dashboard_seed::{SeedConfig, SeedError, Seeder};
use tracing::info;

/// Flags shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub rng_seed: Option<u64>,
    pub offline: bool,
    pub dry_run: bool,
}

/// Load configuration and open the store.
///
/// Dry runs get a fresh in-memory store, so `orders` on its own finds no
/// products there; use `all`.
///
/// # Errors
///
/// Returns `SeedError` if configuration is invalid or the database is
/// unreachable.
pub async fn connect(options: &RunOptions) -> Result<Seeder<Store>, SeedError> {
    let mut config = SeedConfig::from_env()?;
    if options.rng_seed.is_some() {
        config.rng_seed = options.rng_seed;
    }

    let images = Images::new(config.images.clone(), options.offline)?;
    let store = if options.dry_run {
        info!("Dry run: writing to an in-memory store");
        Store::Memory(MemoryStore::new())
    } else {
        Store::connect(&config.database).await?
    };

    Ok(Seeder::new(store, config, images))
}
