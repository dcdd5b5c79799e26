//! The seeding routines.
//!
//! Each routine generates a batch, then replaces its collection's contents
//! with it: delete everything, bulk-insert the batch (nothing when empty),
//! report the counts. Orders are built from whatever products the store
//! currently holds.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument, warn};

use crate::config::SeedConfig;
use crate::db::{Collection, Document, DocumentStore};
use crate::error::SeedError;
use crate::generate::{self, OrderPlan};
use crate::models::{self, Admin, ProductRef};
use crate::services::images::Images;
use crate::services::password::PasswordHasher;

/// Outcome of one seeding routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub collection: Collection,
    /// Documents removed before inserting
    pub deleted: u64,
    pub inserted: u64,
}

/// Clear `collection` and insert `documents`.
///
/// # Errors
///
/// Returns `SeedError::Store` if the delete or insert fails.
#[instrument(skip(store, documents), fields(documents = documents.len()))]
pub async fn replace_collection<S: DocumentStore>(
    store: &S,
    collection: Collection,
    documents: &[Document],
) -> Result<SeedReport, SeedError> {
    let outcome = store.replace_all(collection, documents).await?;
    info!(
        %collection,
        deleted = outcome.deleted,
        inserted = outcome.inserted,
        "Successfully inserted {} {collection}",
        outcome.inserted
    );
    Ok(SeedReport {
        collection,
        deleted: outcome.deleted,
        inserted: outcome.inserted,
    })
}

/// Fill in profile pictures: a per-name avatar when an endpoint is
/// configured, otherwise the shared placeholder.
pub async fn attach_avatars(images: &Images, admins: &mut [Admin]) {
    let placeholder = images.avatar_placeholder().await;
    let per_admin = images.fetches_avatars();

    for admin in admins {
        admin.profile_picture = if per_admin && !admin.is_master() {
            images
                .avatar_for(&admin.display_name(), placeholder.as_deref())
                .await
        } else {
            placeholder.clone()
        };
    }
}

/// Runs the seeding routines against one store.
pub struct Seeder<S> {
    store: S,
    config: SeedConfig,
    images: Images,
    rng: StdRng,
}

impl<S: DocumentStore> Seeder<S> {
    /// Seeded from `config.rng_seed` when set, otherwise from the OS.
    #[must_use]
    pub fn new(store: S, config: SeedConfig, images: Images) -> Self {
        let rng = config
            .rng_seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            store,
            config,
            images,
            rng,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn config(&self) -> &SeedConfig {
        &self.config
    }

    fn hasher(&self) -> PasswordHasher {
        PasswordHasher::new(
            self.config.passwords.scheme,
            self.config.passwords.bcrypt_cost,
        )
    }

    /// Replace the admins with the master admin plus `count` random admins.
    ///
    /// # Errors
    ///
    /// Returns `SeedError` if generation or the database write fails.
    pub async fn seed_admins(&mut self, count: usize) -> Result<SeedReport, SeedError> {
        info!(count, scheme = %self.config.passwords.scheme, "Generating admins");
        let hasher = self.hasher();
        let passwords = &self.config.passwords;
        let mut admins = generate::generate_admins(
            &mut self.rng,
            count,
            &hasher,
            &passwords.admin_password,
            &passwords.master_password,
        )?;
        attach_avatars(&self.images, &mut admins).await;

        let documents = models::to_documents(&admins)?;
        replace_collection(&self.store, Collection::Admins, &documents).await
    }

    /// Replace the products with `count` new products.
    ///
    /// # Errors
    ///
    /// Returns `SeedError` if generation or the database write fails.
    pub async fn seed_products(&mut self, count: usize) -> Result<SeedReport, SeedError> {
        info!(count, "Generating products");
        let image = self.images.product_image().await;
        let products = generate::generate_products(&mut self.rng, count, &image)?;

        let documents = models::to_documents(&products)?;
        replace_collection(&self.store, Collection::Products, &documents).await
    }

    /// Replace the orders with a batch built from the stored products.
    ///
    /// Returns `None`, leaving the orders untouched, when there are no
    /// products.
    ///
    /// # Errors
    ///
    /// Returns `SeedError` if reading products, generation or the database
    /// write fails.
    pub async fn seed_orders(&mut self, plan: &OrderPlan) -> Result<Option<SeedReport>, SeedError> {
        let products = self
            .store
            .find_all(Collection::Products)
            .await?
            .iter()
            .map(ProductRef::from_stored)
            .collect::<Result<Vec<_>, _>>()?;

        if products.is_empty() {
            warn!("No products available to generate orders; run the products routine first");
            return Ok(None);
        }

        info!(
            products = products.len(),
            target = plan.target,
            min_per_month = plan.min_per_month,
            window_start = %plan.window.start(),
            window_end = %plan.window.end(),
            "Generating orders"
        );
        let orders = generate::generate_orders(&mut self.rng, &products, plan)?;

        let documents = models::to_documents(&orders)?;
        replace_collection(&self.store, Collection::Orders, &documents)
            .await
            .map(Some)
    }

    /// The order plan from configuration.
    #[must_use]
    pub const fn order_plan(&self) -> OrderPlan {
        OrderPlan {
            target: self.config.counts.orders,
            min_per_month: self.config.min_orders_per_month,
            window: self.config.order_window,
        }
    }

    /// Document count of every collection.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Store` if a count fails.
    pub async fn stats(&self) -> Result<Vec<(Collection, u64)>, SeedError> {
        let mut stats = Vec::with_capacity(Collection::ALL.len());
        for collection in Collection::ALL {
            stats.push((collection, self.store.count(collection).await?));
        }
        Ok(stats)
    }

    /// Close the store's connections.
    pub async fn close(self) {
        self.store.close().await;
    }
}
