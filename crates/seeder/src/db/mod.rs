//! Document storage for seeded collections.
//!
//! # Collections
//!
//! - `admins` - dashboard admin accounts (including the master admin)
//! - `products` - catalog entries
//! - `orders` - single-line orders referencing `products`
//!
//! Every stored document carries `_id` and `id` (same value), its entity
//! fields, `createdAt`/`updatedAt` and a `__v` version counter, matching what
//! the dashboard's models expect.
//!
//! # Backends
//!
//! - [`MongoStore`] - the dashboard's own database (`mongodb://` URIs)
//! - [`PostgresStore`] - one JSONB table per collection (`postgres://` URIs)
//! - [`MemoryStore`] - process-local, for tests and dry runs
//!
//! [`Store`] picks a backend from the configured URI.

pub mod memory;
pub mod mongo;
pub mod postgres;

use std::fmt;
use std::future::Future;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::{Backend, DatabaseConfig};

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use postgres::PostgresStore;

/// Name of the version counter field.
pub const VERSION_KEY: &str = "__v";

/// Version written on every seeded document.
pub const SEED_VERSION: i32 = 0;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Error from the MongoDB driver.
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// Error from sqlx.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A record could not be turned into a document.
    #[error("document encoding error: {0}")]
    Encoding(String),

    /// A stored document is missing fields or has the wrong shape.
    #[error("malformed document in {collection}: {reason}")]
    Malformed {
        /// Collection the document was read from.
        collection: Collection,
        /// What was wrong with it.
        reason: String,
    },
}

/// The collections this tool owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Admins,
    Products,
    Orders,
}

impl Collection {
    /// Every collection, in seeding order.
    pub const ALL: [Self; 3] = [Self::Admins, Self::Products, Self::Orders];

    /// Collection (or table) name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admins => "admins",
            Self::Products => "products",
            Self::Orders => "orders",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document ready to be written.
///
/// `fields` holds the entity's own fields; the identifier, timestamps and
/// version are kept apart so each backend can encode them natively (BSON
/// dates, `TIMESTAMPTZ` columns).
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// JSON body with the secondary `id` field and the version counter added.
    #[must_use]
    pub fn body(&self) -> Value {
        let mut body = Map::with_capacity(self.fields.len() + 2);
        body.insert("id".to_owned(), Value::String(self.id.clone()));
        body.extend(self.fields.clone());
        body.insert(VERSION_KEY.to_owned(), Value::from(SEED_VERSION));
        Value::Object(body)
    }
}

/// A document read back from a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl StoredDocument {
    /// Deserialize the document's fields into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the fields don't match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.fields.clone()))
    }
}

/// Result of replacing a collection's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaceOutcome {
    /// Documents removed before inserting.
    pub deleted: u64,
    /// Documents inserted.
    pub inserted: u64,
}

/// Storage operations the seeding routines need.
///
/// `replace_all` always clears the collection, even when `documents` is
/// empty.
pub trait DocumentStore {
    /// Delete every document in `collection`, then bulk-insert `documents`.
    fn replace_all(
        &self,
        collection: Collection,
        documents: &[Document],
    ) -> impl Future<Output = Result<ReplaceOutcome, StoreError>> + Send;

    /// Read every document in `collection`.
    fn find_all(
        &self,
        collection: Collection,
    ) -> impl Future<Output = Result<Vec<StoredDocument>, StoreError>> + Send;

    /// Number of documents in `collection`.
    fn count(&self, collection: Collection)
    -> impl Future<Output = Result<u64, StoreError>> + Send;

    /// Release connections.
    fn close(&self) -> impl Future<Output = ()> + Send;
}

/// A store chosen at runtime from configuration.
#[derive(Debug)]
pub enum Store {
    Mongo(MongoStore),
    Postgres(PostgresStore),
    Memory(MemoryStore),
}

impl Store {
    /// Connect to the configured database.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the connection cannot be established.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        tracing::info!(backend = %config.backend, database = %config.name, "Connecting to database");
        match config.backend {
            Backend::Mongo => Ok(Self::Mongo(
                MongoStore::connect(&config.uri, &config.name).await?,
            )),
            Backend::Postgres => Ok(Self::Postgres(
                PostgresStore::connect(&config.uri, &config.name).await?,
            )),
        }
    }
}

impl DocumentStore for Store {
    async fn replace_all(
        &self,
        collection: Collection,
        documents: &[Document],
    ) -> Result<ReplaceOutcome, StoreError> {
        match self {
            Self::Mongo(store) => store.replace_all(collection, documents).await,
            Self::Postgres(store) => store.replace_all(collection, documents).await,
            Self::Memory(store) => store.replace_all(collection, documents).await,
        }
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<StoredDocument>, StoreError> {
        match self {
            Self::Mongo(store) => store.find_all(collection).await,
            Self::Postgres(store) => store.find_all(collection).await,
            Self::Memory(store) => store.find_all(collection).await,
        }
    }

    async fn count(&self, collection: Collection) -> Result<u64, StoreError> {
        match self {
            Self::Mongo(store) => store.count(collection).await,
            Self::Postgres(store) => store.count(collection).await,
            Self::Memory(store) => store.count(collection).await,
        }
    }

    async fn close(&self) {
        match self {
            Self::Mongo(store) => store.close().await,
            Self::Postgres(store) => store.close().await,
            Self::Memory(store) => store.close().await,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> Document {
        let now = Utc::now();
        Document {
            id: "PRODUCT-1".to_owned(),
            fields: json!({ "name": "Laptop", "price": 12.5 })
                .as_object()
                .cloned()
                .unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_body_duplicates_id_and_sets_version() {
        let body = sample().body();
        assert_eq!(body["id"], "PRODUCT-1");
        assert_eq!(body["name"], "Laptop");
        assert_eq!(body[VERSION_KEY], 0);
    }

    #[test]
    fn test_stored_document_decode() {
        #[derive(serde::Deserialize)]
        struct Named {
            name: String,
        }

        let doc = sample();
        let stored = StoredDocument {
            id: doc.id,
            fields: doc.fields,
        };
        let named: Named = stored.decode().unwrap();
        assert_eq!(named.name, "Laptop");
    }

    #[test]
    fn test_collection_names() {
        let names: Vec<_> = Collection::ALL.iter().map(Collection::as_str).collect();
        assert_eq!(names, ["admins", "products", "orders"]);
    }
}
