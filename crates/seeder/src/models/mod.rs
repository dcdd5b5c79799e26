//! Seeded entities and their document encoding.
//!
//! # Models
//!
//! - `admin` - dashboard admin accounts
//! - `product` - catalog products
//! - `order` - single-line customer orders
//!
//! Field names are serialized exactly as the dashboard's schemas declare them
//! (`phone_number`, `product_quantity`, ...). The identifier and timestamps are
//! carried separately on [`Document`].

pub mod admin;
pub mod order;
pub mod product;

pub use admin::Admin;
pub use order::{Order, OrderLine};
pub use product::{Product, ProductRef};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::db::{Collection, Document, StoreError};

/// Creation and update times of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Timestamps {
    /// Both timestamps set to the current time.
    #[must_use]
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for Timestamps {
    fn default() -> Self {
        Self::now()
    }
}

/// A record that can be written to its collection.
pub trait SeedRecord: Serialize {
    /// Collection the record belongs to.
    const COLLECTION: Collection;

    fn id(&self) -> &str;

    fn timestamps(&self) -> Timestamps;

    /// Encode the record as a [`Document`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Encoding` if the record doesn't serialize to a
    /// JSON object.
    fn to_document(&self) -> Result<Document, StoreError> {
        let value =
            serde_json::to_value(self).map_err(|e| StoreError::Encoding(e.to_string()))?;
        let Value::Object(mut fields) = value else {
            return Err(StoreError::Encoding(format!(
                "{} record is not an object",
                Self::COLLECTION
            )));
        };
        // Written separately by every backend
        fields.remove("id");

        let timestamps = self.timestamps();
        Ok(Document {
            id: self.id().to_string(),
            fields,
            created_at: timestamps.created_at,
            updated_at: timestamps.updated_at,
        })
    }
}

/// Encode a batch of records.
///
/// # Errors
///
/// Returns the first encoding error.
pub fn to_documents<T: SeedRecord>(records: &[T]) -> Result<Vec<Document>, StoreError> {
    records.iter().map(SeedRecord::to_document).collect()
}
