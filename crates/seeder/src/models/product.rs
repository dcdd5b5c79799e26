//! Product records.

use dashboard_seed_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

use super::{SeedRecord, Timestamps};
use crate::db::{Collection, StoreError, StoredDocument};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Price,
    pub stock: u32,
    pub description: String,
    /// `data:` URL, or the placeholder URL when the download failed
    pub image: String,
    #[serde(skip)]
    pub timestamps: Timestamps,
}

impl SeedRecord for Product {
    const COLLECTION: Collection = Collection::Products;

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn timestamps(&self) -> Timestamps {
        self.timestamps
    }
}

/// The parts of a stored product an order needs.
///
/// The id is kept as a plain string: products created through the dashboard
/// use bare UUIDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRef {
    pub id: String,
    pub name: String,
    pub price: Price,
}

#[derive(Deserialize)]
struct ProductFields {
    name: String,
    price: Price,
}

impl ProductRef {
    /// Read a product back from its collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Malformed` if `name` or `price` is missing or
    /// has the wrong type.
    pub fn from_stored(document: &StoredDocument) -> Result<Self, StoreError> {
        let fields: ProductFields = document.decode().map_err(|e| StoreError::Malformed {
            collection: Collection::Products,
            reason: format!("{}: {e}", document.id),
        })?;
        Ok(Self {
            id: document.id.clone(),
            name: fields.name,
            price: fields.price,
        })
    }
}

impl From<&Product> for ProductRef {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price,
        }
    }
}
