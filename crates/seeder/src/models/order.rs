//! Order records.

use chrono::NaiveDate;
use dashboard_seed_core::{OrderId, OrderStatus, Price};
use serde::{Deserialize, Serialize};

use super::{SeedRecord, Timestamps};
use crate::db::Collection;

/// One product line within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_name: String,
    pub product_id: String,
    pub product_quantity: u32,
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Customer display name
    pub customer: String,
    /// Serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    pub total: Price,
    pub status: OrderStatus,
    pub products: Vec<OrderLine>,
    #[serde(skip)]
    pub timestamps: Timestamps,
}

impl SeedRecord for Order {
    const COLLECTION: Collection = Collection::Orders;

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn timestamps(&self) -> Timestamps {
        self.timestamps
    }
}
