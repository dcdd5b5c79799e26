//! Static reference tables the generators sample from.
//!
//! Pure data: Malaysian given names and family names, street and district
//! fragments for addresses, and the product catalog.

pub mod addresses;
pub mod catalog;
pub mod names;

pub use addresses::{STATES_AND_DISTRICTS, STREET_NAMES, STREET_TYPES};
pub use catalog::{CATALOG, CatalogCategory, CatalogItem};
pub use names::{FIRST_NAMES, LAST_NAMES};
