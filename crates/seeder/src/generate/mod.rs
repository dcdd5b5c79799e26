//! Synthetic record generation.
//!
//! Every generator takes the random source as a parameter (`R: Rng + ?Sized`)
//! and does no I/O, so seeded runs are reproducible and tests can drive them
//! with a fixed `StdRng`.
//!
//! # Generators
//!
//! - [`admins`] - the master admin plus random admins with distinct names
//! - [`products`] - catalog products with banded stock and skewed prices
//! - [`orders`] - orders spread over a month window with a per-month minimum
//! - [`person`] - names, phone numbers and addresses shared by the above

pub mod admins;
pub mod orders;
pub mod person;
pub mod products;
pub mod window;

use dashboard_seed_core::{EmailError, PhoneNumberError};
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

use crate::services::password::PasswordError;
use window::YearMonth;

pub use admins::{generate_admins, master_admin};
pub use orders::{OrderPlan, generate_orders};
pub use products::generate_products;
pub use window::{OrderWindow, WindowError};

/// Errors that can occur while generating records.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no products available to generate orders from")]
    NoProducts,

    #[error("requested {requested} admins but only {available} distinct name pairs exist")]
    NotEnoughNames { requested: usize, available: usize },

    #[error("reference table {0} is empty")]
    EmptyTable(&'static str),

    #[error("invalid weights: {0}")]
    Weights(String),

    #[error("order plan could produce more than {limit} orders")]
    PlanTooLarge { limit: usize },

    #[error("day {day} does not exist in {month}")]
    InvalidDate { month: YearMonth, day: u32 },

    #[error("password hashing failed: {0}")]
    Password(#[from] PasswordError),

    #[error("invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("invalid phone number: {0}")]
    Phone(#[from] PhoneNumberError),
}

/// Uniformly pick one entry of a reference table.
fn pick<'a, T, R>(rng: &mut R, table: &'a [T], name: &'static str) -> Result<&'a T, GenerateError>
where
    R: Rng + ?Sized,
{
    table.choose(rng).ok_or(GenerateError::EmptyTable(name))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_pick_empty_table() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: [u8; 0] = [];
        assert!(matches!(
            pick(&mut rng, &empty, "empty"),
            Err(GenerateError::EmptyTable("empty"))
        ));
        assert_eq!(*pick(&mut rng, &[7], "one").unwrap(), 7);
    }
}
