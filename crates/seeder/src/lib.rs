//! Dashboard Seed - synthetic sample data for the admin dashboard.
//!
//! Fills the dashboard's `admins`, `products` and `orders` collections with
//! Malaysian-flavoured sample records. Each routine deletes the collection's
//! current contents and bulk-inserts a freshly generated batch.
//!
//! # Modules
//!
//! - [`config`] - environment configuration
//! - [`db`] - MongoDB, `PostgreSQL` and in-memory document stores
//! - [`generate`] - pure record generators
//! - [`models`] - seeded entities and their document encoding
//! - [`reference`] - static name, address and catalog tables
//! - [`seed`] - the seeding routines
//! - [`services`] - password hashing and image loading

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod generate;
pub mod models;
pub mod reference;
pub mod seed;
pub mod services;

pub use config::SeedConfig;
pub use error::SeedError;
pub use seed::{SeedReport, Seeder};
