//! Dashboard Seed Core - Shared domain types.
//!
//! This crate provides the types shared by the seeder library, the `dbseed`
//! binary and the integration tests:
//! - prefixed document identifiers (`ADMIN-…`, `PRODUCT-…`, `ORDER-…`)
//! - validated email addresses and Malaysian mobile numbers
//! - two-decimal prices
//! - admin roles and order statuses, serialized the way the dashboard reads them
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients, no randomness beyond UUID generation.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, emails, phone numbers and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
