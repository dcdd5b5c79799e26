//! Unified error type for the seeding routines.

use thiserror::Error;

use crate::config::ConfigError;
use crate::db::StoreError;
use crate::generate::GenerateError;
use crate::services::images::ImageError;

/// Anything that can abort a seeding routine.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Store(#[from] StoreError),

    /// Record generation failed.
    #[error("Generation error: {0}")]
    Generate(#[from] GenerateError),

    /// The HTTP client for images could not be built.
    #[error("Image error: {0}")]
    Image(#[from] ImageError),
}
