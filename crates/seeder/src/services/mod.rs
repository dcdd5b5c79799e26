//! Supporting services for the generators.
//!
//! # Services
//!
//! - `images` - placeholder product images and admin avatars as `data:` URLs
//! - `password` - salted bcrypt / Argon2id hashing

pub mod images;
pub mod password;

pub use images::{ImageError, ImageFetcher, Images};
pub use password::{PasswordError, PasswordHasher, PasswordScheme, verify_password};
