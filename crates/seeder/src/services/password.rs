//! Salted password hashing for seeded admin accounts.
//!
//! bcrypt is what the dashboard verifies logins with; Argon2id is available
//! for deployments that have moved off it.

use std::fmt;
use std::str::FromStr;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Password hashing errors.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("argon2 error: {0}")]
    Argon2(String),

    #[error("unknown password scheme {0:?} (expected bcrypt or argon2)")]
    UnknownScheme(String),
}

/// Supported hashing schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordScheme {
    #[default]
    Bcrypt,
    Argon2,
}

impl PasswordScheme {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bcrypt => "bcrypt",
            Self::Argon2 => "argon2",
        }
    }
}

impl fmt::Display for PasswordScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PasswordScheme {
    type Err = PasswordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bcrypt" => Ok(Self::Bcrypt),
            "argon2" | "argon2id" => Ok(Self::Argon2),
            _ => Err(PasswordError::UnknownScheme(s.to_string())),
        }
    }
}

/// Hashes passwords with a fresh salt per call.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    scheme: PasswordScheme,
    bcrypt_cost: u32,
}

impl PasswordHasher {
    #[must_use]
    pub const fn new(scheme: PasswordScheme, bcrypt_cost: u32) -> Self {
        Self {
            scheme,
            bcrypt_cost,
        }
    }

    #[must_use]
    pub const fn scheme(&self) -> PasswordScheme {
        self.scheme
    }

    /// Hash a password.
    ///
    /// # Errors
    ///
    /// Returns `PasswordError` if the underlying hasher fails.
    pub fn hash(&self, password: &SecretString) -> Result<String, PasswordError> {
        let password = password.expose_secret().as_bytes();
        match self.scheme {
            PasswordScheme::Bcrypt => Ok(bcrypt::hash(password, self.bcrypt_cost)?),
            PasswordScheme::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                Argon2::default()
                    .hash_password(password, &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| PasswordError::Argon2(e.to_string()))
            }
        }
    }
}

/// Check a password against a stored hash of either scheme.
///
/// Returns `false` for hashes that can't be parsed.
#[must_use]
pub fn verify_password(password: &str, hash: &str) -> bool {
    if hash.starts_with("$argon2") {
        PasswordHash::new(hash).is_ok_and(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
    } else {
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}
