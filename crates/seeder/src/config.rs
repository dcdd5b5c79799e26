//! Seeder configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Database
//! - `MONGO_URI` - Connection URI (default: `mongodb://localhost:27017/`).
//!   `postgres://` and `postgresql://` URIs select the `PostgreSQL` backend.
//! - `MONGO_DB_NAME` - Database name, or schema name on `PostgreSQL`
//!   (default: `ecommerce_admin_dashboard`)
//!
//! ## Volumes
//! - `SEED_ADMIN_COUNT` - Random admins besides the master admin (default: 50)
//! - `SEED_PRODUCT_COUNT` - Products (default: 500)
//! - `SEED_ORDER_COUNT` - Order total target (default: 1000)
//! - `SEED_MIN_ORDERS_PER_MONTH` - Minimum orders dated in each month (default: 30)
//! - `SEED_ORDER_WINDOW_START` - First order month, inclusive (default: 2020-01)
//! - `SEED_ORDER_WINDOW_END` - Last order month, exclusive (default: 2025-01)
//!
//! ## Passwords
//! - `SEED_PASSWORD_SCHEME` - `bcrypt` or `argon2` (default: bcrypt)
//! - `SEED_BCRYPT_COST` - bcrypt work factor, 4-31 (default: 10)
//! - `SEED_ADMIN_PASSWORD` - Password for every random admin (default: password)
//! - `SEED_MASTER_PASSWORD` - Master admin password (default: password)
//!
//! ## Images
//! - `SEED_PRODUCT_IMAGE_URL` - Placeholder product image
//! - `SEED_AVATAR_FILE` - Placeholder avatar image file
//! - `SEED_AVATAR_ENDPOINT` - Per-name avatar URL template containing `{name}`
//! - `SEED_HTTP_TIMEOUT_SECS` - Image download timeout (default: 10)
//!
//! ## Other
//! - `SEED_RNG_SEED` - Fixed RNG seed for reproducible runs
//!
//! Empty values are treated as unset.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

use crate::generate::window::{OrderWindow, YearMonth};
use crate::services::password::PasswordScheme;

const DEFAULT_URI: &str = "mongodb://localhost:27017/";
const DEFAULT_DB_NAME: &str = "ecommerce_admin_dashboard";
const DEFAULT_PASSWORD: &str = "password";

/// Placeholder shown when no product image could be downloaded.
pub const DEFAULT_PRODUCT_IMAGE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/1/14/No_Image_Available.jpg";

/// Substituted with the URL-encoded display name in avatar templates.
pub const AVATAR_NAME_PLACEHOLDER: &str = "{name}";

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// `PostgreSQL` truncates identifiers beyond this length.
const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Characters MongoDB rejects in database names.
const MONGO_FORBIDDEN_CHARS: &[char] = &['/', '\\', '.', ' ', '"', '$', '*', '<', '>', ':', '|', '?'];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Database family, chosen from the URI scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Mongo,
    Postgres,
}

impl Backend {
    /// Detect the backend from a connection URI.
    #[must_use]
    pub fn from_uri(uri: &str) -> Option<Self> {
        let (scheme, _) = uri.split_once("://")?;
        match scheme.to_ascii_lowercase().as_str() {
            "mongodb" | "mongodb+srv" => Some(Self::Mongo),
            "postgres" | "postgresql" => Some(Self::Postgres),
            _ => None,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mongo => "mongodb",
            Self::Postgres => "postgres",
        })
    }
}

/// Where the seeded collections live.
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Connection URI (may contain credentials)
    pub uri: SecretString,
    /// Database name (schema name on `PostgreSQL`)
    pub name: String,
    pub backend: Backend,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("uri", &"[REDACTED]")
            .field("name", &self.name)
            .field("backend", &self.backend)
            .finish()
    }
}

/// How many records each routine generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedCounts {
    /// Random admins, not counting the master admin
    pub admins: usize,
    pub products: usize,
    /// Orders to reach before only per-month top-ups are drawn
    pub orders: usize,
}

impl Default for SeedCounts {
    fn default() -> Self {
        Self {
            admins: 50,
            products: 500,
            orders: 1_000,
        }
    }
}

/// Password hashing settings.
///
/// Implements `Debug` manually to redact the passwords.
#[derive(Clone)]
pub struct PasswordConfig {
    pub scheme: PasswordScheme,
    /// bcrypt work factor (ignored for Argon2)
    pub bcrypt_cost: u32,
    /// Shared by every random admin
    pub admin_password: SecretString,
    pub master_password: SecretString,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            scheme: PasswordScheme::Bcrypt,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            admin_password: SecretString::from(DEFAULT_PASSWORD),
            master_password: SecretString::from(DEFAULT_PASSWORD),
        }
    }
}

impl fmt::Debug for PasswordConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordConfig")
            .field("scheme", &self.scheme)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("admin_password", &"[REDACTED]")
            .field("master_password", &"[REDACTED]")
            .finish()
    }
}

/// Image sources for products and admin avatars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfig {
    /// Downloaded once per run and shared by every product
    pub product_image_url: String,
    /// Local placeholder avatar shared by every admin
    pub avatar_file: Option<PathBuf>,
    /// URL template with a `{name}` placeholder for per-admin avatars
    pub avatar_endpoint: Option<String>,
    pub http_timeout: Duration,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            product_image_url: DEFAULT_PRODUCT_IMAGE_URL.to_string(),
            avatar_file: None,
            avatar_endpoint: None,
            http_timeout: Duration::from_secs(10),
        }
    }
}

/// Complete seeder configuration.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub database: DatabaseConfig,
    pub counts: SeedCounts,
    pub min_orders_per_month: usize,
    pub order_window: OrderWindow,
    pub passwords: PasswordConfig,
    pub images: ImageConfig,
    /// Fixed seed; a fresh OS seed is used when unset
    pub rng_seed: Option<u64>,
}

impl SeedConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);
        let defaults = SeedCounts::default();

        let counts = SeedCounts {
            admins: env.get_parsed_or("SEED_ADMIN_COUNT", defaults.admins)?,
            products: env.get_parsed_or("SEED_PRODUCT_COUNT", defaults.products)?,
            orders: env.get_parsed_or("SEED_ORDER_COUNT", defaults.orders)?,
        };

        Ok(Self {
            database: DatabaseConfig::from_env(&env)?,
            counts,
            min_orders_per_month: env.get_parsed_or("SEED_MIN_ORDERS_PER_MONTH", 30)?,
            order_window: order_window_from_env(&env)?,
            passwords: PasswordConfig::from_env(&env)?,
            images: ImageConfig::from_env(&env)?,
            rng_seed: env.get_parsed("SEED_RNG_SEED")?,
        })
    }
}

impl DatabaseConfig {
    fn from_env<F: Fn(&str) -> Option<String>>(env: &Env<F>) -> Result<Self, ConfigError> {
        let uri = env.get_or_default("MONGO_URI", DEFAULT_URI);
        let backend = Backend::from_uri(&uri).ok_or_else(|| {
            ConfigError::InvalidEnvVar(
                "MONGO_URI".to_string(),
                "expected a mongodb://, mongodb+srv://, postgres:// or postgresql:// URI"
                    .to_string(),
            )
        })?;

        let name = env.get_or_default("MONGO_DB_NAME", DEFAULT_DB_NAME);
        validate_database_name(&name, backend)
            .map_err(|reason| ConfigError::InvalidEnvVar("MONGO_DB_NAME".to_string(), reason))?;

        Ok(Self {
            uri: SecretString::from(uri),
            name,
            backend,
        })
    }
}

impl PasswordConfig {
    fn from_env<F: Fn(&str) -> Option<String>>(env: &Env<F>) -> Result<Self, ConfigError> {
        let scheme = env.get_parsed_or("SEED_PASSWORD_SCHEME", PasswordScheme::Bcrypt)?;

        let bcrypt_cost = env.get_parsed_or("SEED_BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidEnvVar(
                "SEED_BCRYPT_COST".to_string(),
                format!("must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}"),
            ));
        }

        Ok(Self {
            scheme,
            bcrypt_cost,
            admin_password: SecretString::from(
                env.get_or_default("SEED_ADMIN_PASSWORD", DEFAULT_PASSWORD),
            ),
            master_password: SecretString::from(
                env.get_or_default("SEED_MASTER_PASSWORD", DEFAULT_PASSWORD),
            ),
        })
    }
}

impl ImageConfig {
    fn from_env<F: Fn(&str) -> Option<String>>(env: &Env<F>) -> Result<Self, ConfigError> {
        let avatar_endpoint = env.get_optional("SEED_AVATAR_ENDPOINT");
        if let Some(endpoint) = &avatar_endpoint
            && !endpoint.contains(AVATAR_NAME_PLACEHOLDER)
        {
            return Err(ConfigError::InvalidEnvVar(
                "SEED_AVATAR_ENDPOINT".to_string(),
                format!("template must contain {AVATAR_NAME_PLACEHOLDER}"),
            ));
        }

        let timeout_secs: u64 = env.get_parsed_or("SEED_HTTP_TIMEOUT_SECS", 10)?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "SEED_HTTP_TIMEOUT_SECS".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            product_image_url: env
                .get_or_default("SEED_PRODUCT_IMAGE_URL", DEFAULT_PRODUCT_IMAGE_URL),
            avatar_file: env.get_optional("SEED_AVATAR_FILE").map(PathBuf::from),
            avatar_endpoint,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn order_window_from_env<F: Fn(&str) -> Option<String>>(
    env: &Env<F>,
) -> Result<OrderWindow, ConfigError> {
    let defaults = OrderWindow::default();
    let start: YearMonth = env.get_parsed_or("SEED_ORDER_WINDOW_START", defaults.start())?;
    let end: YearMonth = env.get_parsed_or("SEED_ORDER_WINDOW_END", defaults.end())?;
    OrderWindow::new(start, end)
        .map_err(|e| ConfigError::InvalidEnvVar("SEED_ORDER_WINDOW_END".to_string(), e.to_string()))
}

/// Check a database name against the backend's naming rules.
fn validate_database_name(name: &str, backend: Backend) -> Result<(), String> {
    if name.is_empty() {
        return Err("must not be empty".to_string());
    }
    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(format!("must be at most {MAX_IDENTIFIER_LENGTH} bytes"));
    }

    match backend {
        Backend::Mongo => {
            if let Some(c) = name.chars().find(|c| MONGO_FORBIDDEN_CHARS.contains(c)) {
                return Err(format!("character {c:?} is not allowed"));
            }
        }
        Backend::Postgres => {
            // Used unescaped inside quoted identifiers
            let mut chars = name.chars();
            let valid_start = chars
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
            if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(
                    "schema names must be letters, digits and underscores, not starting with a digit"
                        .to_string(),
                );
            }
        }
    }
    Ok(())
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Variable source with empty values treated as unset.
struct Env<F>(F);

impl<F: Fn(&str) -> Option<String>> Env<F> {
    /// Get an optional variable.
    fn get_optional(&self, key: &str) -> Option<String> {
        (self.0)(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    /// Get a variable with a default value.
    fn get_or_default(&self, key: &str, default: &str) -> String {
        self.get_optional(key)
            .unwrap_or_else(|| default.to_string())
    }

    /// Parse an optional variable.
    fn get_parsed<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.get_optional(key)
            .map(|value| {
                value
                    .parse()
                    .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
            })
            .transpose()
    }

    /// Parse a variable, falling back to `default` when unset.
    fn get_parsed_or<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        Ok(self.get_parsed(key)?.unwrap_or(default))
    }
}
