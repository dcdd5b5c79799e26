//! Prefixed document identifiers.
//!
//! Every seeded document is keyed by a string of the form `<PREFIX>-<uuid>`
//! (for example `ORDER-6f1c…`). The same value is written to both `_id` and
//! `id`. Use the `define_id!` macro to create a wrapper per collection so that
//! product IDs cannot be passed where order IDs are expected.

use thiserror::Error;

/// Error returned when a string does not carry the expected ID prefix.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("identifier {value:?} must start with {prefix:?}")]
pub struct IdError {
    /// Prefix the identifier type requires.
    pub prefix: &'static str,
    /// Rejected input.
    pub value: String,
}

/// Macro to define a type-safe prefixed ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `generate()` for a fresh `PREFIX-<uuid v4>` value
/// - `parse()` / `FromStr` that check the prefix
/// - `Display`, `AsRef<str>` and `From<$name> for String`
///
/// # Example
///
/// ```rust
/// # use dashboard_seed_core::define_id;
/// define_id!(InvoiceId, "INVOICE-");
///
/// let id = InvoiceId::generate();
/// assert!(id.as_str().starts_with("INVOICE-"));
/// assert!(InvoiceId::parse("ORDER-1").is_err());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix shared by every identifier of this type.
            pub const PREFIX: &'static str = $prefix;

            /// Generate a fresh identifier from a random (v4) UUID.
            #[must_use]
            pub fn generate() -> Self {
                Self(format!("{}{}", Self::PREFIX, ::uuid::Uuid::new_v4()))
            }

            /// Parse an identifier, checking its prefix.
            ///
            /// # Errors
            ///
            /// Returns an error if the value does not start with the prefix
            /// or has nothing after it.
            pub fn parse(value: &str) -> ::core::result::Result<Self, $crate::IdError> {
                match value.strip_prefix(Self::PREFIX) {
                    Some(rest) if !rest.is_empty() => Ok(Self(value.to_owned())),
                    _ => Err($crate::IdError {
                        prefix: Self::PREFIX,
                        value: value.to_owned(),
                    }),
                }
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the identifier and returns its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(AdminId, "ADMIN-");
define_id!(ProductId, "PRODUCT-");
define_id!(OrderId, "ORDER-");

impl AdminId {
    /// Identifier of the fixed master admin account.
    pub const MASTER: &'static str = "ADMIN-MASTER";

    /// The master admin's identifier.
    #[must_use]
    pub fn master() -> Self {
        Self(Self::MASTER.to_owned())
    }
}
