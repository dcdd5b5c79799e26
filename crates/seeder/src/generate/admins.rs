//! Admin accounts: the fixed master admin plus random admins.

use dashboard_seed_core::{AdminId, AdminRole, Email};
use rand::Rng;
use secrecy::SecretString;

use super::person::{self, NamePair};
use super::{GenerateError, pick};
use crate::models::{Admin, Timestamps};
use crate::services::password::PasswordHasher;

pub const MASTER_USERNAME: &str = "master_admin";
pub const MASTER_EMAIL: &str = "masteradmin@gmail.com";

/// Stored in the master admin's personal fields.
pub const NONE_FIELD: &str = "None";

/// The master admin, which can always sign in to the dashboard.
///
/// # Errors
///
/// Returns `GenerateError::Password` if hashing fails.
pub fn master_admin(hasher: &PasswordHasher, password: &SecretString) -> Result<Admin, GenerateError> {
    Ok(Admin {
        id: AdminId::master(),
        username: MASTER_USERNAME.to_string(),
        email: Email::parse(MASTER_EMAIL)?,
        phone_number: NONE_FIELD.to_string(),
        role: AdminRole::CurrentAdmin,
        first_name: NONE_FIELD.to_string(),
        last_name: NONE_FIELD.to_string(),
        address: NONE_FIELD.to_string(),
        password: hasher.hash(password)?,
        profile_picture: None,
        timestamps: Timestamps::now(),
    })
}

/// One random admin for the given name pair.
///
/// # Errors
///
/// Returns `GenerateError` if hashing or field validation fails.
pub fn random_admin<R: Rng + ?Sized>(
    rng: &mut R,
    names: NamePair,
    hasher: &PasswordHasher,
    password: &SecretString,
) -> Result<Admin, GenerateError> {
    Ok(Admin {
        id: AdminId::generate(),
        username: names.username(),
        email: names.email()?,
        phone_number: person::phone_number(rng)?.to_string(),
        role: *pick(rng, &AdminRole::ALL, "AdminRole::ALL")?,
        first_name: names.first.to_string(),
        last_name: names.last.to_string(),
        address: person::address(rng)?,
        password: hasher.hash(password)?,
        profile_picture: None,
        timestamps: Timestamps::now(),
    })
}

/// The master admin followed by `count` random admins.
///
/// Name pairs never repeat within a batch, so usernames and emails are
/// unique. Every password gets its own salt. Profile pictures are left
/// empty for the caller to fill in.
///
/// # Errors
///
/// Returns `GenerateError::NotEnoughNames` if `count` exceeds the distinct
/// name pairs available, or any hashing error.
pub fn generate_admins<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    hasher: &PasswordHasher,
    admin_password: &SecretString,
    master_password: &SecretString,
) -> Result<Vec<Admin>, GenerateError> {
    let pairs = person::distinct_name_pairs(rng, count)?;

    let mut admins = Vec::with_capacity(count + 1);
    admins.push(master_admin(hasher, master_password)?);
    for names in pairs {
        admins.push(random_admin(rng, names, hasher, admin_password)?);
    }
    Ok(admins)
}
