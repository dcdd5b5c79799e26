//! Names, phone numbers and postal addresses.

use dashboard_seed_core::{Email, PhoneNumber};
use rand::Rng;
use rand::seq::index;

use super::{GenerateError, pick};
use crate::reference::{FIRST_NAMES, LAST_NAMES, STATES_AND_DISTRICTS, STREET_NAMES, STREET_TYPES};

/// Domain every generated admin email uses.
pub const EMAIL_DOMAIN: &str = "gmail.com";

/// A given name and family name from the reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamePair {
    pub first: &'static str,
    pub last: &'static str,
}

impl NamePair {
    /// Number of distinct pairs the reference tables can produce.
    #[must_use]
    pub const fn available() -> usize {
        FIRST_NAMES.len() * LAST_NAMES.len()
    }

    /// `"First Last"`
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    /// `first_last`, lowercased.
    #[must_use]
    pub fn username(&self) -> String {
        format!("{}_{}", self.first, self.last).to_lowercase()
    }

    /// `first.last@gmail.com`, lowercased.
    ///
    /// # Errors
    ///
    /// Returns an error if the names don't form a valid address.
    pub fn email(&self) -> Result<Email, GenerateError> {
        Ok(Email::from_name_pair(self.first, self.last, EMAIL_DOMAIN)?)
    }
}

/// Draw a name pair, each half independently.
///
/// # Errors
///
/// Returns `GenerateError::EmptyTable` if a name table is empty.
pub fn name_pair<R: Rng + ?Sized>(rng: &mut R) -> Result<NamePair, GenerateError> {
    Ok(NamePair {
        first: *pick(rng, FIRST_NAMES, "FIRST_NAMES")?,
        last: *pick(rng, LAST_NAMES, "LAST_NAMES")?,
    })
}

/// Draw `count` pairwise-distinct name pairs.
///
/// # Errors
///
/// Returns `GenerateError::NotEnoughNames` if `count` exceeds
/// [`NamePair::available`].
pub fn distinct_name_pairs<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<NamePair>, GenerateError> {
    let available = NamePair::available();
    if count > available {
        return Err(GenerateError::NotEnoughNames {
            requested: count,
            available,
        });
    }

    let pairs = index::sample(rng, available, count)
        .into_iter()
        .filter_map(|i| {
            Some(NamePair {
                first: *FIRST_NAMES.get(i / LAST_NAMES.len())?,
                last: *LAST_NAMES.get(i % LAST_NAMES.len())?,
            })
        })
        .collect();
    Ok(pairs)
}

/// A random `"First Last"` customer name.
///
/// # Errors
///
/// Returns `GenerateError::EmptyTable` if a name table is empty.
pub fn customer_name<R: Rng + ?Sized>(rng: &mut R) -> Result<String, GenerateError> {
    Ok(name_pair(rng)?.display_name())
}

/// A random Malaysian mobile number, `+60` then `010`-`019` then 7 digits.
///
/// # Errors
///
/// Never fails for in-range draws; the error type comes from validation.
pub fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> Result<PhoneNumber, GenerateError> {
    let operator = rng.random_range(0..10u8);
    let subscriber = rng.random_range(0..10_000_000u32);
    Ok(PhoneNumber::from_parts(operator, subscriber)?)
}

/// A random address: `"<1-999> <street>[ <type>], <district>, <state>, <postcode>"`.
///
/// An empty street type adds no trailing space.
///
/// # Errors
///
/// Returns `GenerateError::EmptyTable` if a reference table is empty.
pub fn address<R: Rng + ?Sized>(rng: &mut R) -> Result<String, GenerateError> {
    let (state, districts) = pick(rng, STATES_AND_DISTRICTS, "STATES_AND_DISTRICTS")?;
    let district = pick(rng, districts, "districts")?;
    let number = rng.random_range(1..=999u32);
    let street = pick(rng, STREET_NAMES, "STREET_NAMES")?;
    let street_type = pick(rng, STREET_TYPES, "STREET_TYPES")?;
    let postcode = rng.random_range(10_000..=99_999u32);

    let street = if street_type.is_empty() {
        (*street).to_string()
    } else {
        format!("{street} {street_type}")
    };
    Ok(format!("{number} {street}, {district}, {state}, {postcode}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_name_pair_derivations() {
        let pair = NamePair {
            first: "Nur",
            last: "Abdullah",
        };
        assert_eq!(pair.display_name(), "Nur Abdullah");
        assert_eq!(pair.username(), "nur_abdullah");
        assert_eq!(pair.email().unwrap().as_str(), "nur.abdullah@gmail.com");
    }

    #[test]
    fn test_distinct_name_pairs() {
        let mut rng = rng();
        let pairs = distinct_name_pairs(&mut rng, 500).unwrap();
        assert_eq!(pairs.len(), 500);
        assert_eq!(pairs.iter().collect::<HashSet<_>>().len(), 500);

        let all = distinct_name_pairs(&mut rng, NamePair::available()).unwrap();
        assert_eq!(all.iter().collect::<HashSet<_>>().len(), NamePair::available());
    }

    #[test]
    fn test_distinct_name_pairs_exhausted() {
        let requested = NamePair::available() + 1;
        assert!(matches!(
            distinct_name_pairs(&mut rng(), requested),
            Err(GenerateError::NotEnoughNames { available: 2065, .. })
        ));
    }

    #[test]
    fn test_phone_numbers_match_pattern() {
        let mut rng = rng();
        for _ in 0..500 {
            let phone = phone_number(&mut rng).unwrap();
            let digits = phone.as_str().strip_prefix("+6001").unwrap();
            assert_eq!(digits.len(), 8, "{phone}");
            assert!(digits.chars().all(|c| c.is_ascii_digit()), "{phone}");
        }
    }

    #[test]
    fn test_address_shape() {
        let mut rng = rng();
        for _ in 0..500 {
            let address = address(&mut rng).unwrap();
            let parts: Vec<&str> = address.split(", ").collect();
            assert_eq!(parts.len(), 4, "{address}");

            let (number, street) = parts[0].split_once(' ').unwrap();
            let number: u32 = number.parse().unwrap();
            assert!((1..=999).contains(&number));
            assert!(!street.ends_with(' '), "{address}");

            let (state, districts) = STATES_AND_DISTRICTS
                .iter()
                .find(|(state, _)| *state == parts[2])
                .unwrap();
            assert_eq!(*state, parts[2]);
            assert!(districts.contains(&parts[1]));

            let postcode: u32 = parts[3].parse().unwrap();
            assert!((10_000..=99_999).contains(&postcode));
        }
    }
}
