//! Malaysian mobile phone numbers.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when building a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneNumberError {
    /// The number does not start with the `+60` country code.
    #[error("phone number must start with +60")]
    CountryCode,
    /// The mobile prefix is not one of `010`..=`019`.
    #[error("mobile prefix must be between 010 and 019")]
    Prefix,
    /// The subscriber part is not exactly seven digits.
    #[error("subscriber number must be exactly {expected} digits")]
    SubscriberDigits {
        /// Required digit count.
        expected: usize,
    },
}

/// A Malaysian mobile number in the form `+60` + `01X` + seven digits.
///
/// ```
/// use dashboard_seed_core::PhoneNumber;
///
/// let phone = PhoneNumber::from_parts(2, 1_234_567).unwrap();
/// assert_eq!(phone.as_str(), "+600121234567");
/// assert!(PhoneNumber::parse("+600201234567").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Country calling code for Malaysia.
    pub const COUNTRY_CODE: &'static str = "+60";
    /// Mobile prefixes handed out to operators.
    pub const PREFIXES: [&'static str; 10] = [
        "010", "011", "012", "013", "014", "015", "016", "017", "018", "019",
    ];
    /// Digits after the prefix.
    pub const SUBSCRIBER_DIGITS: usize = 7;

    const SUBSCRIBER_LIMIT: u32 = 10_000_000;

    /// Build a number from the operator digit (`0..=9`, giving `010`..`019`)
    /// and a subscriber number below 10,000,000 (zero-padded to seven digits).
    ///
    /// # Errors
    ///
    /// Returns an error if either part is out of range.
    pub fn from_parts(operator: u8, subscriber: u32) -> Result<Self, PhoneNumberError> {
        let prefix = Self::PREFIXES
            .get(usize::from(operator))
            .ok_or(PhoneNumberError::Prefix)?;
        if subscriber >= Self::SUBSCRIBER_LIMIT {
            return Err(PhoneNumberError::SubscriberDigits {
                expected: Self::SUBSCRIBER_DIGITS,
            });
        }
        Ok(Self(format!("{}{prefix}{subscriber:07}", Self::COUNTRY_CODE)))
    }

    /// Parse and validate a number.
    ///
    /// # Errors
    ///
    /// Returns an error if the country code, prefix or subscriber digits are
    /// wrong.
    pub fn parse(s: &str) -> Result<Self, PhoneNumberError> {
        let rest = s
            .strip_prefix(Self::COUNTRY_CODE)
            .ok_or(PhoneNumberError::CountryCode)?;

        let prefix = rest.get(..3).ok_or(PhoneNumberError::Prefix)?;
        if !Self::PREFIXES.contains(&prefix) {
            return Err(PhoneNumberError::Prefix);
        }

        let subscriber = rest.get(3..).unwrap_or_default();
        if subscriber.len() != Self::SUBSCRIBER_DIGITS
            || !subscriber.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(PhoneNumberError::SubscriberDigits {
                expected: Self::SUBSCRIBER_DIGITS,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_pads_subscriber() {
        let phone = PhoneNumber::from_parts(0, 42).unwrap();
        assert_eq!(phone.as_str(), "+600100000042");
    }

    #[test]
    fn test_from_parts_bounds() {
        assert!(PhoneNumber::from_parts(9, 9_999_999).is_ok());
        assert_eq!(
            PhoneNumber::from_parts(10, 0),
            Err(PhoneNumberError::Prefix)
        );
        assert!(matches!(
            PhoneNumber::from_parts(1, 10_000_000),
            Err(PhoneNumberError::SubscriberDigits { expected: 7 })
        ));
    }

    #[test]
    fn test_parse_roundtrips_generated_numbers() {
        for operator in 0..10 {
            let phone = PhoneNumber::from_parts(operator, 7_654_321).unwrap();
            assert_eq!(PhoneNumber::parse(phone.as_str()).unwrap(), phone);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            PhoneNumber::parse("0121234567"),
            Err(PhoneNumberError::CountryCode)
        );
        assert_eq!(
            PhoneNumber::parse("+600201234567"),
            Err(PhoneNumberError::Prefix)
        );
        assert_eq!(PhoneNumber::parse("+60"), Err(PhoneNumberError::Prefix));
        assert!(matches!(
            PhoneNumber::parse("+60012123456"),
            Err(PhoneNumberError::SubscriberDigits { .. })
        ));
        assert!(matches!(
            PhoneNumber::parse("+60012123456x"),
            Err(PhoneNumberError::SubscriberDigits { .. })
        ));
    }
}
