//! ISO 3166-1 alpha-2 country codes used as the storefront's URL prefix.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a country code is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountryCodeError {
    #[error("country code must be two letters (got {0:?})")]
    Malformed(String),
}

/// A two-letter country code, normalised to lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Parse a country code, accepting either case.
    ///
    /// # Errors
    ///
    /// Returns `CountryCodeError::Malformed` unless the input is exactly two
    /// ASCII letters.
    pub fn parse(code: &str) -> Result<Self, CountryCodeError> {
        let valid = code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic());
        if valid {
            Ok(Self(code.to_ascii_lowercase()))
        } else {
            Err(CountryCodeError::Malformed(code.to_string()))
        }
    }

    /// Get the lowercase code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix a storefront path with this country code.
    ///
    /// `/` maps to `/{code}`; every other path to `/{code}{path}`.
    #[must_use]
    pub fn localize(&self, path: &str) -> String {
        match path {
            "" | "/" => format!("/{}", self.0),
            p if p.starts_with('/') => format!("/{}{p}", self.0),
            p => format!("/{}/{p}", self.0),
        }
    }
}

impl FromStr for CountryCode {
    type Err = CountryCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = CountryCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalises_case() {
        assert_eq!(CountryCode::parse("US").unwrap().as_str(), "us");
        assert_eq!(CountryCode::parse("dk").unwrap().as_str(), "dk");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in ["", "u", "usa", "u1", "ü"] {
            assert!(CountryCode::parse(raw).is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn test_localize() {
        let us = CountryCode::parse("us").unwrap();
        assert_eq!(us.localize("/"), "/us");
        assert_eq!(us.localize("/store"), "/us/store");
        assert_eq!(us.localize("/collections/new"), "/us/collections/new");
    }

    #[test]
    fn test_serde_validates() {
        let code: CountryCode = serde_json::from_str("\"GB\"").unwrap();
        assert_eq!(code.as_str(), "gb");
        assert!(serde_json::from_str::<CountryCode>("\"gbr\"").is_err());
    }
}
