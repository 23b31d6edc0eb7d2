//! 1-based page numbers for paginated listings.

use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing a page indicator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// The indicator is not a base-10 integer.
    #[error("page is not a number: {0:?}")]
    NotANumber(String),
    /// The indicator parsed but is zero.
    #[error("page must be at least 1")]
    Zero,
}

/// A positive, 1-based page number.
///
/// Construction guarantees the value is never zero, so offset arithmetic
/// cannot underflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Create a page number, returning `None` for zero.
    #[must_use]
    pub const fn new(page: u32) -> Option<Self> {
        match NonZeroU32::new(page) {
            Some(page) => Some(Self(page)),
            None => None,
        }
    }

    /// Resolve an optional page indicator from a query string.
    ///
    /// An absent indicator yields the first page. An indicator that fails to
    /// parse also yields the first page instead of an invalid value.
    #[must_use]
    pub fn from_query(page: Option<&str>) -> Self {
        page.map_or(Self::FIRST, |raw| raw.parse().unwrap_or(Self::FIRST))
    }

    /// Get the page as a `u32`.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Number of items preceding this page.
    #[must_use]
    pub const fn offset(self, per_page: usize) -> usize {
        (self.0.get() as usize - 1).saturating_mul(per_page)
    }

    /// Number of pages needed to show `count` items, never less than one.
    #[must_use]
    pub fn total_pages(count: usize, per_page: usize) -> u32 {
        if per_page == 0 || count == 0 {
            return 1;
        }
        u32::try_from(count.div_ceil(per_page)).unwrap_or(u32::MAX)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl FromStr for PageNumber {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let page = s
            .trim()
            .parse::<u32>()
            .map_err(|_| PageError::NotANumber(s.to_string()))?;
        Self::new(page).ok_or(PageError::Zero)
    }
}

impl std::fmt::Display for PageNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_page_is_first() {
        assert_eq!(PageNumber::from_query(None).get(), 1);
    }

    #[test]
    fn test_numeric_pages_parse() {
        for raw in ["1", "2", "17", "4096"] {
            let page = PageNumber::from_query(Some(raw));
            assert_eq!(page.get(), raw.parse::<u32>().unwrap());
        }
    }

    #[test]
    fn test_unparsable_page_falls_back_to_first() {
        assert_eq!(PageNumber::from_query(Some("abc")), PageNumber::FIRST);
        assert_eq!(PageNumber::from_query(Some("")), PageNumber::FIRST);
        assert_eq!(PageNumber::from_query(Some("-3")), PageNumber::FIRST);
        assert_eq!(PageNumber::from_query(Some("0")), PageNumber::FIRST);
        assert_eq!(PageNumber::from_query(Some("2abc")), PageNumber::FIRST);
    }

    #[test]
    fn test_strict_parse_reports_reason() {
        assert_eq!(
            "abc".parse::<PageNumber>().unwrap_err(),
            PageError::NotANumber("abc".to_string())
        );
        assert_eq!("0".parse::<PageNumber>().unwrap_err(), PageError::Zero);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageNumber::FIRST.offset(12), 0);
        assert_eq!(PageNumber::new(3).unwrap().offset(12), 24);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(PageNumber::total_pages(0, 12), 1);
        assert_eq!(PageNumber::total_pages(12, 12), 1);
        assert_eq!(PageNumber::total_pages(13, 12), 2);
        assert_eq!(PageNumber::total_pages(100, 12), 9);
    }
}
