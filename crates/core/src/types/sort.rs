//! Product sort orders supported by the catalog pages.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sort key for product listings.
///
/// The default is [`SortOptions::CreatedAt`] (newest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOptions {
    /// Newest products first.
    #[default]
    CreatedAt,
    /// Cheapest variant price, ascending.
    PriceAsc,
    /// Cheapest variant price, descending.
    PriceDesc,
}

/// Error returned when a sort key is not one of the supported values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort option: {0}")]
pub struct UnknownSortOption(pub String);

impl SortOptions {
    /// Every supported sort order, in display order.
    pub const ALL: [Self; 3] = [Self::CreatedAt, Self::PriceAsc, Self::PriceDesc];

    /// Query-string value for this sort order.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
        }
    }

    /// Human readable label for the refinement sidebar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CreatedAt => "Latest Arrivals",
            Self::PriceAsc => "Price: Low -> High",
            Self::PriceDesc => "Price: High -> Low",
        }
    }

    /// Resolve an optional requested sort order, falling back to the default.
    #[must_use]
    pub fn resolve(requested: Option<Self>) -> Self {
        requested.unwrap_or_default()
    }
}

impl FromStr for SortOptions {
    type Err = UnknownSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| UnknownSortOption(s.to_string()))
    }
}

impl std::fmt::Display for SortOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
