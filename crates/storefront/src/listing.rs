//! Query parameters shared by every product listing page.
//!
//! Listing URLs look like `/us/collections/summer?sortBy=price_asc&page=2&type=ptyp_1`.
//! Parsing is lenient: a missing or malformed value falls back to its default
//! rather than failing the request.

use medusa_storefront_core::{PageNumber, SortOptions};
use serde::Deserialize;

/// Raw listing query string, as sent by the browser.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<String>,
}

/// Resolved listing parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingParams {
    /// Effective sort order (default `created_at`).
    pub sort: SortOptions,
    /// Effective page (default 1).
    pub page: PageNumber,
    /// Active product type filter.
    pub product_type: Option<String>,
}

impl ListingParams {
    /// Resolve raw query values.
    #[must_use]
    pub fn resolve(query: &ListingQuery) -> Self {
        let sort = query.sort_by.as_deref().and_then(|raw| {
            raw.parse::<SortOptions>()
                .inspect_err(|e| tracing::debug!(error = %e, "Ignoring sort option"))
                .ok()
        });

        if let Some(raw) = query.page.as_deref()
            && let Err(e) = raw.parse::<PageNumber>()
        {
            tracing::debug!(error = %e, "Falling back to first page");
        }

        Self {
            sort: SortOptions::resolve(sort),
            page: PageNumber::from_query(query.page.as_deref()),
            product_type: query
                .product_type
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from),
        }
    }

    /// Same filters with a different sort, back on the first page.
    #[must_use]
    pub fn with_sort(&self, sort: SortOptions) -> Self {
        Self {
            sort,
            page: PageNumber::FIRST,
            product_type: self.product_type.clone(),
        }
    }

    /// Same filters on another page.
    #[must_use]
    pub fn with_page(&self, page: PageNumber) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Same sort with a different type filter, back on the first page.
    #[must_use]
    pub fn with_type(&self, product_type: Option<String>) -> Self {
        Self {
            sort: self.sort,
            page: PageNumber::FIRST,
            product_type,
        }
    }

    /// Encoded query string without the leading `?`.
    ///
    /// `sortBy` is always present; `page` only past the first page; `type`
    /// only when filtering.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut query = format!("sortBy={}", self.sort);
        if self.page != PageNumber::FIRST {
            query.push_str(&format!("&page={}", self.page));
        }
        if let Some(product_type) = &self.product_type {
            query.push_str(&format!("&type={}", urlencoding::encode(product_type)));
        }
        query
    }

    /// Link to `base_path` with these parameters.
    #[must_use]
    pub fn href(&self, base_path: &str) -> String {
        format!("{base_path}?{}", self.query_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn query(sort_by: Option<&str>, page: Option<&str>, product_type: Option<&str>) -> ListingQuery {
        ListingQuery {
            sort_by: sort_by.map(String::from),
            page: page.map(String::from),
            product_type: product_type.map(String::from),
        }
    }

    #[test]
    fn test_defaults() {
        let params = ListingParams::resolve(&ListingQuery::default());
        assert_eq!(params.sort, SortOptions::CreatedAt);
        assert_eq!(params.page, PageNumber::FIRST);
        assert_eq!(params.product_type, None);
    }

    #[test]
    fn test_resolves_values() {
        let params = ListingParams::resolve(&query(Some("price_desc"), Some("3"), Some("ptyp_1")));
        assert_eq!(params.sort, SortOptions::PriceDesc);
        assert_eq!(params.page.get(), 3);
        assert_eq!(params.product_type.as_deref(), Some("ptyp_1"));
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let params = ListingParams::resolve(&query(Some("popular"), Some("abc"), Some("  ")));
        assert_eq!(params, ListingParams::default());
    }

    #[test]
    fn test_href() {
        let params = ListingParams::resolve(&query(Some("price_asc"), Some("2"), Some("a b")));
        assert_eq!(
            params.href("/us/store"),
            "/us/store?sortBy=price_asc&page=2&type=a%20b"
        );
        assert_eq!(
            params.with_sort(SortOptions::CreatedAt).href("/us/store"),
            "/us/store?sortBy=created_at&type=a%20b"
        );
        assert_eq!(
            params.with_type(None).href("/us/store"),
            "/us/store?sortBy=price_asc"
        );
        assert_eq!(
            params.with_page(PageNumber::new(5).unwrap()).query_string(),
            "sortBy=price_asc&page=5&type=a%20b"
        );
    }
}
