//! Resolved product grid.

use medusa_storefront_core::CountryCode;

use crate::components::pagination::Pagination;
use crate::listing::ListingParams;
use crate::medusa::{ProductPage, StoreProduct};

/// A product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPreview {
    pub title: String,
    /// Localized product path.
    pub href: String,
    pub thumbnail: Option<String>,
    /// Cheapest variant price, formatted for display.
    pub price: Option<String>,
}

impl ProductPreview {
    /// Build a card for `product` priced in the visitor's region.
    #[must_use]
    pub fn new(product: &StoreProduct, country_code: &CountryCode) -> Self {
        Self {
            title: product.title.clone(),
            href: country_code.localize(&format!("/products/{}", product.handle)),
            thumbnail: product.thumbnail.clone().filter(|url| !url.is_empty()),
            price: product.cheapest_price().map(|price| price.display()),
        }
    }
}

/// Render model for one page of products.
#[derive(Debug, Clone)]
pub struct ProductGrid {
    pub products: Vec<ProductPreview>,
    pub pagination: Option<Pagination>,
}

impl ProductGrid {
    /// Build the grid for `page`; pagination links point at `base_path`.
    #[must_use]
    pub fn new(
        page: &ProductPage,
        params: &ListingParams,
        base_path: &str,
        country_code: &CountryCode,
    ) -> Self {
        Self {
            products: page
                .products
                .iter()
                .map(|product| ProductPreview::new(product, country_code))
                .collect(),
            pagination: Pagination::new(page.total_pages, params, base_path),
        }
    }

    /// Whether the page has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use medusa_storefront_core::PageNumber;
    use serde_json::json;

    fn product(handle: &str, cents: Option<i64>) -> StoreProduct {
        let variants = cents.map_or_else(Vec::new, |cents| {
            vec![json!({
                "id": "variant_1",
                "calculated_price": {
                    "calculated_amount": rust_decimal::Decimal::new(cents, 2),
                    "currency_code": "usd",
                }
            })]
        });
        serde_json::from_value(json!({
            "id": format!("prod_{handle}"),
            "title": handle.to_uppercase(),
            "handle": handle,
            "thumbnail": "",
            "variants": variants,
        }))
        .unwrap()
    }

    #[test]
    fn test_preview_fields() {
        let us = CountryCode::parse("us").unwrap();
        let preview = ProductPreview::new(&product("tee", Some(1500)), &us);
        assert_eq!(preview.title, "TEE");
        assert_eq!(preview.href, "/us/products/tee");
        assert_eq!(preview.thumbnail, None);
        assert_eq!(preview.price.as_deref(), Some("$15.00"));

        let unpriced = ProductPreview::new(&product("cap", None), &us);
        assert_eq!(unpriced.price, None);
    }

    #[test]
    fn test_grid_pagination_only_when_needed() {
        let us = CountryCode::parse("us").unwrap();
        let params = ListingParams::default();
        let mut page = ProductPage {
            products: vec![product("tee", Some(1500))],
            page: PageNumber::FIRST,
            total_pages: 1,
        };

        let grid = ProductGrid::new(&page, &params, "/us/store", &us);
        assert_eq!(grid.products.len(), 1);
        assert!(grid.pagination.is_none());

        page.total_pages = 2;
        let grid = ProductGrid::new(&page, &params, "/us/store", &us);
        assert_eq!(grid.pagination.unwrap().items.len(), 2);
    }
}
