//! Paginated product query.

use medusa_storefront_core::{CategoryId, CollectionId, CountryCode, PageNumber, SortOptions};

use crate::medusa::types::StoreProduct;

/// Maximum number of products fetched per listing before in-memory sorting.
pub const PRODUCT_BATCH_LIMIT: usize = 100;

/// Fields requested for product listings (calculated prices need a region).
const PRODUCT_FIELDS: &str = "*variants.calculated_price";

/// Everything that scopes a product grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    /// Sort order.
    pub sort: SortOptions,
    /// Requested page.
    pub page: PageNumber,
    /// Active product type filter, forwarded verbatim as `type_id[]`.
    pub product_type: Option<String>,
    /// Restrict to a collection.
    pub collection_id: Option<CollectionId>,
    /// Restrict to a category.
    pub category_id: Option<CategoryId>,
    /// Country whose region prices the products.
    pub country_code: CountryCode,
}

impl ProductQuery {
    /// Query the whole catalog with default sort and first page.
    #[must_use]
    pub fn new(country_code: CountryCode) -> Self {
        Self {
            sort: SortOptions::default(),
            page: PageNumber::FIRST,
            product_type: None,
            collection_id: None,
            category_id: None,
            country_code,
        }
    }

    /// Filter parameters, independent of sort and page.
    ///
    /// Used both as Store API query parameters and as part of the cache key.
    #[must_use]
    pub fn filter_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(collection_id) = &self.collection_id {
            params.push(("collection_id[]", collection_id.to_string()));
        }
        if let Some(category_id) = &self.category_id {
            params.push(("category_id[]", category_id.to_string()));
        }
        if let Some(product_type) = &self.product_type {
            params.push(("type_id[]", product_type.clone()));
        }
        params
    }

    /// Full Store API query parameters for the product batch.
    #[must_use]
    pub fn request_params(&self, region_id: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("limit", PRODUCT_BATCH_LIMIT.to_string()),
            ("offset", "0".to_string()),
            ("region_id", region_id.to_string()),
            ("fields", PRODUCT_FIELDS.to_string()),
        ];
        params.extend(self.filter_params());
        params
    }
}

/// One page of a sorted product listing.
#[derive(Debug, Clone)]
pub struct ProductPage {
    /// Products on this page, already sorted.
    pub products: Vec<StoreProduct>,
    /// The page these products belong to.
    pub page: PageNumber,
    /// Total number of pages (at least one).
    pub total_pages: u32,
}
