//! Refinement sidebar: sort order, product type filter and category links.
//!
//! Every option is a plain link. Changing the sort or the type filter resets
//! the listing to its first page.

use medusa_storefront_core::{CountryCode, Handle, SortOptions};

use crate::listing::ListingParams;
use crate::medusa::{StoreProductCategory, StoreProductType};

/// A selectable facet value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    /// Backend ID, used as the filter value.
    pub id: String,
    /// Display text.
    pub label: String,
    /// Slug, for facets that have their own page.
    pub handle: Option<Handle>,
}

/// Facet inputs of a listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetData {
    pub categories: Vec<FacetOption>,
    pub types: Vec<FacetOption>,
    /// Active product type filter, forwarded to the product query.
    pub product_type: Option<String>,
}

impl FacetData {
    /// Build facets from catalog lists. Absent lists yield no options.
    #[must_use]
    pub fn from_catalog(
        categories: Option<&[StoreProductCategory]>,
        types: Option<&[StoreProductType]>,
        product_type: Option<String>,
    ) -> Self {
        Self {
            categories: categories
                .unwrap_or_default()
                .iter()
                .map(|category| FacetOption {
                    id: category.id.to_string(),
                    label: category.name.clone(),
                    handle: Some(category.handle.clone()),
                })
                .collect(),
            types: types
                .unwrap_or_default()
                .iter()
                .map(|product_type| FacetOption {
                    id: product_type.id.to_string(),
                    label: product_type.value.clone(),
                    handle: None,
                })
                .collect(),
            product_type,
        }
    }
}

/// A sidebar link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinementLink {
    pub label: String,
    pub href: String,
    /// Whether this option is currently applied.
    pub active: bool,
    /// `data-testid` value.
    pub test_id: String,
}

/// Render model for the refinement sidebar.
#[derive(Debug, Clone)]
pub struct RefinementList {
    /// One link per sort option.
    pub sort_options: Vec<RefinementLink>,
    /// "All" followed by one link per type; empty when there are no types.
    pub types: Vec<RefinementLink>,
    /// One link per category; empty when there are no categories.
    pub categories: Vec<RefinementLink>,
}

impl RefinementList {
    /// Build the sidebar for a listing at `base_path`.
    ///
    /// `active_category` marks the category whose page is being shown.
    #[must_use]
    pub fn new(
        facets: &FacetData,
        params: &ListingParams,
        base_path: &str,
        country_code: &CountryCode,
        active_category: Option<&Handle>,
    ) -> Self {
        let sort_options = SortOptions::ALL
            .iter()
            .map(|&sort| RefinementLink {
                label: sort.label().to_string(),
                href: params.with_sort(sort).href(base_path),
                active: sort == params.sort,
                test_id: format!("sort-by-{sort}"),
            })
            .collect();

        let types = if facets.types.is_empty() {
            Vec::new()
        } else {
            std::iter::once(RefinementLink {
                label: "All".to_string(),
                href: params.with_type(None).href(base_path),
                active: facets.product_type.is_none(),
                test_id: "type-all-link".to_string(),
            })
            .chain(facets.types.iter().map(|option| RefinementLink {
                label: option.label.clone(),
                href: params.with_type(Some(option.id.clone())).href(base_path),
                active: facets.product_type.as_deref() == Some(option.id.as_str()),
                test_id: format!("type-{}-link", option.id),
            }))
            .collect()
        };

        let categories = facets
            .categories
            .iter()
            .filter_map(|option| {
                let handle = option.handle.as_ref()?;
                Some(RefinementLink {
                    label: option.label.clone(),
                    href: country_code.localize(&handle.category_path()),
                    active: active_category == Some(handle),
                    test_id: format!("category-{handle}-filter"),
                })
            })
            .collect();

        Self {
            sort_options,
            types,
            categories,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn us() -> CountryCode {
        CountryCode::parse("us").unwrap()
    }

    fn facets(product_type: Option<&str>) -> FacetData {
        let categories: Vec<StoreProductCategory> = serde_json::from_value(json!([
            {"id": "pcat_1", "name": "Shirts", "handle": "shirts"}
        ]))
        .unwrap();
        let types: Vec<StoreProductType> = serde_json::from_value(json!([
            {"id": "ptyp_1", "value": "Apparel"}
        ]))
        .unwrap();
        FacetData::from_catalog(
            Some(&categories),
            Some(&types),
            product_type.map(String::from),
        )
    }

    #[test]
    fn test_sort_links_mark_active_and_reset_page() {
        let params = ListingParams {
            sort: SortOptions::PriceDesc,
            page: medusa_storefront_core::PageNumber::new(3).unwrap(),
            product_type: None,
        };
        let list = RefinementList::new(&facets(None), &params, "/us/store", &us(), None);

        let labels: Vec<_> = list.sort_options.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Latest Arrivals", "Price: Low -> High", "Price: High -> Low"]
        );
        let active: Vec<_> = list.sort_options.iter().filter(|l| l.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].href, "/us/store?sortBy=price_desc");
    }

    #[test]
    fn test_type_links() {
        let params = ListingParams {
            product_type: Some("ptyp_1".to_string()),
            ..ListingParams::default()
        };
        let list = RefinementList::new(&facets(Some("ptyp_1")), &params, "/us/store", &us(), None);

        assert_eq!(list.types.len(), 2);
        assert!(!list.types[0].active);
        assert_eq!(list.types[0].href, "/us/store?sortBy=created_at");
        assert!(list.types[1].active);
        assert_eq!(list.types[1].href, "/us/store?sortBy=created_at&type=ptyp_1");
    }

    #[test]
    fn test_category_links() {
        let shirts = Handle::new("shirts");
        let list = RefinementList::new(
            &facets(None),
            &ListingParams::default(),
            "/us/categories/shirts",
            &us(),
            Some(&shirts),
        );
        assert_eq!(list.categories[0].href, "/us/categories/shirts");
        assert!(list.categories[0].active);
        assert_eq!(list.categories[0].test_id, "category-shirts-filter");
    }

    #[test]
    fn test_empty_facets_suppress_sections() {
        let list = RefinementList::new(
            &FacetData::default(),
            &ListingParams::default(),
            "/us/store",
            &us(),
            None,
        );
        assert_eq!(list.sort_options.len(), 3);
        assert!(list.types.is_empty());
        assert!(list.categories.is_empty());
    }
}
