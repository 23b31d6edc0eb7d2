//! In-memory ordering and paging of product listings.
//!
//! The Store API cannot order by calculated price, so listings are fetched in
//! one batch, ordered here, then sliced to the requested page.

use std::cmp::Ordering;

use medusa_storefront_core::{PageNumber, SortOptions};

use crate::medusa::StoreProduct;

/// Order products in place according to `sort`.
///
/// - `created_at`: newest first; products without a timestamp go last
/// - `price_asc` / `price_desc`: by cheapest calculated variant price;
///   unpriced products go last in both directions
///
/// The sort is stable, so ties keep the backend's order.
pub fn sort_products(products: &mut [StoreProduct], sort: SortOptions) {
    match sort {
        SortOptions::CreatedAt => {
            products.sort_by(|a, b| descending_with_none_last(a.created_at, b.created_at));
        }
        SortOptions::PriceAsc => products.sort_by(|a, b| {
            ascending_with_none_last(
                a.cheapest_price().map(|p| p.amount),
                b.cheapest_price().map(|p| p.amount),
            )
        }),
        SortOptions::PriceDesc => products.sort_by(|a, b| {
            descending_with_none_last(
                a.cheapest_price().map(|p| p.amount),
                b.cheapest_price().map(|p| p.amount),
            )
        }),
    }
}

/// Take the slice of `products` shown on `page`.
///
/// A page past the end yields an empty vector.
#[must_use]
pub fn page_of(products: Vec<StoreProduct>, page: PageNumber, per_page: usize) -> Vec<StoreProduct> {
    products
        .into_iter()
        .skip(page.offset(per_page))
        .take(per_page)
        .collect()
}

fn ascending_with_none_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn descending_with_none_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(handle: &str, created_at: Option<&str>, price: Option<&str>) -> StoreProduct {
        let variants = price.map_or_else(Vec::new, |amount| {
            vec![json!({
                "id": format!("variant_{handle}"),
                "calculated_price": {"calculated_amount": amount, "currency_code": "usd"}
            })]
        });
        serde_json::from_value(json!({
            "id": format!("prod_{handle}"),
            "title": handle,
            "handle": handle,
            "created_at": created_at,
            "variants": variants,
        }))
        .unwrap()
    }

    fn handles(products: &[StoreProduct]) -> Vec<&str> {
        products.iter().map(|p| p.handle.as_str()).collect()
    }

    #[test]
    fn test_sort_created_at_newest_first() {
        let mut products = vec![
            product("old", Some("2024-01-01T00:00:00Z"), None),
            product("undated", None, None),
            product("new", Some("2024-06-01T00:00:00Z"), None),
        ];
        sort_products(&mut products, SortOptions::CreatedAt);
        assert_eq!(handles(&products), ["new", "old", "undated"]);
    }

    #[test]
    fn test_sort_price_ascending_unpriced_last() {
        let mut products = vec![
            product("free", None, None),
            product("pricey", None, Some("80")),
            product("cheap", None, Some("12.5")),
        ];
        sort_products(&mut products, SortOptions::PriceAsc);
        assert_eq!(handles(&products), ["cheap", "pricey", "free"]);
    }

    #[test]
    fn test_sort_price_descending_unpriced_last() {
        let mut products = vec![
            product("free", None, None),
            product("cheap", None, Some("12.5")),
            product("pricey", None, Some("80")),
        ];
        sort_products(&mut products, SortOptions::PriceDesc);
        assert_eq!(handles(&products), ["pricey", "cheap", "free"]);
    }

    #[test]
    fn test_page_of_slices_by_offset() {
        let products: Vec<_> = (0..5)
            .map(|i| product(&format!("p{i}"), None, None))
            .collect();

        let second = page_of(products.clone(), PageNumber::new(2).unwrap(), 2);
        assert_eq!(handles(&second), ["p2", "p3"]);

        let last = page_of(products.clone(), PageNumber::new(3).unwrap(), 2);
        assert_eq!(handles(&last), ["p4"]);

        let beyond = page_of(products, PageNumber::new(9).unwrap(), 2);
        assert!(beyond.is_empty());
    }
}
