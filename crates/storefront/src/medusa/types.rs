//! Store API response types.
//!
//! Field names follow the backend's JSON (snake case). Collections that the
//! backend may return as `null` are `Option<Vec<_>>`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use medusa_storefront_core::{
    CategoryId, CollectionId, CountryCode, CurrencyCode, Handle, Price, ProductId, ProductTypeId,
    RegionId, VariantId,
};

// =============================================================================
// Catalog Types
// =============================================================================

/// A named, slugged grouping of products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreCollection {
    /// Collection ID.
    pub id: CollectionId,
    /// Display title (may be empty).
    #[serde(default)]
    pub title: String,
    /// URL slug.
    pub handle: Handle,
    /// Products, only present when requested with `fields=*products`.
    #[serde(default)]
    pub products: Option<Vec<StoreProduct>>,
}

/// A named, slugged classification of products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreProductCategory {
    /// Category ID.
    pub id: CategoryId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// URL slug.
    pub handle: Handle,
}

/// A product type used as a refinement facet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreProductType {
    /// Product type ID.
    pub id: ProductTypeId,
    /// Display value (e.g., "Shirts").
    pub value: String,
}

// =============================================================================
// Region Types
// =============================================================================

/// A geographic/currency sales context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreRegion {
    /// Region ID.
    pub id: RegionId,
    /// Region name (e.g., "Europe").
    pub name: String,
    /// Lowercase ISO 4217 currency code.
    pub currency_code: String,
    /// Countries sold to in this region.
    #[serde(default)]
    pub countries: Option<Vec<StoreRegionCountry>>,
}

impl StoreRegion {
    /// Countries of this region, treating `null` as none.
    #[must_use]
    pub fn countries(&self) -> &[StoreRegionCountry] {
        self.countries.as_deref().unwrap_or_default()
    }

    /// Whether this region sells to `country`.
    #[must_use]
    pub fn contains(&self, country: &CountryCode) -> bool {
        self.countries()
            .iter()
            .any(|c| c.iso_2.eq_ignore_ascii_case(country.as_str()))
    }
}

/// A country belonging to a region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreRegionCountry {
    /// Lowercase ISO 3166-1 alpha-2 code.
    pub iso_2: String,
    /// Human readable name (e.g., "Denmark").
    #[serde(default)]
    pub display_name: Option<String>,
}

impl StoreRegionCountry {
    /// Label for the country selector, falling back to the uppercase code.
    #[must_use]
    pub fn label(&self) -> String {
        self.display_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.iso_2.to_ascii_uppercase())
    }
}

// =============================================================================
// Product Types
// =============================================================================

/// A product as returned by the product listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreProduct {
    /// Product ID.
    pub id: ProductId,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// URL slug.
    pub handle: Handle,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Variants with region-calculated prices.
    #[serde(default)]
    pub variants: Option<Vec<StoreVariant>>,
}

impl StoreProduct {
    /// The cheapest calculated variant price, if any variant is priced.
    #[must_use]
    pub fn cheapest_price(&self) -> Option<Price> {
        self.variants
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(|variant| variant.calculated_price.as_ref())
            .filter_map(|price| {
                let amount = price.calculated_amount?;
                let currency = price.currency_code.as_deref()?;
                Some(Price::new(amount, CurrencyCode::new(currency)))
            })
            .min_by(|a, b| a.amount.cmp(&b.amount))
    }
}

/// A product variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreVariant {
    /// Variant ID.
    pub id: VariantId,
    /// Price calculated for the requested region.
    #[serde(default)]
    pub calculated_price: Option<StoreCalculatedPrice>,
}

/// Region-specific calculated price of a variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreCalculatedPrice {
    /// Final amount after price lists and promotions.
    #[serde(default)]
    pub calculated_amount: Option<Decimal>,
    /// Lowercase ISO 4217 currency code.
    #[serde(default)]
    pub currency_code: Option<String>,
}
