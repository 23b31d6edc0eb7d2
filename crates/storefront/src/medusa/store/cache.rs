//! Cache types for Store API responses.

use medusa_storefront_core::{Handle, RegionId};

use crate::medusa::types::{
    StoreCollection, StoreProduct, StoreProductCategory, StoreProductType, StoreRegion,
};

/// Cache key for catalog lookups.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Regions,
    Collections,
    Collection(Handle),
    Categories,
    Category(Handle),
    ProductTypes,
    /// Unsorted product batch for a region and filter set.
    Products {
        region_id: RegionId,
        filters: Vec<(&'static str, String)>,
    },
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Regions(Vec<StoreRegion>),
    Collections(Vec<StoreCollection>),
    Collection(Box<StoreCollection>),
    Categories(Vec<StoreProductCategory>),
    Category(Box<StoreProductCategory>),
    ProductTypes(Vec<StoreProductType>),
    Products(Vec<StoreProduct>),
}
