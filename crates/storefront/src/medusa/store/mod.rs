//! Store API client implementation.
//!
//! Uses `reqwest` for HTTP and `url` to build query strings. Caches catalog
//! lookups using `moka` (5-minute TTL).

mod cache;
mod query;

pub use query::{PRODUCT_BATCH_LIMIT, ProductPage, ProductQuery};

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use medusa_storefront_core::{CountryCode, Handle, PageNumber};

use crate::catalog;
use crate::config::MedusaConfig;
use crate::medusa::MedusaError;
use crate::medusa::types::{
    StoreCollection, StoreProduct, StoreProductCategory, StoreProductType, StoreRegion,
};

use cache::{CacheKey, CacheValue};

/// Header carrying the publishable key on every Store API request.
const PUBLISHABLE_KEY_HEADER: &str = "x-publishable-api-key";

/// Page size used for the navigation/facet lists.
const LIST_LIMIT: &str = "100";

// =============================================================================
// Response Envelopes
// =============================================================================

#[derive(Deserialize)]
struct RegionsEnvelope {
    regions: Vec<StoreRegion>,
}

#[derive(Deserialize)]
struct CollectionsEnvelope {
    collections: Vec<StoreCollection>,
}

#[derive(Deserialize)]
struct CategoriesEnvelope {
    product_categories: Vec<StoreProductCategory>,
}

#[derive(Deserialize)]
struct ProductTypesEnvelope {
    product_types: Vec<StoreProductType>,
}

#[derive(Deserialize)]
struct ProductsEnvelope {
    products: Vec<StoreProduct>,
}

// =============================================================================
// MedusaClient
// =============================================================================

/// Client for the commerce backend's Store API.
///
/// Provides typed access to regions, collections, categories, product types
/// and product listings. Everything except health checks is cached for
/// 5 minutes.
#[derive(Clone)]
pub struct MedusaClient {
    inner: Arc<MedusaClientInner>,
}

struct MedusaClientInner {
    client: reqwest::Client,
    base_url: Url,
    publishable_key: SecretString,
    cache: Cache<CacheKey, CacheValue>,
}

impl MedusaClient {
    /// Create a new Store API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &MedusaConfig) -> Result<Self, MedusaError> {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        // Relative joins replace the last path segment unless it ends in '/'
        let mut base_url = config.backend_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            inner: Arc::new(MedusaClientInner {
                client,
                base_url,
                publishable_key: config.publishable_key.clone(),
                cache,
            }),
        })
    }

    /// Build the URL for a Store API route.
    fn url(&self, path: &str, params: &[(&str, String)]) -> Result<Url, MedusaError> {
        let mut url = self.inner.base_url.join(path.trim_start_matches('/'))?;
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// Execute a GET request and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, MedusaError> {
        let url = self.url(path, params)?;

        let response = self
            .inner
            .client
            .get(url)
            .header(
                PUBLISHABLE_KEY_HEADER,
                self.inner.publishable_key.expose_secret(),
            )
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(MedusaError::RateLimited(retry_after));
        }

        // Body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            if status != reqwest::StatusCode::NOT_FOUND {
                tracing::error!(
                    status = %status,
                    path,
                    body = %body.chars().take(500).collect::<String>(),
                    "Store API returned non-success status"
                );
            }
            return Err(MedusaError::from_status(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                path,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse Store API response"
            );
            MedusaError::Parse(e)
        })
    }

    // =========================================================================
    // Region Methods
    // =========================================================================

    /// List all regions.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_regions(&self) -> Result<Vec<StoreRegion>, MedusaError> {
        if let Some(CacheValue::Regions(regions)) = self.inner.cache.get(&CacheKey::Regions).await
        {
            debug!("Cache hit for regions");
            return Ok(regions);
        }

        let envelope: RegionsEnvelope = self
            .get_json("store/regions", &[("limit", LIST_LIMIT.to_string())])
            .await?;

        self.inner
            .cache
            .insert(CacheKey::Regions, CacheValue::Regions(envelope.regions.clone()))
            .await;

        Ok(envelope.regions)
    }

    /// Find the region that sells to `country`.
    ///
    /// Returns `Ok(None)` when no region lists the country.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(country = %country))]
    pub async fn region_for_country(
        &self,
        country: &CountryCode,
    ) -> Result<Option<StoreRegion>, MedusaError> {
        let regions = self.list_regions().await?;
        Ok(regions.into_iter().find(|region| region.contains(country)))
    }

    // =========================================================================
    // Collection Methods
    // =========================================================================

    /// List collections for navigation.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_collections(&self) -> Result<Vec<StoreCollection>, MedusaError> {
        if let Some(CacheValue::Collections(collections)) =
            self.inner.cache.get(&CacheKey::Collections).await
        {
            debug!("Cache hit for collections");
            return Ok(collections);
        }

        let envelope: CollectionsEnvelope = self
            .get_json(
                "store/collections",
                &[
                    ("limit", LIST_LIMIT.to_string()),
                    ("fields", "id,title,handle".to_string()),
                ],
            )
            .await?;

        self.inner
            .cache
            .insert(
                CacheKey::Collections,
                CacheValue::Collections(envelope.collections.clone()),
            )
            .await;

        Ok(envelope.collections)
    }

    /// Get a collection by its handle, including its products.
    ///
    /// # Errors
    ///
    /// Returns `MedusaError::NotFound` if no collection has this handle, or an
    /// error if the API request fails.
    #[instrument(skip(self), fields(handle = %handle))]
    pub async fn get_collection_by_handle(
        &self,
        handle: &Handle,
    ) -> Result<StoreCollection, MedusaError> {
        let key = CacheKey::Collection(handle.clone());
        if let Some(CacheValue::Collection(collection)) = self.inner.cache.get(&key).await {
            debug!("Cache hit for collection");
            return Ok(*collection);
        }

        let envelope: CollectionsEnvelope = self
            .get_json(
                "store/collections",
                &[
                    ("handle", handle.to_string()),
                    ("fields", "*products".to_string()),
                ],
            )
            .await?;

        let collection = envelope
            .collections
            .into_iter()
            .next()
            .ok_or_else(|| MedusaError::NotFound(format!("Collection not found: {handle}")))?;

        self.inner
            .cache
            .insert(key, CacheValue::Collection(Box::new(collection.clone())))
            .await;

        Ok(collection)
    }

    // =========================================================================
    // Category Methods
    // =========================================================================

    /// List product categories for navigation and refinement.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<StoreProductCategory>, MedusaError> {
        if let Some(CacheValue::Categories(categories)) =
            self.inner.cache.get(&CacheKey::Categories).await
        {
            debug!("Cache hit for categories");
            return Ok(categories);
        }

        let envelope: CategoriesEnvelope = self
            .get_json(
                "store/product-categories",
                &[
                    ("limit", LIST_LIMIT.to_string()),
                    ("fields", "id,name,handle".to_string()),
                ],
            )
            .await?;

        self.inner
            .cache
            .insert(
                CacheKey::Categories,
                CacheValue::Categories(envelope.product_categories.clone()),
            )
            .await;

        Ok(envelope.product_categories)
    }

    /// Get a category by its handle.
    ///
    /// # Errors
    ///
    /// Returns `MedusaError::NotFound` if no category has this handle, or an
    /// error if the API request fails.
    #[instrument(skip(self), fields(handle = %handle))]
    pub async fn get_category_by_handle(
        &self,
        handle: &Handle,
    ) -> Result<StoreProductCategory, MedusaError> {
        let key = CacheKey::Category(handle.clone());
        if let Some(CacheValue::Category(category)) = self.inner.cache.get(&key).await {
            debug!("Cache hit for category");
            return Ok(*category);
        }

        let envelope: CategoriesEnvelope = self
            .get_json(
                "store/product-categories",
                &[("handle", handle.to_string())],
            )
            .await?;

        let category = envelope
            .product_categories
            .into_iter()
            .next()
            .ok_or_else(|| MedusaError::NotFound(format!("Category not found: {handle}")))?;

        self.inner
            .cache
            .insert(key, CacheValue::Category(Box::new(category.clone())))
            .await;

        Ok(category)
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// List product types for the refinement sidebar.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_product_types(&self) -> Result<Vec<StoreProductType>, MedusaError> {
        if let Some(CacheValue::ProductTypes(types)) =
            self.inner.cache.get(&CacheKey::ProductTypes).await
        {
            debug!("Cache hit for product types");
            return Ok(types);
        }

        let envelope: ProductTypesEnvelope = self
            .get_json("store/product-types", &[("limit", LIST_LIMIT.to_string())])
            .await?;

        self.inner
            .cache
            .insert(
                CacheKey::ProductTypes,
                CacheValue::ProductTypes(envelope.product_types.clone()),
            )
            .await;

        Ok(envelope.product_types)
    }

    /// Get one sorted page of products.
    ///
    /// Fetches up to [`PRODUCT_BATCH_LIMIT`] products priced for the query's
    /// country, orders them in memory, then slices the requested page.
    ///
    /// # Errors
    ///
    /// Returns `MedusaError::NotFound` if no region sells to the query's
    /// country, or an error if the API request fails.
    #[instrument(skip(self), fields(
        sort = %query.sort,
        page = %query.page,
        country = %query.country_code,
    ))]
    pub async fn list_products_with_sort(
        &self,
        query: &ProductQuery,
        per_page: usize,
    ) -> Result<ProductPage, MedusaError> {
        let region = self
            .region_for_country(&query.country_code)
            .await?
            .ok_or_else(|| {
                MedusaError::NotFound(format!("No region for country {}", query.country_code))
            })?;

        let key = CacheKey::Products {
            region_id: region.id.clone(),
            filters: query.filter_params(),
        };

        let mut products = match self.inner.cache.get(&key).await {
            Some(CacheValue::Products(products)) => {
                debug!("Cache hit for products");
                products
            }
            _ => {
                let envelope: ProductsEnvelope = self
                    .get_json("store/products", &query.request_params(region.id.as_str()))
                    .await?;
                self.inner
                    .cache
                    .insert(key, CacheValue::Products(envelope.products.clone()))
                    .await;

                envelope.products
            }
        };

        catalog::sort_products(&mut products, query.sort);

        // Only the fetched batch can be paged through
        let total_pages = PageNumber::total_pages(products.len(), per_page);

        Ok(ProductPage {
            products: catalog::page_of(products, query.page, per_page),
            page: query.page,
            total_pages,
        })
    }

    // =========================================================================
    // Health
    // =========================================================================

    /// Check that the backend answers Store API requests (uncached).
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or rejects the key.
    pub async fn health_check(&self) -> Result<(), MedusaError> {
        let _: RegionsEnvelope = self
            .get_json("store/regions", &[("limit", "1".to_string())])
            .await?;
        Ok(())
    }
}
