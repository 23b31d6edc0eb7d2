//! Integration tests for the Medusa storefront.
//!
//! Each test starts two servers on ephemeral ports: a fake Store API serving
//! fixture data, and the real storefront router pointed at it. Requests go
//! through `reqwest` like a browser's would (redirects are not followed).
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p medusa-storefront-integration-tests
//! ```

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use secrecy::SecretString;
use serde_json::{Value, json};
use url::Url;

use medusa_storefront::config::{MedusaConfig, StorefrontConfig};
use medusa_storefront::state::AppState;
use medusa_storefront_core::CountryCode;

/// Publishable key the fake Store API accepts.
pub const PUBLISHABLE_KEY: &str = "pk_integration_test_4f8a2c9e71d3b6";

/// Store name used in rendered pages.
pub const STORE_NAME: &str = "Fixture Store";

/// Query string of one Store API request: (path, params).
pub type RecordedRequest = (String, Vec<(String, String)>);

#[derive(Clone, Default)]
struct FakeState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeState {
    fn record(&self, path: &str, params: &[(String, String)]) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((path.to_string(), params.to_vec()));
        }
    }
}

fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("x-publishable-api-key")
        .and_then(|v| v.to_str().ok())
        == Some(PUBLISHABLE_KEY)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"type": "not_allowed", "message": "A valid publishable key is required"})),
    )
        .into_response()
}

// =============================================================================
// Fixtures
// =============================================================================

fn regions() -> Value {
    json!([
        {
            "id": "reg_na",
            "name": "North America",
            "currency_code": "usd",
            "countries": [
                {"iso_2": "us", "display_name": "United States"},
                {"iso_2": "ca", "display_name": "Canada"}
            ]
        },
        {
            "id": "reg_eu",
            "name": "Europe",
            "currency_code": "eur",
            "countries": [
                {"iso_2": "dk", "display_name": "Denmark"},
                {"iso_2": "de", "display_name": "Germany"}
            ]
        }
    ])
}

fn collections() -> Value {
    json!([
        {"id": "pcol_summer", "title": "Summer", "handle": "summer"},
        {"id": "pcol_basics", "title": "Basics", "handle": "basics"}
    ])
}

fn categories() -> Value {
    json!([
        {"id": "pcat_shirts", "name": "Shirts", "handle": "shirts"},
        {"id": "pcat_pants", "name": "Pants", "handle": "pants"}
    ])
}

fn product_types() -> Value {
    json!([
        {"id": "ptyp_apparel", "value": "Apparel"},
        {"id": "ptyp_gear", "value": "Gear"}
    ])
}

/// Products with the membership fields the fake filters on.
fn products() -> Vec<Value> {
    let product = |id: &str,
                   title: &str,
                   created_at: &str,
                   cents: i64,
                   collection: &str,
                   category: &str,
                   product_type: &str| {
        json!({
            "id": id,
            "title": title,
            "handle": title.to_lowercase().replace(' ', "-"),
            "thumbnail": format!("https://cdn.example.com/{id}.jpg"),
            "created_at": created_at,
            "collection_id": collection,
            "category_id": category,
            "type_id": product_type,
            "variants": [{
                "id": format!("variant_{id}"),
                "calculated_price": {
                    "calculated_amount": cents / 100,
                    "original_amount": cents / 100,
                    "currency_code": "usd"
                }
            }]
        })
    };

    vec![
        product("prod_linen", "Linen Shirt", "2026-03-01T10:00:00Z", 4500, "pcol_summer", "pcat_shirts", "ptyp_apparel"),
        product("prod_shorts", "Board Shorts", "2026-05-01T10:00:00Z", 3000, "pcol_summer", "pcat_pants", "ptyp_apparel"),
        product("prod_hat", "Sun Hat", "2026-04-01T10:00:00Z", 2000, "pcol_summer", "pcat_shirts", "ptyp_gear"),
        product("prod_tee", "Plain Tee", "2026-01-01T10:00:00Z", 1500, "pcol_basics", "pcat_shirts", "ptyp_apparel"),
    ]
}

fn find_by_handle(list: &Value, handle: Option<&str>) -> Vec<Value> {
    list.as_array()
        .map(|items| {
            items
                .iter()
                .filter(|item| handle.is_none_or(|h| item["handle"] == h))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

// =============================================================================
// Fake Store API
// =============================================================================

async fn store_regions(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    state.record("/store/regions", &params);
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({"regions": regions(), "count": 2})).into_response()
}

async fn store_collections(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    state.record("/store/collections", &params);
    if !authorized(&headers) {
        return unauthorized();
    }
    let found = find_by_handle(&collections(), param(&params, "handle"));
    Json(json!({"collections": found, "count": found.len()})).into_response()
}

async fn store_categories(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    state.record("/store/product-categories", &params);
    if !authorized(&headers) {
        return unauthorized();
    }
    let found = find_by_handle(&categories(), param(&params, "handle"));
    Json(json!({"product_categories": found, "count": found.len()})).into_response()
}

async fn store_product_types(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    state.record("/store/product-types", &params);
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({"product_types": product_types(), "count": 2})).into_response()
}

async fn store_products(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    state.record("/store/products", &params);
    if !authorized(&headers) {
        return unauthorized();
    }
    if param(&params, "region_id").is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "region_id is required for calculated prices"})),
        )
            .into_response();
    }

    let filters = [
        ("collection_id[]", "collection_id"),
        ("category_id[]", "category_id"),
        ("type_id[]", "type_id"),
    ];
    let found: Vec<Value> = products()
        .into_iter()
        .filter(|product| {
            filters.iter().all(|(query_key, field)| {
                param(&params, query_key).is_none_or(|wanted| product[*field] == wanted)
            })
        })
        .collect();

    Json(json!({"products": found, "count": found.len(), "offset": 0, "limit": 100}))
        .into_response()
}

fn fake_store_api(state: FakeState) -> Router {
    Router::new()
        .route("/store/regions", get(store_regions))
        .route("/store/collections", get(store_collections))
        .route("/store/product-categories", get(store_categories))
        .route("/store/product-types", get(store_product_types))
        .route("/store/products", get(store_products))
        .with_state(state)
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .unwrap_or_else(|e| panic!("failed to bind test listener: {e}"));
    let addr = listener
        .local_addr()
        .unwrap_or_else(|e| panic!("failed to read listener address: {e}"));
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    addr
}

// =============================================================================
// Test Context
// =============================================================================

/// Options for [`TestContext::start_with`].
#[derive(Debug, Clone)]
pub struct TestOptions {
    pub products_per_page: usize,
    pub publishable_key: String,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            products_per_page: 12,
            publishable_key: PUBLISHABLE_KEY.to_string(),
        }
    }
}

/// A running storefront wired to a fake Store API.
pub struct TestContext {
    pub client: reqwest::Client,
    pub storefront_url: String,
    fake: FakeState,
}

impl TestContext {
    /// Start with default options.
    pub async fn start() -> Self {
        Self::start_with(TestOptions::default()).await
    }

    /// Start both servers.
    ///
    /// # Panics
    ///
    /// Panics if a listener cannot be bound or the storefront state cannot be
    /// built.
    pub async fn start_with(options: TestOptions) -> Self {
        let fake = FakeState::default();
        let backend_addr = serve(fake_store_api(fake.clone())).await;

        let backend_url = Url::parse(&format!("http://{backend_addr}"))
            .unwrap_or_else(|e| panic!("invalid backend url: {e}"));
        let default_country =
            CountryCode::parse("us").unwrap_or_else(|e| panic!("invalid country: {e}"));

        let config = StorefrontConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            store_name: STORE_NAME.to_string(),
            default_country,
            products_per_page: options.products_per_page,
            medusa: MedusaConfig {
                backend_url,
                publishable_key: SecretString::from(options.publishable_key),
            },
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 0.0,
            sentry_traces_sample_rate: 0.0,
        };

        let state =
            AppState::new(config).unwrap_or_else(|e| panic!("failed to build state: {e}"));
        let storefront_addr = serve(medusa_storefront::app(state)).await;

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap_or_else(|e| panic!("failed to build client: {e}"));

        Self {
            client,
            storefront_url: format!("http://{storefront_addr}"),
            fake,
        }
    }

    /// Absolute storefront URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.storefront_url)
    }

    /// GET a storefront path.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .unwrap_or_else(|e| panic!("GET {path} failed: {e}"))
    }

    /// Store API requests received so far for `path`.
    #[must_use]
    pub fn backend_requests(&self, path: &str) -> Vec<Vec<(String, String)>> {
        self.fake
            .requests
            .lock()
            .map(|requests| {
                requests
                    .iter()
                    .filter(|(p, _)| p == path)
                    .map(|(_, params)| params.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Whether `params` contains `key=value`.
#[must_use]
pub fn has_param(params: &[(String, String)], key: &str, value: &str) -> bool {
    params.iter().any(|(k, v)| k == key && v == value)
}
