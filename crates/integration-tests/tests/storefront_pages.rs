//! End-to-end tests for listing pages, grids and redirects.

#![allow(clippy::unwrap_used)]

use medusa_storefront_integration_tests::{TestContext, TestOptions, has_param};

fn location(response: &reqwest::Response) -> &str {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// Product titles in the order they appear in `html`.
fn titles_in_order(html: &str, titles: &[&str]) -> Vec<String> {
    let mut found: Vec<(usize, String)> = titles
        .iter()
        .filter_map(|title| html.find(title).map(|pos| (pos, (*title).to_string())))
        .collect();
    found.sort();
    found.into_iter().map(|(_, title)| title).collect()
}

#[tokio::test]
async fn test_health_endpoints() {
    let ctx = TestContext::start().await;

    let resp = ctx.get("/health").await;
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "ok");

    let resp = ctx.get("/health/ready").await;
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_readiness_fails_with_rejected_key() {
    let ctx = TestContext::start_with(TestOptions {
        publishable_key: "pk_revoked_0a9b8c7d6e5f4321".to_string(),
        ..TestOptions::default()
    })
    .await;

    let resp = ctx.get("/health/ready").await;
    assert_eq!(resp.status(), 503);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let ctx = TestContext::start().await;

    let resp = ctx
        .client
        .get(ctx.url("/health"))
        .header("x-request-id", "edge-1234")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.headers()["x-request-id"], "edge-1234");

    let resp = ctx.get("/health").await;
    assert!(resp.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_entry_redirects() {
    let ctx = TestContext::start().await;

    let resp = ctx.get("/").await;
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/us/store");

    let resp = ctx.get("/dk").await;
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/dk/store");
}

#[tokio::test]
async fn test_malformed_country_is_rejected() {
    let ctx = TestContext::start().await;
    let resp = ctx.get("/usa/store").await;
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_collection_page_composes_sidebar_heading_and_skeleton() {
    let ctx = TestContext::start().await;

    let resp = ctx.get("/us/collections/summer").await;
    assert_eq!(resp.status(), 200);
    let html = resp.text().await.unwrap();

    assert!(html.contains(">Summer</h1>"));
    assert!(html.contains(r#"data-testid="refinement-list""#));
    assert!(html.contains("Latest Arrivals"));
    assert!(html.contains("Apparel"));
    assert!(html.contains(r#"data-testid="skeleton-grid""#));
    assert!(html.contains(r#"hx-get="/us/collections/summer/products?sortBy=created_at""#));
    assert!(html.contains(r#"hx-trigger="load""#));
    assert!(html.contains(r#"data-testid="nav-menu-button""#));

    // The page itself never fetches products
    assert!(ctx.backend_requests("/store/products").is_empty());
}

#[tokio::test]
async fn test_facets_request_only_rendered_fields() {
    let ctx = TestContext::start().await;

    let resp = ctx.get("/us/collections/summer").await;
    assert_eq!(resp.status(), 200);

    let requests = ctx.backend_requests("/store/product-categories");
    let listing = requests
        .iter()
        .find(|params| has_param(params, "limit", "100"))
        .unwrap();
    assert!(has_param(listing, "fields", "id,name,handle"));
}

#[tokio::test]
async fn test_unknown_collection_is_not_found() {
    let ctx = TestContext::start().await;
    let resp = ctx.get("/us/collections/winter").await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_collection_grid_defaults_to_newest_first() {
    let ctx = TestContext::start().await;

    let resp = ctx.get("/us/collections/summer/products").await;
    assert_eq!(resp.status(), 200);
    let html = resp.text().await.unwrap();

    assert_eq!(
        titles_in_order(&html, &["Linen Shirt", "Board Shorts", "Sun Hat"]),
        ["Board Shorts", "Sun Hat", "Linen Shirt"]
    );
    assert!(!html.contains("Plain Tee"));
    assert!(html.contains("$30.00"));
    assert!(!html.contains("hx-get"));

    let requests = ctx.backend_requests("/store/products");
    assert_eq!(requests.len(), 1);
    assert!(has_param(&requests[0], "collection_id[]", "pcol_summer"));
    assert!(has_param(&requests[0], "region_id", "reg_na"));
    assert!(has_param(&requests[0], "limit", "100"));
}

#[tokio::test]
async fn test_collection_grid_sorted_by_price() {
    let ctx = TestContext::start().await;

    let html = ctx
        .get("/us/collections/summer/products?sortBy=price_asc")
        .await
        .text()
        .await
        .unwrap();
    assert_eq!(
        titles_in_order(&html, &["Linen Shirt", "Board Shorts", "Sun Hat"]),
        ["Sun Hat", "Board Shorts", "Linen Shirt"]
    );

    let html = ctx
        .get("/us/collections/summer/products?sortBy=price_desc")
        .await
        .text()
        .await
        .unwrap();
    assert_eq!(
        titles_in_order(&html, &["Linen Shirt", "Board Shorts", "Sun Hat"]),
        ["Linen Shirt", "Board Shorts", "Sun Hat"]
    );

    // Both sorts share one cached batch
    assert_eq!(ctx.backend_requests("/store/products").len(), 1);
}

#[tokio::test]
async fn test_type_filter_is_forwarded() {
    let ctx = TestContext::start().await;

    let html = ctx
        .get("/us/collections/summer/products?type=ptyp_gear")
        .await
        .text()
        .await
        .unwrap();
    assert!(html.contains("Sun Hat"));
    assert!(!html.contains("Linen Shirt"));

    let requests = ctx.backend_requests("/store/products");
    assert!(has_param(&requests[0], "type_id[]", "ptyp_gear"));
}

#[tokio::test]
async fn test_pagination_and_page_fallback() {
    let ctx = TestContext::start_with(TestOptions {
        products_per_page: 2,
        ..TestOptions::default()
    })
    .await;

    let first = ctx
        .get("/us/collections/summer/products")
        .await
        .text()
        .await
        .unwrap();
    assert!(first.contains(r#"data-testid="product-pagination""#));
    // Three summer products at two per page
    assert!(first.contains("page=2"));
    assert!(!first.contains("page=3"));
    assert!(first.contains("Board Shorts"));
    assert!(first.contains("Sun Hat"));
    assert!(!first.contains("Linen Shirt"));

    let second = ctx
        .get("/us/collections/summer/products?page=2")
        .await
        .text()
        .await
        .unwrap();
    assert!(second.contains("Linen Shirt"));
    assert!(!second.contains("Sun Hat"));

    // Unparsable page numbers show the first page
    let fallback = ctx
        .get("/us/collections/summer/products?page=abc")
        .await
        .text()
        .await
        .unwrap();
    assert!(fallback.contains("Board Shorts"));
    assert!(!fallback.contains("Linen Shirt"));

    let beyond = ctx
        .get("/us/collections/summer/products?page=9")
        .await
        .text()
        .await
        .unwrap();
    assert!(beyond.contains(r#"data-testid="products-empty""#));
}

#[tokio::test]
async fn test_category_and_store_pages() {
    let ctx = TestContext::start().await;

    let resp = ctx.get("/us/categories/shirts").await;
    assert_eq!(resp.status(), 200);
    let html = resp.text().await.unwrap();
    assert!(html.contains(">Shirts</h1>"));
    assert!(html.contains(r#"hx-get="/us/categories/shirts/products?sortBy=created_at""#));

    let grid = ctx
        .get("/us/categories/shirts/products")
        .await
        .text()
        .await
        .unwrap();
    assert!(grid.contains("Linen Shirt"));
    assert!(grid.contains("Plain Tee"));
    assert!(!grid.contains("Board Shorts"));

    let resp = ctx.get("/us/categories/socks").await;
    assert_eq!(resp.status(), 404);

    let resp = ctx.get("/us/store").await;
    assert_eq!(resp.status(), 200);
    assert!(resp.text().await.unwrap().contains("All products"));

    let grid = ctx.get("/us/store/products").await.text().await.unwrap();
    for title in ["Linen Shirt", "Board Shorts", "Sun Hat", "Plain Tee"] {
        assert!(grid.contains(title), "missing {title}");
    }
}

#[tokio::test]
async fn test_grid_for_country_without_region() {
    let ctx = TestContext::start().await;
    let resp = ctx.get("/jp/store/products").await;
    assert_eq!(resp.status(), 404);
}
