//! End-to-end tests for the side menu transitions and country switching.

#![allow(clippy::unwrap_used)]

use medusa_storefront_integration_tests::TestContext;

async fn text(ctx: &TestContext, path: &str) -> String {
    let resp = ctx.get(path).await;
    assert_eq!(resp.status(), 200, "GET {path}");
    resp.text().await.unwrap()
}

#[tokio::test]
async fn test_trigger_opens_panel_with_all_sections() {
    let ctx = TestContext::start().await;

    let html = text(&ctx, "/us/nav/side-menu?state=closed&event=trigger&path=%2Fstore").await;

    assert!(html.contains(r#"data-testid="nav-menu-popup""#));
    assert!(html.contains(r#"data-testid="close-menu-button""#));
    for test_id in ["home-link", "store-link", "account-link", "cart-link"] {
        assert!(html.contains(&format!(r#"data-testid="{test_id}""#)), "missing {test_id}");
    }
    assert!(html.contains(r#"href="/us/collections/summer""#));
    assert!(html.contains(r#"data-testid="collection-basics-link""#));
    assert!(html.contains(r#"href="/us/categories/shirts""#));
    assert!(html.contains(r#"data-testid="category-pants-link""#));
    assert!(html.contains(r#"data-testid="region-row""#));
    assert!(html.contains("Fixture Store. All rights reserved."));
}

#[tokio::test]
async fn test_close_link_and_dismiss_close_panel() {
    let ctx = TestContext::start().await;

    for event in ["close", "link", "dismiss"] {
        let html = text(
            &ctx,
            &format!("/us/nav/side-menu?state=open&event={event}&path=%2Fstore"),
        )
        .await;
        assert!(!html.contains(r#"data-testid="nav-menu-popup""#), "{event}");
        assert!(html.contains(r#"data-state="closed""#), "{event}");
    }
}

#[tokio::test]
async fn test_panel_cycles() {
    let ctx = TestContext::start().await;

    let open = text(&ctx, "/us/nav/side-menu?state=closed&event=trigger").await;
    assert!(open.contains(r#"data-state="open""#));
    // The open panel wires close and dismiss back to the closed state
    assert!(open.contains("state=open"));

    let closed = text(&ctx, "/us/nav/side-menu?state=open&event=close").await;
    assert!(closed.contains(r#"data-state="closed""#));
    assert!(closed.contains("state=closed"));

    let reopened = text(&ctx, "/us/nav/side-menu?state=closed&event=trigger").await;
    assert!(reopened.contains(r#"data-state="open""#));
}

#[tokio::test]
async fn test_unknown_state_or_event_is_rejected() {
    let ctx = TestContext::start().await;

    let resp = ctx.get("/us/nav/side-menu?state=ajar&event=trigger").await;
    assert_eq!(resp.status(), 400);

    let resp = ctx.get("/us/nav/side-menu?state=open&event=explode").await;
    assert_eq!(resp.status(), 400);

    let resp = ctx.get("/us/nav/region-row?state=closed&event=trigger").await;
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_hover_toggles_country_select() {
    let ctx = TestContext::start().await;

    let open = text(&ctx, "/dk/nav/region-row?state=closed&event=enter&path=%2Fstore").await;
    assert!(open.contains(r#"hx-trigger="mouseleave""#));
    assert!(open.contains(r#"data-testid="country-select-options""#));
    assert!(open.contains(r#"data-testid="select-de-option""#));
    assert!(open.contains(r#"data-testid="select-ca-option""#));
    assert!(open.contains("region-row-arrow-open"));

    let closed = text(&ctx, "/dk/nav/region-row?state=open&event=leave&path=%2Fstore").await;
    assert!(closed.contains(r#"hx-trigger="mouseenter""#));
    assert!(!closed.contains(r#"data-testid="country-select-options""#));
    assert!(closed.contains("Denmark"));
}

#[tokio::test]
async fn test_country_switch_redirects_to_same_page() {
    let ctx = TestContext::start().await;

    let resp = ctx
        .client
        .post(ctx.url("/region"))
        .form(&[("country_code", "dk"), ("path", "/collections/summer")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["location"], "/dk/collections/summer");

    let resp = ctx
        .client
        .post(ctx.url("/region"))
        .form(&[("country_code", "DE"), ("path", "//evil.example")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["location"], "/de");
}

#[tokio::test]
async fn test_country_switch_rejects_unknown_country() {
    let ctx = TestContext::start().await;

    for country in ["jp", "xyz"] {
        let resp = ctx
            .client
            .post(ctx.url("/region"))
            .form(&[("country_code", country), ("path", "/store")])
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400, "{country}");
    }
}
