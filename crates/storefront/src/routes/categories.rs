//! Category route handlers.

use axum::extract::{Path, Query, State};
use tracing::instrument;

use medusa_storefront_core::{CountryCode, Handle};

use crate::error::{Result, add_breadcrumb};
use crate::listing::{ListingParams, ListingQuery};
use crate::routes::listing::{
    ListingPage, ListingScope, ListingTemplate, ProductGridTemplate, load_facets, render_grid,
};
use crate::routes::nav::load_menu;
use crate::state::AppState;

/// Display a category page.
///
/// # Errors
///
/// Returns `NotFound` if no category has this handle.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path((country_code, handle)): Path<(CountryCode, Handle)>,
    Query(query): Query<ListingQuery>,
) -> Result<ListingTemplate> {
    let params = ListingParams::resolve(&query);

    let (category, facets) = tokio::join!(
        state.medusa().get_category_by_handle(&handle),
        load_facets(&state, params.product_type.clone()),
    );
    let category = category?;

    add_breadcrumb(
        "catalog",
        "Viewed category",
        &[("handle", handle.as_str()), ("country", country_code.as_str())],
    );

    let scope = ListingScope::Category(&category);
    let menu = load_menu(&state, &country_code, &scope.path()).await;
    let page = ListingPage::compose(scope, &params, &country_code, &facets);

    Ok(ListingTemplate::new(menu, page))
}

/// Resolve the product grid of a category page (HTMX fragment).
///
/// # Errors
///
/// Returns `NotFound` if the category or the country's region is unknown.
#[instrument(skip(state))]
pub async fn products(
    State(state): State<AppState>,
    Path((country_code, handle)): Path<(CountryCode, Handle)>,
    Query(query): Query<ListingQuery>,
) -> Result<ProductGridTemplate> {
    let params = ListingParams::resolve(&query);
    let category = state.medusa().get_category_by_handle(&handle).await?;

    render_grid(&state, ListingScope::Category(&category), &params, &country_code).await
}
