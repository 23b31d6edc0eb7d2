//! Collection route handlers.

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

/// Display a collection page.
///
/// The product grid is left suspended; see [`products`].
///
/// # Errors
///
/// Returns `NotFound` if no collection has this handle.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path((country_code, handle)): Path<(CountryCode, Handle)>,
    Query(query): Query<ListingQuery>,
) -> Result<ListingTemplate> {
    let params = ListingParams::resolve(&query);

    let (collection, facets) = tokio::join!(
        state.medusa().get_collection_by_handle(&handle),
        load_facets(&state, params.product_type.clone()),
    );
    let collection = collection?;

    add_breadcrumb(
        "catalog",
        "Viewed collection",
        &[("handle", handle.as_str()), ("country", country_code.as_str())],
    );

    let scope = ListingScope::Collection(&collection);
    let menu = load_menu(&state, &country_code, &scope.path()).await;
    let page = ListingPage::compose(scope, &params, &country_code, &facets);

    Ok(ListingTemplate::new(menu, page))
}

/// Resolve the product grid of a collection page (HTMX fragment).
///
/// # Errors
///
/// Returns `NotFound` if the collection or the country's region is unknown.
#[instrument(skip(state))]
pub async fn products(
    State(state): State<AppState>,
    Path((country_code, handle)): Path<(CountryCode, Handle)>,
    Query(query): Query<ListingQuery>,
) -> Result<ProductGridTemplate> {
    let params = ListingParams::resolve(&query);
    let collection = state.medusa().get_collection_by_handle(&handle).await?;

    render_grid(
        &state,
        ListingScope::Collection(&collection),
        &params,
        &country_code,
    )
    .await
}
