//! Whole-catalog listing.

use axum::extract::{Path, Query, State};
use tracing::instrument;

use medusa_storefront_core::CountryCode;

use crate::error::Result;
use crate::listing::{ListingParams, ListingQuery};
use crate::routes::listing::{
    ListingPage, ListingScope, ListingTemplate, ProductGridTemplate, load_facets, render_grid,
};
use crate::routes::nav::load_menu;
use crate::state::AppState;

/// Display the store page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(country_code): Path<CountryCode>,
    Query(query): Query<ListingQuery>,
) -> ListingTemplate {
    let params = ListingParams::resolve(&query);
    let scope = ListingScope::Store;

    let (menu, facets) = tokio::join!(
        load_menu(&state, &country_code, "/store"),
        load_facets(&state, params.product_type.clone()),
    );
    let page = ListingPage::compose(scope, &params, &country_code, &facets);

    ListingTemplate::new(menu, page)
}

/// Resolve the store page's product grid (HTMX fragment).
///
/// # Errors
///
/// Returns `NotFound` if no region sells to the country.
#[instrument(skip(state))]
pub async fn products(
    State(state): State<AppState>,
    Path(country_code): Path<CountryCode>,
    Query(query): Query<ListingQuery>,
) -> Result<ProductGridTemplate> {
    let params = ListingParams::resolve(&query);
    render_grid(&state, ListingScope::Store, &params, &country_code).await
}
