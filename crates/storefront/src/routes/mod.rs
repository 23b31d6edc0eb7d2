//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                                        - Redirect to default country
//! POST /region                                  - Switch country (form)
//!
//! # Catalog (every page is prefixed with a country code)
//! GET  /{cc}                                    - Redirect to store page
//! GET  /{cc}/store                              - All products
//! GET  /{cc}/store/products                     - Product grid fragment (HTMX)
//! GET  /{cc}/collections/{handle}               - Collection page
//! GET  /{cc}/collections/{handle}/products      - Product grid fragment (HTMX)
//! GET  /{cc}/categories/{handle}                - Category page
//! GET  /{cc}/categories/{handle}/products       - Product grid fragment (HTMX)
//!
//! # Navigation (HTMX fragments)
//! GET  /{cc}/nav/side-menu?state=&event=&path=  - Panel transition
//! GET  /{cc}/nav/region-row?state=&event=&path= - Hover transition
//! ```

pub mod categories;
pub mod collections;
pub mod home;
pub mod listing;
pub mod nav;
pub mod region;
pub mod store;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the catalog routes router (nested under `/{cc}`).
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/store", get(store::show))
        .route("/store/products", get(store::products))
        .route("/collections/{handle}", get(collections::show))
        .route("/collections/{handle}/products", get(collections::products))
        .route("/categories/{handle}", get(categories::show))
        .route("/categories/{handle}/products", get(categories::products))
}

/// Create the navigation fragment router (nested under `/{cc}/nav`).
pub fn nav_routes() -> Router<AppState> {
    Router::new()
        .route("/side-menu", get(nav::side_menu))
        .route("/region-row", get(nav::region_row))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::root))
        .route("/region", post(region::switch))
        .route("/{cc}", get(home::country_home))
        .nest("/{cc}", catalog_routes())
        .nest("/{cc}/nav", nav_routes())
}
