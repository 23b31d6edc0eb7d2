//! Entry redirects.

use axum::extract::{Path, State};
use axum::response::Redirect;

use medusa_storefront_core::CountryCode;

use crate::state::AppState;

/// Send visitors without a country prefix to the default country.
pub async fn root(State(state): State<AppState>) -> Redirect {
    Redirect::to(&state.config().default_country.localize("/store"))
}

/// A bare country prefix lands on the store page.
pub async fn country_home(Path(country_code): Path<CountryCode>) -> Redirect {
    Redirect::to(&country_code.localize("/store"))
}
