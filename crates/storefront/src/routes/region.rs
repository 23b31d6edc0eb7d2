//! Country switching.

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;
use tracing::instrument;

use medusa_storefront_core::CountryCode;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::state::AppState;

/// Country selector submission.
#[derive(Debug, Deserialize)]
pub struct RegionForm {
    pub country_code: String,
    /// Page to return to, without country prefix.
    #[serde(default)]
    pub path: String,
}

/// Keep only local absolute paths; anything else returns to the home page.
fn redirect_path(path: &str) -> &str {
    if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') {
        path
    } else {
        "/"
    }
}

/// Switch to another country and reload the same page there.
///
/// # Errors
///
/// Returns `BadRequest` if the country is malformed or no region sells to it.
#[instrument(skip(state))]
pub async fn switch(
    State(state): State<AppState>,
    Form(form): Form<RegionForm>,
) -> Result<Redirect> {
    let country_code = CountryCode::parse(&form.country_code)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    if state
        .medusa()
        .region_for_country(&country_code)
        .await?
        .is_none()
    {
        return Err(AppError::BadRequest(format!(
            "no region sells to {country_code}"
        )));
    }

    add_breadcrumb(
        "region",
        "Switched country",
        &[("country", country_code.as_str())],
    );

    Ok(Redirect::to(
        &country_code.localize(redirect_path(&form.path)),
    ))
}
