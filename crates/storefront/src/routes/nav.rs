//! Side menu loading and its HTMX state transitions.
//!
//! The panel and the region row hold no server state: every fragment request
//! names the current state and the event, and the response is the element
//! re-rendered in the resulting state.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use tracing::instrument;

use medusa_storefront_core::CountryCode;

use crate::components::{HoverEvent, PanelEvent, SideMenu, SideMenuInput, ToggleState};
use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Query of a toggle transition request.
#[derive(Debug, Deserialize)]
pub struct TransitionQuery {
    pub state: String,
    pub event: String,
    /// Page the menu is rendered on, without country prefix.
    pub path: Option<String>,
}

impl TransitionQuery {
    fn current_path(&self) -> &str {
        self.path
            .as_deref()
            .filter(|path| path.starts_with('/') && !path.starts_with("//"))
            .unwrap_or("/")
    }
}

/// Side menu fragment.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/side_menu.html")]
pub struct SideMenuTemplate {
    pub menu: SideMenu,
}

/// Region row fragment.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/region_row.html")]
pub struct RegionRowTemplate {
    pub menu: SideMenu,
}

/// Load menu data and build a closed side menu.
///
/// Regions, collections and categories load concurrently. A failed list is
/// logged and its section left out.
pub async fn load_menu(state: &AppState, country_code: &CountryCode, current_path: &str) -> SideMenu {
    let medusa = state.medusa();
    let (regions, collections, categories) = tokio::join!(
        medusa.list_regions(),
        medusa.list_collections(),
        medusa.list_categories(),
    );

    let input = SideMenuInput {
        regions: regions
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to load regions for menu"))
            .ok(),
        collections: collections
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to load collections for menu"))
            .ok(),
        categories: categories
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to load categories for menu"))
            .ok(),
    };

    SideMenu::new(
        input,
        country_code.clone(),
        current_path,
        &state.config().store_name,
    )
}

fn parse<T: std::str::FromStr>(value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e: T::Err| AppError::BadRequest(e.to_string()))
}

/// Apply a panel event and render the side menu.
///
/// # Errors
///
/// Returns `BadRequest` for an unknown state or event.
#[instrument(skip(state))]
pub async fn side_menu(
    State(state): State<AppState>,
    Path(country_code): Path<CountryCode>,
    Query(query): Query<TransitionQuery>,
) -> Result<SideMenuTemplate> {
    let current: ToggleState = parse(&query.state)?;
    let event: PanelEvent = parse(&query.event)?;
    let next = current.on_panel(event);
    tracing::debug!(from = %current, to = %next, event = event.as_str(), "Side menu transition");

    let menu = load_menu(&state, &country_code, query.current_path())
        .await
        .with_panel(next);
    Ok(SideMenuTemplate { menu })
}

/// Apply a hover event and render the region row.
///
/// # Errors
///
/// Returns `BadRequest` for an unknown state or event.
#[instrument(skip(state))]
pub async fn region_row(
    State(state): State<AppState>,
    Path(country_code): Path<CountryCode>,
    Query(query): Query<TransitionQuery>,
) -> Result<RegionRowTemplate> {
    let current: ToggleState = parse(&query.state)?;
    let event: HoverEvent = parse(&query.event)?;
    let next = current.on_hover(event);

    let menu = load_menu(&state, &country_code, query.current_path())
        .await
        .with_panel(ToggleState::Open)
        .with_hover(next);
    Ok(RegionRowTemplate { menu })
}
