//! Slide-out navigation menu.
//!
//! The menu always carries the four static links. The "Collections" and
//! "Category" sections exist only when their input list is present *and*
//! non-empty; the country selector exists only when regions are present.

use medusa_storefront_core::CountryCode;

use crate::components::country_select::CountrySelect;
use crate::components::toggle::{PanelEvent, ToggleState};
use crate::medusa::{StoreCollection, StoreProductCategory, StoreRegion};

/// Fixed navigation items: (name, path).
pub const STATIC_ITEMS: [(&str, &str); 4] = [
    ("Home", "/"),
    ("Store", "/store"),
    ("Account", "/account"),
    ("Cart", "/cart"),
];

/// A single navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLink {
    /// Stable key: the item name for static links, the entity ID otherwise.
    pub key: String,
    /// Visible text.
    pub label: String,
    /// Localized target path.
    pub href: String,
    /// `data-testid` value.
    pub test_id: String,
}

/// A titled list of links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub links: Vec<MenuLink>,
}

impl NavSection {
    /// Build a section, or `None` when there are no links to show.
    #[must_use]
    pub fn non_empty(title: &'static str, links: Vec<MenuLink>) -> Option<Self> {
        if links.is_empty() {
            None
        } else {
            Some(Self { title, links })
        }
    }
}

/// Data the menu is built from. Every list may be absent.
#[derive(Debug, Clone, Default)]
pub struct SideMenuInput {
    pub regions: Option<Vec<StoreRegion>>,
    pub collections: Option<Vec<StoreCollection>>,
    pub categories: Option<Vec<StoreProductCategory>>,
}

/// Render model for the side menu.
#[derive(Debug, Clone)]
pub struct SideMenu {
    /// Country prefix for every link.
    pub country_code: CountryCode,
    /// Current page path without the country prefix.
    pub current_path: String,
    /// Panel toggle.
    pub panel: ToggleState,
    /// Hover disclosure toggle for the region row.
    pub hover: ToggleState,
    /// Home/Store/Account/Cart.
    pub items: Vec<MenuLink>,
    /// Present iff collections were given and non-empty.
    pub collections: Option<NavSection>,
    /// Present iff categories were given and non-empty.
    pub categories: Option<NavSection>,
    /// Present iff regions were given.
    pub country_select: Option<CountrySelect>,
    /// Footer attribution.
    pub store_name: String,
}

impl SideMenu {
    /// Build the menu in its initial (closed) state.
    #[must_use]
    pub fn new(
        input: SideMenuInput,
        country_code: CountryCode,
        current_path: &str,
        store_name: &str,
    ) -> Self {
        let items = STATIC_ITEMS
            .iter()
            .map(|(name, path)| MenuLink {
                key: (*name).to_string(),
                label: (*name).to_string(),
                href: country_code.localize(path),
                test_id: format!("{}-link", name.to_lowercase()),
            })
            .collect();

        let collections = input.collections.and_then(|collections| {
            let links = collections
                .iter()
                .map(|collection| MenuLink {
                    key: collection.id.to_string(),
                    label: collection.title.clone(),
                    href: country_code.localize(&collection.handle.collection_path()),
                    test_id: format!("collection-{}-link", collection.handle),
                })
                .collect();
            NavSection::non_empty("Collections", links)
        });

        let categories = input.categories.and_then(|categories| {
            let links = categories
                .iter()
                .map(|category| MenuLink {
                    key: category.id.to_string(),
                    label: category.name.clone(),
                    href: country_code.localize(&category.handle.category_path()),
                    test_id: format!("category-{}-link", category.handle),
                })
                .collect();
            NavSection::non_empty("Category", links)
        });

        let country_select = input
            .regions
            .map(|regions| CountrySelect::new(&regions, &country_code, current_path));

        Self {
            country_code,
            current_path: current_path.to_string(),
            panel: ToggleState::default(),
            hover: ToggleState::default(),
            items,
            collections,
            categories,
            country_select,
            store_name: store_name.to_string(),
        }
    }

    /// Set the panel state.
    #[must_use]
    pub fn with_panel(mut self, panel: ToggleState) -> Self {
        self.panel = panel;
        self
    }

    /// Set the hover disclosure state, keeping the selector in sync.
    #[must_use]
    pub fn with_hover(mut self, hover: ToggleState) -> Self {
        self.hover = hover;
        if let Some(select) = self.country_select.as_mut() {
            select.open = hover.is_open();
        }
        self
    }

    /// URL that applies `event` to the current panel state.
    fn panel_url(&self, event: PanelEvent) -> String {
        format!(
            "{}?state={}&event={}&path={}",
            self.country_code.localize("/nav/side-menu"),
            self.panel,
            event.as_str(),
            urlencoding::encode(&self.current_path),
        )
    }

    /// Fragment URL for the menu control.
    #[must_use]
    pub fn trigger_url(&self) -> String {
        self.panel_url(PanelEvent::Trigger)
    }

    /// Fragment URL for the close control.
    #[must_use]
    pub fn close_url(&self) -> String {
        self.panel_url(PanelEvent::Close)
    }

    /// Fragment URL fired when a navigation link is followed.
    #[must_use]
    pub fn link_url(&self) -> String {
        self.panel_url(PanelEvent::LinkActivated)
    }

    /// Fragment URL for outside clicks and Escape.
    #[must_use]
    pub fn dismiss_url(&self) -> String {
        self.panel_url(PanelEvent::Dismiss)
    }

    /// Fragment URL for the next hover transition of the region row.
    #[must_use]
    pub fn hover_url(&self) -> String {
        let (event, _) = self.hover.next_hover();
        format!(
            "{}?state={}&event={}&path={}",
            self.country_code.localize("/nav/region-row"),
            self.hover,
            event.as_str(),
            urlencoding::encode(&self.current_path),
        )
    }

    /// DOM event that fires the next hover transition.
    #[must_use]
    pub const fn hover_trigger(&self) -> &'static str {
        self.hover.next_hover().1
    }
}
