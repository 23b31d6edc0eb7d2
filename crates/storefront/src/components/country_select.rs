//! Country selector shown in the side menu's region row.

use medusa_storefront_core::CountryCode;

use crate::medusa::StoreRegion;

/// One selectable country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryOption {
    /// Lowercase ISO 3166-1 alpha-2 code.
    pub code: String,
    /// Display name.
    pub label: String,
    /// Name of the region selling to this country.
    pub region_name: String,
    /// Whether this is the country the visitor is browsing.
    pub selected: bool,
}

/// Render model for the country selector.
#[derive(Debug, Clone)]
pub struct CountrySelect {
    /// Every country of every region, sorted by label.
    pub options: Vec<CountryOption>,
    /// Path (without country prefix) to return to after switching.
    pub redirect_path: String,
    /// Whether the option list is expanded. Mirrors the hover toggle.
    pub open: bool,
}

impl CountrySelect {
    /// Build the selector from regions.
    #[must_use]
    pub fn new(regions: &[StoreRegion], current: &CountryCode, redirect_path: &str) -> Self {
        let mut options: Vec<CountryOption> = regions
            .iter()
            .flat_map(|region| {
                region.countries().iter().map(move |country| CountryOption {
                    code: country.iso_2.to_ascii_lowercase(),
                    label: country.label(),
                    region_name: region.name.clone(),
                    selected: country.iso_2.eq_ignore_ascii_case(current.as_str()),
                })
            })
            .collect();
        options.sort_by(|a, b| a.label.cmp(&b.label));
        options.dedup_by(|a, b| a.code == b.code);

        Self {
            options,
            redirect_path: redirect_path.to_string(),
            open: false,
        }
    }

    /// The currently selected country, if it belongs to any region.
    #[must_use]
    pub fn current(&self) -> Option<&CountryOption> {
        self.options.iter().find(|option| option.selected)
    }
}
