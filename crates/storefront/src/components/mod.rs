//! View models for the storefront's reusable UI pieces.
//!
//! Each component is a plain struct built from Store API data; the matching
//! markup lives under `templates/components/`. Components never fetch data.

pub mod country_select;
pub mod pagination;
pub mod product_grid;
pub mod refinement_list;
pub mod side_menu;
pub mod skeleton;
pub mod suspense;
pub mod toggle;

pub use country_select::{CountryOption, CountrySelect};
pub use pagination::{PageItem, Pagination};
pub use product_grid::{ProductGrid, ProductPreview};
pub use refinement_list::{FacetData, FacetOption, RefinementLink, RefinementList};
pub use side_menu::{MenuLink, NavSection, SideMenu, SideMenuInput};
pub use skeleton::SkeletonProductGrid;
pub use suspense::Suspended;
pub use toggle::{HoverEvent, PanelEvent, ToggleState, UnknownTransition};
