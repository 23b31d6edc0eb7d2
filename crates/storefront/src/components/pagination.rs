//! Page navigation below a product grid.

use medusa_storefront_core::PageNumber;

use crate::listing::ListingParams;

/// Most entries (pages plus gaps) the control ever shows.
const MAX_ENTRIES: u32 = 7;

/// Label used for skipped ranges.
const GAP: &str = "…";

/// One entry of the pagination control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageItem {
    /// Page number or the gap marker.
    pub label: String,
    /// Link target; `None` for gaps.
    pub href: Option<String>,
    /// Whether this is the page being shown.
    pub current: bool,
}

impl PageItem {
    fn page(number: u32, current: u32, params: &ListingParams, base_path: &str) -> Self {
        let href = PageNumber::new(number).map(|page| params.with_page(page).href(base_path));
        Self {
            label: number.to_string(),
            href,
            current: number == current,
        }
    }

    fn gap() -> Self {
        Self {
            label: GAP.to_string(),
            href: None,
            current: false,
        }
    }

    /// Whether this entry stands for skipped pages.
    #[must_use]
    pub const fn is_gap(&self) -> bool {
        self.href.is_none()
    }
}

/// Render model for the pagination control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub items: Vec<PageItem>,
}

impl Pagination {
    /// Build the control, or `None` when everything fits on one page.
    ///
    /// Page links keep the sort order and type filter of `params`.
    #[must_use]
    pub fn new(total_pages: u32, params: &ListingParams, base_path: &str) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }

        let current = params.page.get();
        let item = |n: u32| PageItem::page(n, current, params, base_path);

        let items = if total_pages <= MAX_ENTRIES {
            (1..=total_pages).map(item).collect()
        } else if current <= 4 {
            let mut items: Vec<_> = (1..=5).map(item).collect();
            items.push(PageItem::gap());
            items.push(item(total_pages));
            items
        } else if current >= total_pages - 3 {
            let mut items = vec![item(1), PageItem::gap()];
            items.extend((total_pages - 4..=total_pages).map(item));
            items
        } else {
            vec![
                item(1),
                PageItem::gap(),
                item(current - 1),
                item(current),
                item(current + 1),
                PageItem::gap(),
                item(total_pages),
            ]
        };

        Some(Self { items })
    }
}
