//! Placeholder grid shown while products load.

use std::ops::Range;

/// Number of placeholder cards when no size hint is available.
pub const DEFAULT_SKELETON_SIZE: usize = 8;

/// Loading placeholder for a product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkeletonProductGrid {
    /// How many placeholder cards to draw.
    pub number_of_products: usize,
}

impl SkeletonProductGrid {
    /// Size the skeleton from an advisory hint (e.g. a collection's product
    /// count). An absent hint uses [`DEFAULT_SKELETON_SIZE`].
    #[must_use]
    pub fn new(hint: Option<usize>) -> Self {
        Self {
            number_of_products: hint.unwrap_or(DEFAULT_SKELETON_SIZE),
        }
    }

    /// Indices of the placeholder cards, for template loops.
    #[must_use]
    pub const fn cells(&self) -> Range<usize> {
        0..self.number_of_products
    }
}

impl Default for SkeletonProductGrid {
    fn default() -> Self {
        Self::new(None)
    }
}
