//! Two-state loading boundary.
//!
//! A page renders `Pending`: the fallback plus an HTMX element that fetches
//! `src` as soon as it is loaded and swaps itself for the response. The
//! fragment endpoint behind `src` renders `Resolved`. There is no way back
//! from `Resolved` to `Pending`.

use crate::components::skeleton::SkeletonProductGrid;

/// Content that is either still loading or ready.
#[derive(Debug, Clone)]
pub enum Suspended<T> {
    /// Not loaded yet.
    Pending {
        /// Fragment URL that resolves the content.
        src: String,
        /// Shown until the fragment arrives.
        fallback: SkeletonProductGrid,
    },
    /// Loaded.
    Resolved(T),
}

impl<T> Suspended<T> {
    /// A pending boundary.
    #[must_use]
    pub fn pending(src: impl Into<String>, fallback: SkeletonProductGrid) -> Self {
        Self::Pending {
            src: src.into(),
            fallback,
        }
    }

    /// The fallback while pending.
    #[must_use]
    pub const fn fallback(&self) -> Option<&SkeletonProductGrid> {
        match self {
            Self::Pending { fallback, .. } => Some(fallback),
            Self::Resolved(_) => None,
        }
    }

    /// The fragment URL while pending.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        match self {
            Self::Pending { src, .. } => Some(src),
            Self::Resolved(_) => None,
        }
    }

    /// The content once resolved.
    #[must_use]
    pub const fn resolved(&self) -> Option<&T> {
        match self {
            Self::Pending { .. } => None,
            Self::Resolved(content) => Some(content),
        }
    }
}
