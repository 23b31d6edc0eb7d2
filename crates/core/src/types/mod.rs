//! Core types for the storefront.
//!
//! This module provides type-safe wrappers for common catalog concepts.

pub mod country;
pub mod handle;
pub mod id;
pub mod page;
pub mod price;
pub mod sort;

pub use country::{CountryCode, CountryCodeError};
pub use handle::Handle;
pub use id::*;
pub use page::{PageError, PageNumber};
pub use price::{CurrencyCode, Price};
pub use sort::{SortOptions, UnknownSortOption};
