//! Medusa Storefront Core - Shared types library.
//!
//! This crate provides the catalog types used by the storefront binary and
//! its integration tests.
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no templates. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, handles, country codes, prices,
//!   sort orders and page numbers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
