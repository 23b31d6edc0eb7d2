//! Commerce backend Store API client.
//!
//! # Architecture
//!
//! - Plain REST over `reqwest`; every request carries the publishable key
//! - The backend is the source of truth - NO local sync, direct API calls
//! - In-memory caching via `moka` for API responses (5 minute TTL)
//!
//! # Example
//!
//! ```rust,ignore
//! use medusa_storefront::medusa::{MedusaClient, ProductQuery};
//!
//! let client = MedusaClient::new(&config.medusa)?;
//!
//! let collection = client.get_collection_by_handle(&"summer".into()).await?;
//! let query = ProductQuery {
//!     collection_id: Some(collection.id),
//!     ..ProductQuery::new(country)
//! };
//! let page = client.list_products_with_sort(&query, 12).await?;
//! ```

mod store;
pub mod types;

pub use store::{MedusaClient, PRODUCT_BATCH_LIMIT, ProductPage, ProductQuery};
pub use types::*;

use thiserror::Error;

/// Errors that can occur when talking to the Store API.
#[derive(Debug, Error)]
pub enum MedusaError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Store API returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body, if any.
        message: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by the backend.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// A request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl MedusaError {
    /// Build a status error from a response body.
    ///
    /// The backend reports errors as `{"type": "...", "message": "..."}`; the
    /// message is used when present, otherwise a truncated body.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or_else(|| body.chars().take(200).collect());

        if status == 404 {
            Self::NotFound(message)
        } else {
            Self::Status { status, message }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MedusaError::NotFound("collection summer".to_string());
        assert_eq!(err.to_string(), "Not found: collection summer");
    }

    #[test]
    fn test_from_status_uses_backend_message() {
        let err = MedusaError::from_status(
            400,
            r#"{"type":"invalid_data","message":"Invalid request: Field 'limit' must be a number"}"#,
        );
        assert_eq!(
            err.to_string(),
            "Store API returned 400: Invalid request: Field 'limit' must be a number"
        );
    }

    #[test]
    fn test_from_status_404_is_not_found() {
        let err = MedusaError::from_status(404, r#"{"message":"Collection missing"}"#);
        assert!(matches!(err, MedusaError::NotFound(m) if m == "Collection missing"));
    }

    #[test]
    fn test_from_status_truncates_plain_bodies() {
        let body = "x".repeat(500);
        let MedusaError::Status { message, .. } = MedusaError::from_status(502, &body) else {
            panic!("expected status error");
        };
        assert_eq!(message.len(), 200);
    }
}
