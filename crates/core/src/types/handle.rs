//! Opaque URL slugs ("handles") for collections and categories.

use serde::{Deserialize, Serialize};

/// A locale-resolvable slug identifying a collection or category in URLs.
///
/// Handles are never parsed or normalised: whatever the backend returns is
/// used verbatim when building link targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handle(String);

impl Handle {
    /// Create a new handle.
    #[must_use]
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// Get the handle as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Link target for a collection with this handle (`/collections/{handle}`).
    #[must_use]
    pub fn collection_path(&self) -> String {
        format!("/collections/{}", self.0)
    }

    /// Link target for a category with this handle (`/categories/{handle}`).
    #[must_use]
    pub fn category_path(&self) -> String {
        format!("/categories/{}", self.0)
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Handle {
    fn from(handle: &str) -> Self {
        Self(handle.to_owned())
    }
}

impl From<String> for Handle {
    fn from(handle: String) -> Self {
        Self(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_templated_verbatim() {
        let handle = Handle::new("summer-2024");
        assert_eq!(handle.collection_path(), "/collections/summer-2024");
        assert_eq!(handle.category_path(), "/categories/summer-2024");
    }

    #[test]
    fn test_handle_is_not_normalised() {
        let handle = Handle::new("Été/Sale");
        assert_eq!(handle.as_str(), "Été/Sale");
    }
}
