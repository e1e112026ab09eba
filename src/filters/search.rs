//! Free-text search over product names and tags.

use super::Filter;
use crate::catalog::Product;

/// Keeps products whose name or tag string contains the search text,
/// case-insensitively.
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    /// Creates a new search filter.
    pub fn new(text: impl Into<String>) -> Self {
        Self { needle: text.into().to_lowercase() }
    }
}

impl Filter for SearchFilter {
    fn matches(&self, product: &Product) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        if product.name.to_lowercase().contains(&self.needle) {
            return true;
        }

        // A product without tags can still match through its name
        product.extra.as_deref().is_some_and(|e| e.to_lowercase().contains(&self.needle))
    }

    fn description(&self) -> String {
        format!("Search: \"{}\"", self.needle)
    }
}
