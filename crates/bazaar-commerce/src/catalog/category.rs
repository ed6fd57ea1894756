//! Storefront categories.
//!
//! The storefront navigates a fixed, ordered set of top-level categories;
//! merchandising blocks iterate this list in order.

use serde::{Deserialize, Serialize};

/// A top-level storefront category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Display name (e.g., "Electronics").
    pub name: String,
    /// URL-friendly slug (e.g., "electronics").
    pub slug: String,
}

impl Category {
    /// Create a category, deriving the slug from the name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self { name, slug }
    }

    /// Case-insensitive name match.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// The fixed, ordered list of storefront categories.
pub fn storefront_categories() -> Vec<Category> {
    [
        "Electronics",
        "Fashion",
        "Home",
        "Appliances",
        "Mobiles",
        "Beauty",
        "Toys",
        "Grocery",
    ]
    .into_iter()
    .map(Category::new)
    .collect()
}

/// Lowercase and hyphenate a display name for use in URLs.
pub fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_category_order() {
        let categories = storefront_categories();
        assert_eq!(categories.len(), 8);
        assert_eq!(categories[0].name, "Electronics");
        assert_eq!(categories[1].name, "Fashion");
        assert_eq!(categories[7].name, "Grocery");
    }

    #[test]
    fn test_category_match_is_case_insensitive() {
        let category = Category::new("Fashion");
        assert!(category.matches("fashion"));
        assert!(category.matches("FASHION"));
        assert!(!category.matches("Beauty"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Electronics"), "electronics");
        assert_eq!(slugify("Home  Decor"), "home-decor");
    }
}
