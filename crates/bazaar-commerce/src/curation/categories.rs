//! Per-category merchandising blocks.

use crate::catalog::{storefront_categories, Category, Product};
use serde::{Deserialize, Serialize};

/// Products per category block on the home page.
pub const HOME_BLOCK_SIZE: usize = 4;

/// Products per block in a dedicated category section.
pub const CATEGORY_SECTION_SIZE: usize = 6;

/// A "Top {category}" block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryBlock {
    /// The category this block covers.
    pub category: Category,
    /// Heading (e.g., "Top Fashion").
    pub title: String,
    /// Selected products, input order.
    pub products: Vec<Product>,
}

/// First `limit` products in a category, input order, case-insensitive
/// match on the category name.
pub fn top_in_category(products: &[Product], category: &str, limit: usize) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.in_category(category))
        .take(limit)
        .cloned()
        .collect()
}

/// One block per storefront category, in the fixed category order.
/// Categories with no products yield no block.
pub fn category_blocks(products: &[Product], per_block: usize) -> Vec<CategoryBlock> {
    storefront_categories()
        .into_iter()
        .filter_map(|category| {
            let selected = top_in_category(products, &category.name, per_block);
            if selected.is_empty() {
                return None;
            }
            Some(CategoryBlock {
                title: format!("Top {}", category.name),
                category,
                products: selected,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};

    fn product(id: i64, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            category: category.to_string(),
            subcategory: None,
            price: Money::from_decimal(100.0, Currency::INR),
            mrp: None,
            delivery_charges: None,
            is_deal_of_the_day: false,
            image_url: None,
            images: Vec::new(),
        }
    }

    #[test]
    fn test_category_match_is_case_insensitive() {
        let products = vec![product(1, "fashion"), product(2, "FASHION")];
        assert_eq!(top_in_category(&products, "Fashion", 4).len(), 2);
    }

    #[test]
    fn test_first_n_in_input_order() {
        let products: Vec<Product> = (1..=6).map(|id| product(id, "Toys")).collect();
        let top = top_in_category(&products, "Toys", HOME_BLOCK_SIZE);
        let ids: Vec<i64> = top.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_categories_yield_no_block() {
        let products = vec![product(1, "Beauty"), product(2, "Grocery")];
        let blocks = category_blocks(&products, HOME_BLOCK_SIZE);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].category.name, "Beauty");
        assert_eq!(blocks[1].category.name, "Grocery");
    }

    #[test]
    fn test_blocks_follow_fixed_category_order() {
        let products = vec![
            product(1, "Grocery"),
            product(2, "Electronics"),
            product(3, "Fashion"),
        ];
        let blocks = category_blocks(&products, HOME_BLOCK_SIZE);
        let names: Vec<&str> = blocks.iter().map(|b| b.category.name.as_str()).collect();
        assert_eq!(names, vec!["Electronics", "Fashion", "Grocery"]);
    }

    #[test]
    fn test_block_titles() {
        let products = vec![product(1, "Mobiles")];
        let blocks = category_blocks(&products, HOME_BLOCK_SIZE);
        assert_eq!(blocks[0].title, "Top Mobiles");
    }

    #[test]
    fn test_dedicated_section_takes_six() {
        let products: Vec<Product> = (1..=10).map(|id| product(id, "Home")).collect();
        let top = top_in_category(&products, "Home", CATEGORY_SECTION_SIZE);
        assert_eq!(top.len(), CATEGORY_SECTION_SIZE);
    }
}
