//! Product curation engine.
//!
//! Derives the home-page merchandising buckets from the fetched product
//! list: price tiers, discount tiers, the rule-based picks (best seller,
//! trending, featured deal), and per-category blocks.
//!
//! Every derivation is a pure, stateless function of the input slice,
//! recomputed in full on each call; the caller re-derives whenever the
//! product list changes. "First K" always means stable input order (the
//! order products arrived from the feed); the only sorts applied are the
//! ones each bucket explicitly names. Thin or empty input degrades each
//! bucket to empty/absent, never an error.

mod categories;
mod discount;
mod picks;
mod tiers;

pub use categories::{category_blocks, top_in_category, CategoryBlock, CATEGORY_SECTION_SIZE, HOME_BLOCK_SIZE};
pub use discount::{discount_buckets, DiscountBucket, DiscountRange, DiscountedProduct, DISCOUNT_RANGES, DISCOUNT_TIER_SIZE};
pub use picks::{best_sellers, deal_highlights, featured_deals, trending_fashion, HIGHLIGHT_SIZE, SELECTION_SIZE};
pub use tiers::{price_tier_buckets, PriceTier, PriceTierBucket, PRICE_TIERS, PRICE_TIER_SIZE};

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Everything the home page shows, derived in one pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HomeCuration {
    /// "Under ₹199/₹399/₹599" boxes, ascending tier order.
    pub price_tiers: Vec<PriceTierBucket>,
    /// "20%/40%/50% Off" boxes, ascending range order.
    pub discount_tiers: Vec<DiscountBucket>,
    /// Best Seller box: exactly four products, or absent.
    pub best_sellers: Option<Vec<Product>>,
    /// Trending box: exactly four Fashion products, or absent.
    pub trending: Option<Vec<Product>>,
    /// Featured Deal box: exactly four products, or absent.
    pub featured_deals: Option<Vec<Product>>,
    /// "Top {category}" blocks, in the fixed category order.
    pub category_blocks: Vec<CategoryBlock>,
    /// Discounted products for the hero strip, input order.
    pub deal_highlights: Vec<Product>,
}

impl HomeCuration {
    /// Derive all home-page buckets from the current product list.
    pub fn derive(products: &[Product]) -> Self {
        Self {
            price_tiers: price_tier_buckets(products),
            discount_tiers: discount_buckets(products),
            best_sellers: best_sellers(products),
            trending: trending_fashion(products),
            featured_deals: featured_deals(products),
            category_blocks: category_blocks(products, HOME_BLOCK_SIZE),
            deal_highlights: deal_highlights(products),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};

    fn product(id: i64, name: &str, category: &str, price: f64, mrp: Option<f64>) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            subcategory: None,
            price: Money::from_decimal(price, Currency::INR),
            mrp: mrp.map(|m| Money::from_decimal(m, Currency::INR)),
            delivery_charges: None,
            is_deal_of_the_day: false,
            image_url: None,
            images: Vec::new(),
        }
    }

    #[test]
    fn test_empty_input_degrades_everything() {
        let curation = HomeCuration::derive(&[]);
        assert!(curation.price_tiers.iter().all(|b| b.products.is_empty()));
        assert!(curation.discount_tiers.iter().all(|b| b.is_empty()));
        assert!(curation.best_sellers.is_none());
        assert!(curation.trending.is_none());
        assert!(curation.featured_deals.is_none());
        assert!(curation.category_blocks.is_empty());
        assert!(curation.deal_highlights.is_empty());
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let products = vec![
            product(1, "Cotton Shirt", "Fashion", 150.0, Some(300.0)),
            product(2, "Silk Saree", "Fashion", 450.0, Some(900.0)),
            product(3, "Lace Top", "Fashion", 250.0, Some(350.0)),
            product(4, "Slim Jeans", "Fashion", 550.0, Some(700.0)),
            product(5, "Mixer", "Appliances", 1500.0, Some(2000.0)),
            product(6, "Headphones", "Electronics", 199.0, None),
        ];

        let first = HomeCuration::derive(&products);
        let second = HomeCuration::derive(&products);
        assert_eq!(first, second);
    }
}
