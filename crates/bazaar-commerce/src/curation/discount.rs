//! Discount-tier buckets.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Maximum number of products shown per discount tier.
///
/// One more than the price-tier size; the storefront has always shipped
/// with this asymmetry and downstream layouts depend on it.
pub const DISCOUNT_TIER_SIZE: usize = 5;

/// The storefront discount ranges, ascending. Half-open `[min, max)` over
/// the rounded discount percentage.
pub const DISCOUNT_RANGES: [DiscountRange; 3] = [
    DiscountRange { min: 20, max: 40 },
    DiscountRange { min: 40, max: 50 },
    DiscountRange { min: 50, max: 60 },
];

/// A half-open range over the computed discount percentage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiscountRange {
    /// Inclusive lower bound.
    pub min: i64,
    /// Exclusive upper bound.
    pub max: i64,
}

impl DiscountRange {
    /// Display label (e.g., "20% Off").
    pub fn label(&self) -> String {
        format!("{}% Off", self.min)
    }

    /// Check whether a discount percentage falls in this range.
    pub fn contains(&self, percent: i64) -> bool {
        percent >= self.min && percent < self.max
    }
}

/// A product together with its computed discount percentage, for badge
/// display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountedProduct {
    /// The product.
    pub product: Product,
    /// Rounded discount percentage.
    pub percent: i64,
}

/// A discount range plus the products selected for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountBucket {
    /// The range this bucket covers.
    pub range: DiscountRange,
    /// Up to [`DISCOUNT_TIER_SIZE`] products, input order.
    pub products: Vec<DiscountedProduct>,
}

impl DiscountBucket {
    /// Display label for the box heading.
    pub fn label(&self) -> String {
        self.range.label()
    }

    /// Whether the bucket has nothing to show.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Derive all discount-tier buckets.
///
/// Products without a real discount (no mrp, or mrp <= price) compute to
/// 0% and therefore never enter a bucket.
pub fn discount_buckets(products: &[Product]) -> Vec<DiscountBucket> {
    DISCOUNT_RANGES
        .iter()
        .map(|range| DiscountBucket {
            range: *range,
            products: bucket_candidates(products, *range),
        })
        .collect()
}

/// First [`DISCOUNT_TIER_SIZE`] products whose discount falls in `range`,
/// input order. Shared with the Best Seller pick, which pools the three
/// candidate lists.
pub(crate) fn bucket_candidates(products: &[Product], range: DiscountRange) -> Vec<DiscountedProduct> {
    products
        .iter()
        .filter_map(|p| {
            let percent = p.discount_percent();
            (p.has_discount() && range.contains(percent)).then(|| DiscountedProduct {
                product: p.clone(),
                percent,
            })
        })
        .take(DISCOUNT_TIER_SIZE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};

    fn product(id: i64, price: f64, mrp: Option<f64>) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            category: "Fashion".to_string(),
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
    fn test_range_labels() {
        let labels: Vec<String> = DISCOUNT_RANGES.iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["20% Off", "40% Off", "50% Off"]);
    }

    #[test]
    fn test_ranges_are_half_open() {
        // Exactly 40% belongs to the 40 tier, not the 20 tier.
        let buckets = discount_buckets(&[product(1, 60.0, Some(100.0))]);
        assert!(buckets[0].is_empty());
        assert_eq!(buckets[1].products.len(), 1);
        assert_eq!(buckets[1].products[0].percent, 40);
    }

    #[test]
    fn test_products_without_discount_are_excluded() {
        let products = vec![
            product(1, 100.0, None),
            product(2, 100.0, Some(100.0)),
            product(3, 100.0, Some(90.0)),
        ];
        let buckets = discount_buckets(&products);
        assert!(buckets.iter().all(|b| b.is_empty()));
    }

    #[test]
    fn test_discount_above_top_range_is_excluded() {
        // 70% off falls outside every range.
        let buckets = discount_buckets(&[product(1, 30.0, Some(100.0))]);
        assert!(buckets.iter().all(|b| b.is_empty()));
    }

    #[test]
    fn test_first_five_in_input_order() {
        let products: Vec<Product> = (1..=7).map(|id| product(id, 75.0, Some(100.0))).collect();
        let buckets = discount_buckets(&products);

        assert_eq!(buckets[0].products.len(), DISCOUNT_TIER_SIZE);
        let ids: Vec<i64> = buckets[0]
            .products
            .iter()
            .map(|d| d.product.id.value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_rounding_decides_the_bucket() {
        // 39.6% rounds to 40 and lands in the 40 tier.
        let buckets = discount_buckets(&[product(1, 302.0, Some(500.0))]);
        assert!(buckets[0].is_empty());
        assert_eq!(buckets[1].products.len(), 1);
    }
}
