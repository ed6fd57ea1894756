//! Price-tier buckets.

use crate::catalog::Product;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum number of products shown per price tier.
pub const PRICE_TIER_SIZE: usize = 4;

/// The storefront price tiers, ascending. Bounds are half-open
/// `(min, max]` in minor units, so every price lands in at most one tier.
pub const PRICE_TIERS: [PriceTier; 3] = [
    PriceTier {
        min_exclusive: 0,
        max_inclusive: 19900,
    },
    PriceTier {
        min_exclusive: 19900,
        max_inclusive: 39900,
    },
    PriceTier {
        min_exclusive: 39900,
        max_inclusive: 59900,
    },
];

/// A price range over the raw selling price (not the discount).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceTier {
    /// Exclusive lower bound, minor units.
    pub min_exclusive: i64,
    /// Inclusive upper bound, minor units.
    pub max_inclusive: i64,
}

impl PriceTier {
    /// Display label (e.g., "Under ₹199").
    pub fn label(&self) -> String {
        format!(
            "Under {}{}",
            Currency::INR.symbol(),
            self.max_inclusive / 100
        )
    }

    /// Check whether a price falls in this tier.
    pub fn contains(&self, price: Money) -> bool {
        price.amount_minor > self.min_exclusive && price.amount_minor <= self.max_inclusive
    }
}

/// A price tier plus the products selected for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceTierBucket {
    /// The tier this bucket covers.
    pub tier: PriceTier,
    /// Up to [`PRICE_TIER_SIZE`] products, input order.
    pub products: Vec<Product>,
}

impl PriceTierBucket {
    /// Display label for the box heading.
    pub fn label(&self) -> String {
        self.tier.label()
    }

    /// Whether the bucket has nothing to show.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Derive all price-tier buckets.
///
/// Each tier is filtered independently over the full list; input order
/// alone decides which first four land in a bucket.
pub fn price_tier_buckets(products: &[Product]) -> Vec<PriceTierBucket> {
    PRICE_TIERS
        .iter()
        .map(|tier| PriceTierBucket {
            tier: *tier,
            products: products
                .iter()
                .filter(|p| tier.contains(p.price))
                .take(PRICE_TIER_SIZE)
                .cloned()
                .collect(),
        })
        .collect()
}
