//! Rule-based curated picks: Best Seller, Trending, Featured Deal.
//!
//! Unlike the tier buckets these are all-or-nothing: each box needs
//! exactly [`SELECTION_SIZE`] products or it is not shown at all; a
//! half-filled 2x2 grid is worse than no grid.

use crate::catalog::Product;
use crate::curation::discount::{bucket_candidates, DiscountedProduct, DISCOUNT_RANGES};

/// Every curated pick box holds exactly this many products.
pub const SELECTION_SIZE: usize = 4;

/// Number of discounted products surfaced in the hero strip.
pub const HIGHLIGHT_SIZE: usize = 5;

/// Name patterns the Trending box tries to fill, in slot order.
const TRENDING_NAME_RULES: [&[&str]; 4] = [
    &["shirt", "t-shirt", "tshirt"],
    &["saree"],
    &["top"],
    &["jeans"],
];

/// Derive the Best Seller box.
///
/// The pool is the union of the three discount-tier candidate lists, each
/// entry remembering which tier it came from. After a descending sort by
/// discount percent, the fill is greedy: walk the sorted pool taking an
/// item only while its tier has fewer than two taken and fewer than two
/// are taken overall, then hand each still-empty tier its best candidate,
/// and flatten in tier order. Returns `None` unless exactly
/// [`SELECTION_SIZE`] products came together.
pub fn best_sellers(products: &[Product]) -> Option<Vec<Product>> {
    let mut pool: Vec<(usize, DiscountedProduct)> = Vec::new();
    for (tier, range) in DISCOUNT_RANGES.iter().enumerate() {
        for candidate in bucket_candidates(products, *range) {
            pool.push((tier, candidate));
        }
    }

    // Stable sort: equal discounts keep tier/input order.
    pool.sort_by(|a, b| b.1.percent.cmp(&a.1.percent));

    let mut groups: [Vec<&DiscountedProduct>; 3] = Default::default();
    let mut taken = 0;
    for (tier, candidate) in &pool {
        if groups[*tier].len() < 2 && taken < 2 {
            groups[*tier].push(candidate);
            taken += 1;
        }
    }

    // Backfill: every tier without a representative gets its
    // highest-discount candidate, if it has one.
    for tier in 0..groups.len() {
        if groups[tier].is_empty() {
            if let Some((_, candidate)) = pool.iter().find(|(t, _)| *t == tier) {
                groups[tier].push(candidate);
            }
        }
    }

    let picks: Vec<Product> = groups
        .iter()
        .flatten()
        .take(SELECTION_SIZE)
        .map(|c| c.product.clone())
        .collect();

    (picks.len() == SELECTION_SIZE).then_some(picks)
}

/// Derive the Trending box from the Fashion assortment.
///
/// The pool is every Fashion product, sorted ascending by discount
/// percent so full-price (newest-looking) items come first. Each name
/// rule claims the first unused pool item it matches; slots no rule could
/// fill are backfilled from the front of the pool. Returns `None` unless
/// exactly [`SELECTION_SIZE`] products came together.
pub fn trending_fashion(products: &[Product]) -> Option<Vec<Product>> {
    let mut pool: Vec<(&Product, i64)> = products
        .iter()
        .filter(|p| p.in_category("Fashion"))
        .map(|p| (p, p.discount_percent()))
        .collect();

    // Stable sort: equal discounts keep input order.
    pool.sort_by(|a, b| a.1.cmp(&b.1));

    let mut used = vec![false; pool.len()];
    let mut picks: Vec<&Product> = Vec::new();

    for patterns in TRENDING_NAME_RULES {
        let found = (0..pool.len())
            .find(|&i| !used[i] && patterns.iter().any(|pat| pool[i].0.name_contains(pat)));
        if let Some(i) = found {
            used[i] = true;
            picks.push(pool[i].0);
        }
    }

    for i in 0..pool.len() {
        if picks.len() == SELECTION_SIZE {
            break;
        }
        if !used[i] {
            used[i] = true;
            picks.push(pool[i].0);
        }
    }

    (picks.len() == SELECTION_SIZE).then(|| picks.into_iter().cloned().collect())
}

/// Derive the Featured Deal box: the four discounted products with the
/// highest list price (sorted by mrp, not by discount). Returns `None`
/// unless exactly [`SELECTION_SIZE`] qualify.
pub fn featured_deals(products: &[Product]) -> Option<Vec<Product>> {
    let mut pool: Vec<&Product> = products.iter().filter(|p| p.has_discount()).collect();

    // Stable sort: equal list prices keep input order.
    pool.sort_by(|a, b| mrp_minor(b).cmp(&mrp_minor(a)));

    let picks: Vec<Product> = pool.into_iter().take(SELECTION_SIZE).cloned().collect();
    (picks.len() == SELECTION_SIZE).then_some(picks)
}

/// First [`HIGHLIGHT_SIZE`] products carrying a real discount, input
/// order. The hero strip loads these with priority.
pub fn deal_highlights(products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.has_discount())
        .take(HIGHLIGHT_SIZE)
        .cloned()
        .collect()
}

fn mrp_minor(product: &Product) -> i64 {
    product.mrp.map(|m| m.amount_minor).unwrap_or(0)
}
