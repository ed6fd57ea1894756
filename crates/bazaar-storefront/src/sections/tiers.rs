//! Price-tier and discount-tier boxes.

use bazaar_commerce::catalog::Product;
use bazaar_commerce::curation::{DiscountBucket, PriceTierBucket};

/// Render the row of price-tier boxes. Empty buckets do not appear.
pub fn render_price_tiers(buckets: &[PriceTierBucket]) -> String {
    let boxes: String = buckets
        .iter()
        .filter(|bucket| !bucket.is_empty())
        .map(render_price_tier_box)
        .collect();

    if boxes.is_empty() {
        return String::new();
    }

    format!(
        r#"<section class="tier-row" data-section="price-tiers">
    {}
</section>"#,
        boxes
    )
}

fn render_price_tier_box(bucket: &PriceTierBucket) -> String {
    let max_rupees = bucket.tier.max_inclusive / 100;
    let cards: String = bucket
        .products
        .iter()
        .map(|p| render_compact_card(p, false))
        .collect();

    format!(
        r#"<div class="tier-box" data-tier="under-{max}">
        <div class="tier-header">
            <h2>{label}</h2>
            <a href="/products?maxPrice={max}" class="view-all">View All</a>
        </div>
        <div class="tier-grid">
            {cards}
        </div>
    </div>"#,
        max = max_rupees,
        label = html_escape(&bucket.label()),
        cards = cards
    )
}

/// Render the row of discount-tier boxes. Empty buckets do not appear.
pub fn render_discount_tiers(buckets: &[DiscountBucket]) -> String {
    let boxes: String = buckets
        .iter()
        .filter(|bucket| !bucket.is_empty())
        .map(render_discount_tier_box)
        .collect();

    if boxes.is_empty() {
        return String::new();
    }

    format!(
        r#"<section class="tier-row" data-section="discount-tiers">
    {}
</section>"#,
        boxes
    )
}

fn render_discount_tier_box(bucket: &DiscountBucket) -> String {
    let cards: String = bucket
        .products
        .iter()
        .map(|d| render_compact_card(&d.product, true))
        .collect();

    format!(
        r#"<div class="tier-box" data-tier="off-{min}">
        <div class="tier-header">
            <h2>{label}</h2>
            <a href="/products?discount={min}" class="view-all">View All</a>
        </div>
        <div class="tier-grid">
            {cards}
        </div>
    </div>"#,
        min = bucket.range.min,
        label = html_escape(&bucket.label()),
        cards = cards
    )
}

fn render_compact_card(product: &Product, show_badge: bool) -> String {
    let badge = if show_badge && product.has_discount() {
        format!(
            r#"<span class="discount-badge">{}% Off</span>"#,
            product.discount_percent()
        )
    } else {
        String::new()
    };

    let mrp = product
        .mrp
        .filter(|_| product.has_discount())
        .map(|m| format!(r#"<span class="card-mrp">{}</span>"#, m.display()))
        .unwrap_or_default();

    let image = product.image_url.as_deref().unwrap_or("/images/placeholder.svg");

    format!(
        r#"<article class="product-card product-card--compact" data-product-id="{id}">
            {badge}
            <a href="/product/{id}" class="product-link">
                <img src="{image}" alt="{name}" loading="lazy">
                <h3 class="card-name">{name}</h3>
                <div class="card-pricing">
                    <span class="card-price">{price}</span>
                    {mrp}
                </div>
            </a>
        </article>"#,
        id = product.id,
        badge = badge,
        image = html_escape(image),
        name = html_escape(&product.name),
        price = product.price.display(),
        mrp = mrp
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
