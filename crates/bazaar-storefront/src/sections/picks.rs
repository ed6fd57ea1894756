//! Curated pick boxes: Best Seller, Trending, Featured Deal.

use bazaar_commerce::catalog::Product;

/// Render the Best Seller box; absent selections render nothing.
pub fn render_best_sellers(picks: Option<&[Product]>) -> String {
    match picks {
        Some(products) => render_pick_box("Best Seller", "best-seller", None, products, false),
        None => String::new(),
    }
}

/// Render the Trending Products box; absent selections render nothing.
pub fn render_trending(picks: Option<&[Product]>) -> String {
    match picks {
        Some(products) => render_pick_box("Trending Products", "trending", None, products, true),
        None => String::new(),
    }
}

/// Render the Featured Deal box; absent selections render nothing.
pub fn render_featured_deals(picks: Option<&[Product]>) -> String {
    match picks {
        Some(products) => render_pick_box(
            "Featured Deal",
            "featured-deal",
            Some("/products?sort=featured"),
            products,
            true,
        ),
        None => String::new(),
    }
}

fn render_pick_box(
    title: &str,
    section: &str,
    view_all: Option<&str>,
    products: &[Product],
    show_badge: bool,
) -> String {
    let view_all_html = view_all
        .map(|href| format!(r#"<a href="{}" class="view-all">View All</a>"#, href))
        .unwrap_or_default();

    let cards: String = products
        .iter()
        .map(|p| render_pick_card(p, show_badge))
        .collect();

    format!(
        r#"<div class="pick-box" data-section="{section}">
        <div class="pick-header">
            <h2>{title}</h2>
            {view_all}
        </div>
        <div class="pick-grid">
            {cards}
        </div>
    </div>"#,
        section = section,
        title = html_escape(title),
        view_all = view_all_html,
        cards = cards
    )
}

fn render_pick_card(product: &Product, show_badge: bool) -> String {
    let badge = if show_badge && product.has_discount() {
        format!(
            r#"<span class="discount-badge">{}% Off</span>"#,
            product.discount_percent()
        )
    } else {
        String::new()
    };

    let image = product.image_url.as_deref().unwrap_or("/images/placeholder.svg");

    format!(
        r#"<article class="product-card product-card--compact" data-product-id="{id}">
            {badge}
            <a href="/product/{id}" class="product-link">
                <img src="{image}" alt="{name}" loading="lazy">
                <h3 class="card-name">{name}</h3>
                <span class="card-price">{price}</span>
            </a>
        </article>"#,
        id = product.id,
        badge = badge,
        image = html_escape(image),
        name = html_escape(&product.name),
        price = product.price.display()
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
