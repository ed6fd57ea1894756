//! "Top {category}" blocks.

use bazaar_commerce::catalog::Product;
use bazaar_commerce::curation::CategoryBlock;

/// Render all category blocks; categories without products were already
/// dropped during derivation.
pub fn render_category_blocks(blocks: &[CategoryBlock]) -> String {
    if blocks.is_empty() {
        return String::new();
    }

    let blocks_html: String = blocks.iter().map(render_category_block).collect();

    format!(
        r#"<section class="category-blocks" data-section="categories">
    {}
</section>"#,
        blocks_html
    )
}

fn render_category_block(block: &CategoryBlock) -> String {
    let cards: String = block.products.iter().map(render_category_card).collect();

    format!(
        r#"<div class="category-block" data-category="{slug}">
        <div class="category-header">
            <h2>{title}</h2>
            <a href="/category/{slug}" class="view-all">View All</a>
        </div>
        <div class="category-grid">
            {cards}
        </div>
    </div>"#,
        slug = html_escape(&block.category.slug),
        title = html_escape(&block.title),
        cards = cards
    )
}

fn render_category_card(product: &Product) -> String {
    let image = product.image_url.as_deref().unwrap_or("/images/placeholder.svg");

    format!(
        r#"<article class="product-card product-card--compact" data-product-id="{id}">
            <a href="/product/{id}" class="product-link">
                <img src="{image}" alt="{name}" loading="lazy">
                <h3 class="card-name">{name}</h3>
                <span class="card-price">{price}</span>
            </a>
        </article>"#,
        id = product.id,
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
