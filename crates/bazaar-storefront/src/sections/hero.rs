//! Hero carousel section with the deal-of-the-day card.

use crate::data::SliderImage;
use bazaar_commerce::catalog::DealOfTheDay;

/// Render the hero carousel.
pub fn render_hero(slides: &[SliderImage], deal: Option<&DealOfTheDay>) -> String {
    if slides.is_empty() {
        return render_hero_empty();
    }

    let slides_html: String = slides.iter().enumerate().map(render_slide).collect();
    let deal_html = deal.map(render_deal_card).unwrap_or_default();

    format!(
        r#"<section class="hero" data-section="hero">
    <div class="hero-slider">
        {slides}
    </div>
    {deal}
</section>"#,
        slides = slides_html,
        deal = deal_html
    )
}

fn render_slide((index, slide): (usize, &SliderImage)) -> String {
    let caption = match (&slide.title, &slide.subtitle) {
        (Some(title), Some(subtitle)) => format!(
            r#"<div class="hero-caption"><h2>{}</h2><p>{}</p></div>"#,
            html_escape(title),
            html_escape(subtitle)
        ),
        (Some(title), None) => format!(
            r#"<div class="hero-caption"><h2>{}</h2></div>"#,
            html_escape(title)
        ),
        _ => String::new(),
    };

    let link = slide.link.as_deref().unwrap_or("/");

    format!(
        r#"<a href="{}" class="hero-slide" data-slide="{}">
        <img src="{}" alt="{}" loading="{}">
        {}
    </a>"#,
        html_escape(link),
        index,
        html_escape(&slide.url),
        html_escape(&slide.alt),
        if index == 0 { "eager" } else { "lazy" },
        caption
    )
}

fn render_deal_card(deal: &DealOfTheDay) -> String {
    let link = deal
        .product_id
        .map(|id| format!("/product/{}", id))
        .unwrap_or_else(|| "/products?sort=deal".to_string());

    format!(
        r#"<aside class="deal-of-the-day" data-section="deal-of-the-day">
        <span class="deal-badge">{}% Off</span>
        <h3 class="deal-title">{}</h3>
        <p class="deal-subtitle">{}</p>
        <img src="{}" alt="{}" class="deal-image">
        <div class="deal-pricing">
            <span class="deal-price">{}</span>
            <span class="deal-original-price">{}</span>
        </div>
        <span class="deal-countdown" data-hours="{}" data-minutes="{}" data-seconds="{}"></span>
        <a href="{}" class="deal-link">Shop Now</a>
    </aside>"#,
        deal.discount_percentage,
        html_escape(&deal.title),
        html_escape(&deal.subtitle),
        html_escape(&deal.image),
        html_escape(&deal.title),
        deal.discount_price.display(),
        deal.original_price.display(),
        deal.hours,
        deal.minutes,
        deal.seconds,
        html_escape(&link)
    )
}

/// Render the hero placeholder shown when no banners are configured.
pub fn render_hero_empty() -> String {
    r#"<section class="hero hero--empty" data-section="hero">
    <div class="hero-placeholder">
        <p>No banners configured</p>
    </div>
</section>"#
        .to_string()
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
