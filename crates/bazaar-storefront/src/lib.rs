//! Home page and cart section renderers for the Bazaar storefront.
//!
//! Pure presentation over `bazaar-commerce`: every renderer takes derived
//! data and returns an HTML string. Fetching, routing, and response
//! streaming live in the serving layer, not here.

mod data;
mod sections;

pub use data::SliderImage;
pub use sections::*;

use bazaar_commerce::catalog::DealOfTheDay;
use bazaar_commerce::curation::HomeCuration;

/// Assemble the home page from a derived curation.
///
/// Section order matches the storefront layout: hero, price tiers, the
/// curated pick row, discount tiers, then the category blocks. Sections
/// with nothing to show contribute nothing.
pub fn render_home_page(
    home: &HomeCuration,
    slides: &[SliderImage],
    deal: Option<&DealOfTheDay>,
) -> String {
    let picks_row = [
        render_best_sellers(home.best_sellers.as_deref()),
        render_trending(home.trending.as_deref()),
        render_featured_deals(home.featured_deals.as_deref()),
    ]
    .concat();

    let picks_section = if picks_row.is_empty() {
        String::new()
    } else {
        format!(
            r#"<section class="pick-row" data-section="picks">
    {}
</section>"#,
            picks_row
        )
    };

    [
        render_hero(slides, deal),
        render_price_tiers(&home.price_tiers),
        picks_section,
        render_discount_tiers(&home.discount_tiers),
        render_category_blocks(&home.category_blocks),
    ]
    .concat()
}
