//! Home page and cart section renderers.
//!
//! Each renderer is a pure function from derived data to an HTML string;
//! sections with nothing to show render to the empty string and simply
//! do not appear.

mod cart;
mod categories;
mod hero;
mod picks;
mod tiers;

pub use cart::{render_cart_empty, render_cart_page};
pub use categories::render_category_blocks;
pub use hero::{render_hero, render_hero_empty};
pub use picks::{render_best_sellers, render_featured_deals, render_trending};
pub use tiers::{render_discount_tiers, render_price_tiers};
