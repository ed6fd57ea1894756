//! Product catalog module.
//!
//! Contains the canonical product and variant shapes, the storefront
//! category list, and the feed boundary that normalizes raw listing-API
//! records into canonical products.

mod category;
mod feed;
mod product;

pub use category::{slugify, storefront_categories, Category};
pub use feed::{order_by_ids, parse_feed, ProductRecord, RECENT_LIMIT};
pub use product::{DealOfTheDay, Product, Variant};
