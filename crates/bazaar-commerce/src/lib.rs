//! E-commerce domain types and logic for the Bazaar storefront.
//!
//! This crate holds the storefront's core data transformations:
//!
//! - **Catalog**: canonical product/variant shapes and the feed boundary
//!   that normalizes raw listing-API records
//! - **Cart**: the session cart with line items and derived totals
//! - **Curation**: the home-page merchandising buckets (price tiers,
//!   discount tiers, best seller, trending, featured deal, category
//!   blocks)
//! - **Marketing**: affiliate discount codes
//!
//! # Example
//!
//! ```rust,ignore
//! use bazaar_commerce::prelude::*;
//!
//! // Normalize one page of the product feed.
//! let products = parse_feed(&page_json, Currency::INR)?;
//!
//! // Derive everything the home page shows.
//! let home = HomeCuration::derive(&products);
//!
//! // Run a cart for the session.
//! let mut cart = Cart::new(Session::guest(token));
//! cart.add_item(products[0].clone(), None, 1);
//! let totals = cart.totals();
//! println!("Total: {}", totals.grand_total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod session;

pub mod cart;
pub mod catalog;
pub mod curation;
pub mod marketing;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use session::Session;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::session::Session;

    // Catalog
    pub use crate::catalog::{
        order_by_ids, parse_feed, storefront_categories, Category, DealOfTheDay, Product,
        ProductRecord, Variant,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine, CartTotals, LineTotals};

    // Curation
    pub use crate::curation::{
        best_sellers, category_blocks, deal_highlights, discount_buckets, featured_deals,
        price_tier_buckets, top_in_category, trending_fashion, CategoryBlock, DiscountBucket,
        DiscountedProduct, HomeCuration, PriceTierBucket,
    };

    // Marketing
    pub use crate::marketing::{AffiliateCode, AffiliateRegistry, NewAffiliateCode};
}
