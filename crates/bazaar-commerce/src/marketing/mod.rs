//! Marketing module.
//!
//! Affiliate-marketing discount codes and their registry.

mod affiliate;

pub use affiliate::{AffiliateCode, AffiliateRegistry, NewAffiliateCode};
