//! Product and variant types.

use crate::ids::{ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are supplied by the listing collaborator and are immutable
/// from this crate's perspective; a changed product arrives as a re-fetch,
/// never as an in-place mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category name (e.g., "Fashion").
    pub category: String,
    /// Subcategory name, if any (e.g., "Sarees").
    pub subcategory: Option<String>,
    /// Selling price.
    pub price: Money,
    /// Maximum retail price, i.e. the pre-discount list price.
    pub mrp: Option<Money>,
    /// Per-unit delivery charge; absent means free delivery.
    pub delivery_charges: Option<Money>,
    /// Whether this product is today's featured deal.
    pub is_deal_of_the_day: bool,
    /// Primary image URL.
    pub image_url: Option<String>,
    /// Additional image URLs.
    pub images: Vec<String>,
}

impl Product {
    /// Check whether the product carries a real discount (mrp > price).
    pub fn has_discount(&self) -> bool {
        self.mrp
            .map(|mrp| mrp.amount_minor > self.price.amount_minor)
            .unwrap_or(false)
    }

    /// Discount percentage, rounded to the nearest integer.
    ///
    /// `round((mrp - price) / mrp * 100)` when the product has a real
    /// discount; 0 when mrp is absent or mrp <= price.
    pub fn discount_percent(&self) -> i64 {
        match self.mrp {
            Some(mrp) if mrp.amount_minor > self.price.amount_minor => {
                let savings = (mrp.amount_minor - self.price.amount_minor) as f64;
                (savings / mrp.amount_minor as f64 * 100.0).round() as i64
            }
            _ => 0,
        }
    }

    /// Per-unit delivery charge, zero when absent.
    pub fn delivery_charge(&self) -> Money {
        self.delivery_charges
            .unwrap_or_else(|| Money::zero(self.price.currency))
    }

    /// Case-insensitive category match.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }

    /// Case-insensitive substring match on the product name.
    pub fn name_contains(&self, pattern: &str) -> bool {
        self.name.to_lowercase().contains(&pattern.to_lowercase())
    }
}

/// A purchasable variant of a product (a color/size combination).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Parent product ID.
    pub product_id: ProductId,
    /// Stock keeping unit.
    pub sku: String,
    /// Price of this variant.
    pub price: Money,
    /// List price of this variant, if discounted.
    pub mrp: Option<Money>,
    /// Units in stock.
    pub stock: i64,
    /// Color option, if any.
    pub color: Option<String>,
    /// Size option, if any.
    pub size: Option<String>,
}

impl Variant {
    /// Check if this variant can currently be purchased.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Build a short display label from the options (e.g., "Blue / L").
    pub fn label(&self) -> String {
        match (&self.color, &self.size) {
            (Some(c), Some(s)) => format!("{} / {}", c, s),
            (Some(c), None) => c.clone(),
            (None, Some(s)) => s.clone(),
            (None, None) => self.sku.clone(),
        }
    }
}

/// Display payload for the hero deal-of-the-day card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DealOfTheDay {
    /// Headline.
    pub title: String,
    /// Supporting line.
    pub subtitle: String,
    /// Banner image URL.
    pub image: String,
    /// List price before the deal.
    pub original_price: Money,
    /// Deal price.
    pub discount_price: Money,
    /// Advertised discount percentage.
    pub discount_percentage: i64,
    /// Countdown hours remaining.
    pub hours: i64,
    /// Countdown minutes remaining.
    pub minutes: i64,
    /// Countdown seconds remaining.
    pub seconds: i64,
    /// Product the deal links to, when known.
    pub product_id: Option<ProductId>,
}
