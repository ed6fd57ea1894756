//! Product feed boundary.
//!
//! The listing API serves JSON product records with camelCase field names,
//! with a few legacy snake_case spellings still in circulation. All of
//! that is absorbed here: [`ProductRecord`] is the wire shape, and
//! [`ProductRecord::normalize`] produces the canonical [`Product`] the
//! rest of the crate works with. Nothing past this module special-cases
//! field-name variants.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::Deserialize;

/// How many recently-viewed / browsing-history products to surface.
pub const RECENT_LIMIT: usize = 5;

/// One raw product record as served by the listing API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub mrp: Option<f64>,
    #[serde(default, alias = "delivery_charges")]
    pub delivery_charges: Option<f64>,
    #[serde(default, alias = "is_deal_of_the_day")]
    pub is_deal_of_the_day: bool,
    #[serde(default, alias = "image_url", alias = "image")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl ProductRecord {
    /// Normalize into the canonical product shape.
    ///
    /// Malformed numerics degrade rather than error: a non-positive mrp
    /// is dropped (no discount), a negative delivery charge becomes
    /// "free delivery", and a missing category becomes the empty string
    /// (matching no storefront category).
    pub fn normalize(self, currency: Currency) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            category: self.category.unwrap_or_default(),
            subcategory: self.subcategory,
            price: Money::from_decimal(self.price.max(0.0), currency),
            mrp: self
                .mrp
                .filter(|m| *m > 0.0)
                .map(|m| Money::from_decimal(m, currency)),
            delivery_charges: self
                .delivery_charges
                .filter(|c| *c > 0.0)
                .map(|c| Money::from_decimal(c, currency)),
            is_deal_of_the_day: self.is_deal_of_the_day,
            image_url: self.image_url,
            images: self.images,
        }
    }
}

/// Parse one page of the product feed into canonical products.
pub fn parse_feed(json: &str, currency: Currency) -> Result<Vec<Product>, CommerceError> {
    let records: Vec<ProductRecord> = serde_json::from_str(json)?;
    Ok(records
        .into_iter()
        .map(|r| r.normalize(currency))
        .collect())
}

/// Re-order a fetched batch to match a stored id list.
///
/// The recently-viewed and browsing-history strips store product ids
/// newest-first; the batch fetch returns products in arbitrary order.
/// Ids that did not resolve are dropped, and at most [`RECENT_LIMIT`]
/// products are returned.
pub fn order_by_ids(ids: &[ProductId], fetched: &[Product]) -> Vec<Product> {
    ids.iter()
        .take(RECENT_LIMIT)
        .filter_map(|id| fetched.iter().find(|p| p.id == *id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_camel_case_record() {
        let json = r#"{
            "id": 12,
            "name": "Silk Saree",
            "category": "Fashion",
            "price": 499.0,
            "mrp": 999.0,
            "deliveryCharges": 40.0,
            "isDealOfTheDay": true,
            "imageUrl": "https://cdn.example/s.jpg"
        }"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        let product = record.normalize(Currency::INR);

        assert_eq!(product.id, ProductId::new(12));
        assert_eq!(product.price.amount_minor, 49900);
        assert_eq!(product.mrp.unwrap().amount_minor, 99900);
        assert_eq!(product.delivery_charges.unwrap().amount_minor, 4000);
        assert!(product.is_deal_of_the_day);
        assert_eq!(product.image_url.as_deref(), Some("https://cdn.example/s.jpg"));
    }

    #[test]
    fn test_normalize_accepts_legacy_snake_case() {
        let json = r#"{
            "id": 3,
            "name": "Mixer",
            "category": "Appliances",
            "price": 1500.0,
            "delivery_charges": 60.0,
            "image_url": "https://cdn.example/m.jpg"
        }"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        let product = record.normalize(Currency::INR);

        assert_eq!(product.delivery_charges.unwrap().amount_minor, 6000);
        assert_eq!(product.image_url.as_deref(), Some("https://cdn.example/m.jpg"));
    }

    #[test]
    fn test_normalize_degrades_malformed_numerics() {
        let json = r#"{"id": 4, "name": "Broken", "price": -10.0, "mrp": 0.0, "deliveryCharges": -5.0}"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        let product = record.normalize(Currency::INR);

        assert!(product.price.is_zero());
        assert!(product.mrp.is_none());
        assert!(product.delivery_charges.is_none());
        assert_eq!(product.discount_percent(), 0);
    }

    #[test]
    fn test_parse_feed() {
        let json = r#"[
            {"id": 1, "name": "A", "category": "Toys", "price": 100.0},
            {"id": 2, "name": "B", "category": "Toys", "price": 250.0}
        ]"#;
        let products = parse_feed(json, Currency::INR).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].price.amount_minor, 25000);
    }

    #[test]
    fn test_parse_feed_rejects_invalid_json() {
        assert!(parse_feed("not json", Currency::INR).is_err());
    }

    #[test]
    fn test_order_by_ids_keeps_stored_order_and_drops_missing() {
        let products = parse_feed(
            r#"[
                {"id": 1, "name": "A", "price": 10.0},
                {"id": 2, "name": "B", "price": 20.0},
                {"id": 3, "name": "C", "price": 30.0}
            ]"#,
            Currency::INR,
        )
        .unwrap();

        let ids = [ProductId::new(3), ProductId::new(99), ProductId::new(1)];
        let ordered = order_by_ids(&ids, &products);

        assert_eq!(ordered.len(), 2);
        assert_eq!(ordered[0].name, "C");
        assert_eq!(ordered[1].name, "A");
    }

    #[test]
    fn test_order_by_ids_caps_at_recent_limit() {
        let products = parse_feed(
            r#"[
                {"id": 1, "name": "A", "price": 10.0},
                {"id": 2, "name": "B", "price": 10.0},
                {"id": 3, "name": "C", "price": 10.0},
                {"id": 4, "name": "D", "price": 10.0},
                {"id": 5, "name": "E", "price": 10.0},
                {"id": 6, "name": "F", "price": 10.0}
            ]"#,
            Currency::INR,
        )
        .unwrap();

        let ids: Vec<ProductId> = (1..=6).map(ProductId::new).collect();
        assert_eq!(order_by_ids(&ids, &products).len(), RECENT_LIMIT);
    }
}
