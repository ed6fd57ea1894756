//! Cart and line item types.

use crate::cart::{CartTotals, LineTotals};
use crate::catalog::{Product, Variant};
use crate::ids::{LineItemId, ProductId, VariantId};
use crate::money::{Currency, Money};
use crate::session::Session;
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Holds the authoritative list of line items for one session and derives
/// monetary totals on demand. Mutations are best-effort: an id that
/// matches no line is a silent no-op, never an error; the UI simply
/// re-renders whatever state the cart is in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Owning session (guest or authenticated).
    pub session: Session,
    /// Cart currency.
    pub currency: Currency,
    /// Items in the cart.
    items: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart for a session.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            currency: Currency::INR,
            items: Vec::new(),
        }
    }

    /// Add an item to the cart.
    ///
    /// If a line for the same product/variant combination already exists,
    /// its quantity is incremented instead of creating a duplicate line.
    /// The quantity is clamped to >= 1 before insertion. Returns the id of
    /// the affected line.
    pub fn add_item(
        &mut self,
        product: Product,
        variant: Option<Variant>,
        quantity: i64,
    ) -> LineItemId {
        let quantity = quantity.max(1);
        let variant_id = variant.as_ref().map(|v| v.id);

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|line| line.matches(product.id, variant_id))
        {
            existing.quantity += quantity;
            tracing::debug!(
                line = %existing.id,
                quantity = existing.quantity,
                "merged into existing cart line"
            );
            return existing.id;
        }

        let line = CartLine {
            id: LineItemId::generate(),
            product,
            variant,
            quantity,
        };
        let id = line.id;
        tracing::debug!(line = %id, quantity, "added cart line");
        self.items.push(line);
        id
    }

    /// Set a line's quantity to `max(1, quantity)`.
    ///
    /// Removal is a separate, explicit action; decreasing past 1 clamps.
    /// Unknown ids are ignored.
    pub fn update_quantity(&mut self, line_id: LineItemId, quantity: i64) {
        match self.items.iter_mut().find(|line| line.id == line_id) {
            Some(line) => {
                line.quantity = quantity.max(1);
                tracing::debug!(line = %line_id, quantity = line.quantity, "updated quantity");
            }
            None => {
                tracing::debug!(line = %line_id, "quantity update for unknown line ignored");
            }
        }
    }

    /// Remove a line from the cart. Returns whether a line was removed.
    pub fn remove_item(&mut self, line_id: LineItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|line| line.id != line_id);
        let removed = self.items.len() < len_before;
        if removed {
            tracing::debug!(line = %line_id, "removed cart line");
        }
        removed
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        tracing::debug!(lines = self.items.len(), "cleared cart");
        self.items.clear();
    }

    /// Current line items, in insertion order.
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Get a line by id.
    pub fn get_line(&self, line_id: LineItemId) -> Option<&CartLine> {
        self.items.iter().find(|line| line.id == line_id)
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Compute the totals for the current lines.
    ///
    /// Pure function of the line items, recomputed on every read; the
    /// list is small enough that caching would buy nothing.
    pub fn totals(&self) -> CartTotals {
        let line_items: Vec<LineTotals> = self
            .items
            .iter()
            .map(|line| LineTotals {
                line_id: line.id,
                unit_price: line.unit_price(),
                quantity: line.quantity,
                subtotal: line.unit_price().multiply(line.quantity),
                delivery: line.product.delivery_charge().multiply(line.quantity),
            })
            .collect();

        let subtotal = Money::sum(line_items.iter().map(|l| &l.subtotal), self.currency);
        let delivery_total = Money::sum(line_items.iter().map(|l| &l.delivery), self.currency);
        let grand_total = subtotal + delivery_total;

        CartTotals {
            subtotal,
            delivery_total,
            grand_total,
            line_items,
        }
    }
}

/// One entry in the cart: a product, an optional variant, and a quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Stable, client-generated line id, assigned once at creation so
    /// removing a line never shifts the ids of its neighbours.
    pub id: LineItemId,
    /// The product being purchased.
    pub product: Product,
    /// The specific variant, if one was chosen.
    pub variant: Option<Variant>,
    /// Quantity, always >= 1.
    pub quantity: i64,
}

impl CartLine {
    /// Effective unit price for this line.
    ///
    /// Deal price beats variant price beats base price: a deal-of-the-day
    /// product always sells at its deal price even when a variant with its
    /// own price is attached.
    pub fn unit_price(&self) -> Money {
        match &self.variant {
            Some(variant) if !self.product.is_deal_of_the_day => variant.price,
            _ => self.product.price,
        }
    }

    fn matches(&self, product_id: ProductId, variant_id: Option<VariantId>) -> bool {
        self.product.id == product_id && self.variant.as_ref().map(|v| v.id) == variant_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product(id: i64, price: f64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            category: "Fashion".to_string(),
            subcategory: None,
            price: Money::from_decimal(price, Currency::INR),
            mrp: None,
            delivery_charges: None,
            is_deal_of_the_day: false,
            image_url: None,
            images: Vec::new(),
        }
    }

    fn variant(id: i64, product_id: i64, price: f64) -> Variant {
        Variant {
            id: VariantId::new(id),
            product_id: ProductId::new(product_id),
            sku: format!("SKU-{}", id),
            price: Money::from_decimal(price, Currency::INR),
            mrp: None,
            stock: 10,
            color: None,
            size: None,
        }
    }

    fn new_cart() -> Cart {
        Cart::new(Session::guest("sess-test"))
    }

    #[test]
    fn test_add_item() {
        let mut cart = new_cart();
        cart.add_item(product(1, 100.0), None, 2);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_add_same_product_merges_lines() {
        let mut cart = new_cart();
        let first = cart.add_item(product(1, 100.0), None, 2);
        let second = cart.add_item(product(1, 100.0), None, 3);

        assert_eq!(first, second);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_different_variants_get_separate_lines() {
        let mut cart = new_cart();
        cart.add_item(product(1, 100.0), Some(variant(1, 1, 100.0)), 1);
        cart.add_item(product(1, 100.0), Some(variant(2, 1, 110.0)), 1);
        cart.add_item(product(1, 100.0), None, 1);

        assert_eq!(cart.unique_item_count(), 3);
    }

    #[test]
    fn test_add_clamps_quantity_to_one() {
        let mut cart = new_cart();
        cart.add_item(product(1, 100.0), None, 0);
        assert_eq!(cart.item_count(), 1);

        let mut cart = new_cart();
        cart.add_item(product(1, 100.0), None, -5);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_update_quantity_clamps_to_one() {
        let mut cart = new_cart();
        let line = cart.add_item(product(1, 100.0), None, 3);

        cart.update_quantity(line, 0);
        assert_eq!(cart.get_line(line).unwrap().quantity, 1);

        cart.update_quantity(line, -2);
        assert_eq!(cart.get_line(line).unwrap().quantity, 1);

        cart.update_quantity(line, 7);
        assert_eq!(cart.get_line(line).unwrap().quantity, 7);
    }

    #[test]
    fn test_update_unknown_line_is_silent_noop() {
        let mut cart = new_cart();
        cart.add_item(product(1, 100.0), None, 2);
        cart.update_quantity(LineItemId::new(-1), 5);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = new_cart();
        let line = cart.add_item(product(1, 100.0), None, 1);

        assert!(cart.remove_item(line));
        assert!(cart.is_empty());
        assert!(!cart.remove_item(line));
    }

    #[test]
    fn test_removing_a_line_keeps_other_ids_stable() {
        let mut cart = new_cart();
        let first = cart.add_item(product(1, 100.0), None, 1);
        let second = cart.add_item(product(2, 200.0), None, 1);

        cart.remove_item(first);
        assert!(cart.get_line(second).is_some());
        cart.update_quantity(second, 4);
        assert_eq!(cart.get_line(second).unwrap().quantity, 4);
    }

    #[test]
    fn test_clear() {
        let mut cart = new_cart();
        cart.add_item(product(1, 100.0), None, 1);
        cart.add_item(product(2, 200.0), None, 1);
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals() {
        let mut cart = new_cart();
        let mut p1 = product(1, 100.0);
        p1.delivery_charges = Some(Money::from_decimal(10.0, Currency::INR));
        cart.add_item(p1, None, 2);
        cart.add_item(product(2, 50.0), None, 1);

        let totals = cart.totals();
        assert_eq!(totals.subtotal.amount_minor, 25000);
        assert_eq!(totals.delivery_total.amount_minor, 2000);
        assert_eq!(totals.grand_total.amount_minor, 27000);
    }

    #[test]
    fn test_variant_price_used_when_attached() {
        let mut cart = new_cart();
        cart.add_item(product(1, 100.0), Some(variant(1, 1, 120.0)), 1);
        assert_eq!(cart.totals().subtotal.amount_minor, 12000);
    }

    #[test]
    fn test_deal_price_beats_variant_price() {
        let mut cart = new_cart();
        let mut deal = product(1, 80.0);
        deal.is_deal_of_the_day = true;
        cart.add_item(deal, Some(variant(1, 1, 120.0)), 1);
        assert_eq!(cart.totals().subtotal.amount_minor, 8000);
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let totals = new_cart().totals();
        assert!(totals.subtotal.is_zero());
        assert!(totals.delivery_total.is_zero());
        assert!(totals.grand_total.is_zero());
    }
}
