//! Cart totals.

use crate::ids::LineItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Monetary breakdown for a whole cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of unit price x quantity across lines.
    pub subtotal: Money,
    /// Sum of per-unit delivery charges x quantity across lines.
    pub delivery_total: Money,
    /// subtotal + delivery.
    pub grand_total: Money,
    /// Per-line breakdown, in line order.
    pub line_items: Vec<LineTotals>,
}

impl CartTotals {
    /// Whether any line carries a delivery charge.
    pub fn has_delivery_charges(&self) -> bool {
        self.delivery_total.is_positive()
    }
}

/// Monetary breakdown for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineTotals {
    /// Line item ID.
    pub line_id: LineItemId,
    /// Effective unit price (deal > variant > base).
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// unit_price x quantity.
    pub subtotal: Money,
    /// Delivery charge for this line.
    pub delivery: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_has_delivery_charges() {
        let totals = CartTotals {
            subtotal: Money::new(25000, Currency::INR),
            delivery_total: Money::new(2000, Currency::INR),
            grand_total: Money::new(27000, Currency::INR),
            line_items: vec![],
        };
        assert!(totals.has_delivery_charges());

        let free = CartTotals {
            subtotal: Money::new(25000, Currency::INR),
            delivery_total: Money::zero(Currency::INR),
            grand_total: Money::new(25000, Currency::INR),
            line_items: vec![],
        };
        assert!(!free.has_delivery_charges());
    }
}
