//! Shopping cart module.
//!
//! Contains the cart, its line items, and the derived totals.

mod cart;
mod pricing;

pub use cart::{Cart, CartLine};
pub use pricing::{CartTotals, LineTotals};
