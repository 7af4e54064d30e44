//! Cart line item type.

use crate::ids::ProductId;
use crate::product::Product;
use serde::{Deserialize, Serialize};

/// A line item in the cart: one product together with a quantity.
///
/// Quantity is always at least 1. Decreasing a quantity of 1 is a no-op;
/// taking the product out of the cart entirely is a separate operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product identifier (unique within the cart).
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price in cents.
    pub price_cents: i64,
    /// Quantity, always >= 1.
    pub quantity: u32,
}

impl CartItem {
    /// Line subtotal in cents (unit price times quantity).
    pub fn subtotal_cents(&self) -> i64 {
        self.price_cents * self.quantity as i64
    }

    /// Format the unit price as a dollar string.
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price_cents as f64 / 100.0)
    }

    /// Format the line subtotal as a dollar string.
    pub fn subtotal_display(&self) -> String {
        format!("${:.2}", self.subtotal_cents() as f64 / 100.0)
    }
}

impl From<Product> for CartItem {
    /// A product entering the cart becomes a line item at quantity 1.
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price_cents: product.price_cents,
            quantity: 1,
        }
    }
}
