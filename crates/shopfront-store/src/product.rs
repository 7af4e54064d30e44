//! Catalog product type.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A purchasable product as listed in the catalog.
///
/// Products are immutable value objects. When one is added to the cart,
/// the cart copies its fields into a line item; the catalog entry itself
/// is never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in cents.
    pub price_cents: i64,
}

impl Product {
    /// Create a new product.
    pub fn new(id: u64, name: impl Into<String>, price_cents: i64) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price_cents,
        }
    }

    /// Format the unit price as a dollar string.
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price_cents as f64 / 100.0)
    }
}
