//! Cart actions.
//!
//! Every mutation of the cart goes through a [`CartAction`]. Actions are
//! plain data, so they can be logged, serialized, and replayed against an
//! empty state to rebuild a cart.

use crate::ids::ProductId;
use crate::product::Product;
use serde::{Deserialize, Serialize};

/// A single cart operation with its payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum CartAction {
    /// Add a product to the cart, or bump its quantity if already present.
    AddItem(Product),
    /// Remove a product's line item entirely.
    RemoveItem(ProductId),
    /// Empty the cart.
    Clear,
    /// Increase a line item's quantity by one.
    IncreaseQuantity(ProductId),
    /// Decrease a line item's quantity by one, stopping at one.
    DecreaseQuantity(ProductId),
}

impl CartAction {
    /// Stable name for this action kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::AddItem(_) => "add_item",
            CartAction::RemoveItem(_) => "remove_item",
            CartAction::Clear => "clear",
            CartAction::IncreaseQuantity(_) => "increase_quantity",
            CartAction::DecreaseQuantity(_) => "decrease_quantity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_kinds() {
        let product = Product::new(1, "Product A", 6000);
        assert_eq!(CartAction::AddItem(product).kind(), "add_item");
        assert_eq!(CartAction::RemoveItem(ProductId::new(1)).kind(), "remove_item");
        assert_eq!(CartAction::Clear.kind(), "clear");
        assert_eq!(
            CartAction::IncreaseQuantity(ProductId::new(1)).kind(),
            "increase_quantity"
        );
        assert_eq!(
            CartAction::DecreaseQuantity(ProductId::new(1)).kind(),
            "decrease_quantity"
        );
    }

    #[test]
    fn test_action_serialization() {
        let action = CartAction::AddItem(Product::new(1, "Product A", 6000));
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"add_item","payload":{"id":1,"name":"Product A","price_cents":6000}}"#
        );

        let clear = serde_json::to_string(&CartAction::Clear).unwrap();
        assert_eq!(clear, r#"{"kind":"clear"}"#);

        let deserialized: CartAction = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, action);
    }
}
