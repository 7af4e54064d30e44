//! Cart state container.

use crate::cart::CartItem;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// The cart's entire state: an ordered list of line items.
///
/// Insertion order is preserved for display. At most one line item exists
/// per product id; the reducer upholds that invariant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartState {
    /// Items currently in the cart, in insertion order.
    pub cart_items: Vec<CartItem>,
}

impl CartState {
    /// Create an empty cart state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart_items.is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn unique_item_count(&self) -> usize {
        self.cart_items.len()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.cart_items.iter().map(|i| i.quantity).sum()
    }

    /// Cart subtotal in cents.
    pub fn subtotal_cents(&self) -> i64 {
        self.cart_items.iter().map(|i| i.subtotal_cents()).sum()
    }

    /// Format the cart subtotal as a dollar string.
    pub fn subtotal_display(&self) -> String {
        format!("${:.2}", self.subtotal_cents() as f64 / 100.0)
    }

    /// Get the line item for a product, if present.
    pub fn get_item(&self, id: ProductId) -> Option<&CartItem> {
        self.cart_items.iter().find(|i| i.id == id)
    }

    /// Check whether a product is in the cart.
    pub fn contains(&self, id: ProductId) -> bool {
        self.get_item(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Product;

    fn state_with(products: Vec<(Product, u32)>) -> CartState {
        let mut state = CartState::new();
        for (product, quantity) in products {
            let mut item = CartItem::from(product);
            item.quantity = quantity;
            state.cart_items.push(item);
        }
        state
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = CartState::new();
        assert!(state.is_empty());
        assert_eq!(state.unique_item_count(), 0);
        assert_eq!(state.item_count(), 0);
        assert_eq!(state.subtotal_cents(), 0);
    }

    #[test]
    fn test_counts() {
        let state = state_with(vec![
            (Product::new(1, "Product A", 6000), 2),
            (Product::new(2, "Product B", 7500), 1),
        ]);
        assert_eq!(state.unique_item_count(), 2);
        assert_eq!(state.item_count(), 3);
    }

    #[test]
    fn test_subtotal() {
        let state = state_with(vec![
            (Product::new(1, "Product A", 6000), 2),
            (Product::new(3, "Product C", 3000), 1),
        ]);
        assert_eq!(state.subtotal_cents(), 15000);
        assert_eq!(state.subtotal_display(), "$150.00");
    }

    #[test]
    fn test_get_item() {
        let state = state_with(vec![(Product::new(1, "Product A", 6000), 1)]);
        assert!(state.contains(ProductId::new(1)));
        assert_eq!(
            state.get_item(ProductId::new(1)).map(|i| i.name.as_str()),
            Some("Product A")
        );
        assert!(state.get_item(ProductId::new(9)).is_none());
    }

    #[test]
    fn test_state_serialization() {
        let state = state_with(vec![(Product::new(1, "Product A", 6000), 1)]);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"cart_items":[{"id":1,"name":"Product A","price_cents":6000,"quantity":1}]}"#
        );

        let deserialized: CartState = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, state);
    }
}
