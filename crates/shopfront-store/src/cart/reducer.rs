//! Pure cart state transitions.

use crate::cart::{CartAction, CartItem, CartState};

/// Apply one action to a cart state and return the resulting state.
///
/// Every action is total: acting on a product id that is not in the cart
/// leaves the state unchanged rather than failing. Decreasing a quantity
/// already at one is also a no-op; removing the line item is its own action.
pub fn reduce(mut state: CartState, action: CartAction) -> CartState {
    match action {
        CartAction::AddItem(product) => {
            match state.cart_items.iter_mut().find(|i| i.id == product.id) {
                Some(item) => item.quantity = item.quantity.saturating_add(1),
                None => state.cart_items.push(CartItem::from(product)),
            }
        }
        CartAction::RemoveItem(id) => {
            state.cart_items.retain(|i| i.id != id);
        }
        CartAction::Clear => {
            state.cart_items.clear();
        }
        CartAction::IncreaseQuantity(id) => {
            if let Some(item) = state.cart_items.iter_mut().find(|i| i.id == id) {
                item.quantity = item.quantity.saturating_add(1);
            }
        }
        CartAction::DecreaseQuantity(id) => {
            if let Some(item) = state.cart_items.iter_mut().find(|i| i.id == id) {
                if item.quantity > 1 {
                    item.quantity -= 1;
                }
            }
        }
    }
    state
}

/// Rebuild a cart state by folding a sequence of actions over an empty cart.
pub fn replay(actions: impl IntoIterator<Item = CartAction>) -> CartState {
    actions
        .into_iter()
        .fold(CartState::new(), |state, action| reduce(state, action))
}
