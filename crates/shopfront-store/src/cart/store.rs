//! The cart store: owned state plus change notification.

use crate::cart::{reduce, CartAction, CartState};

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Owns the cart state and applies actions to it.
///
/// All mutation goes through [`dispatch`](CartStore::dispatch), which runs
/// the action through [`reduce`] and then notifies every subscriber with a
/// reference to the new state. The store is single-threaded; share it the
/// usual way (`Rc<RefCell<CartStore>>`) if multiple owners need it.
pub struct CartStore {
    state: CartState,
    subscribers: Vec<(SubscriberId, Box<dyn FnMut(&CartState)>)>,
    next_subscriber: u64,
}

impl CartStore {
    /// Create a store with an empty cart.
    pub fn new() -> Self {
        Self {
            state: CartState::new(),
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// Create a store seeded with an existing cart state.
    pub fn with_state(state: CartState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// Current cart state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Owned copy of the current cart state.
    pub fn snapshot(&self) -> CartState {
        self.state.clone()
    }

    /// Apply an action, notify subscribers, and return the new state.
    pub fn dispatch(&mut self, action: CartAction) -> &CartState {
        let kind = action.kind();
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);

        tracing::debug!(
            action = kind,
            items = self.state.item_count(),
            "cart action applied"
        );

        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.state);
        }

        &self.state
    }

    /// Register a callback invoked after every dispatch.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&CartState) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns `true` if it was registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let len_before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() < len_before
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::product::Product;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn product_a() -> Product {
        Product::new(1, "Product A", 6000)
    }

    #[test]
    fn test_dispatch_updates_state() {
        let mut store = CartStore::new();
        store.dispatch(CartAction::AddItem(product_a()));
        store.dispatch(CartAction::IncreaseQuantity(ProductId::new(1)));

        assert_eq!(store.state().item_count(), 2);
        assert_eq!(store.state().unique_item_count(), 1);
    }

    #[test]
    fn test_dispatch_returns_new_state() {
        let mut store = CartStore::new();
        let state = store.dispatch(CartAction::AddItem(product_a()));
        assert_eq!(state.item_count(), 1);
    }

    #[test]
    fn test_subscribers_see_each_dispatch() {
        let mut store = CartStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.item_count()));

        store.dispatch(CartAction::AddItem(product_a()));
        store.dispatch(CartAction::AddItem(product_a()));
        store.dispatch(CartAction::Clear);

        assert_eq!(*seen.borrow(), vec![1, 2, 0]);
    }

    #[test]
    fn test_subscriber_receives_state_after_reduce() {
        let mut store = CartStore::new();
        let names = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&names);
        store.subscribe(move |state| {
            let line: Vec<String> = state.cart_items.iter().map(|i| i.name.clone()).collect();
            sink.borrow_mut().push(line);
        });

        store.dispatch(CartAction::AddItem(product_a()));
        assert_eq!(*names.borrow(), vec![vec!["Product A".to_string()]]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = CartStore::new();
        let first = Rc::new(RefCell::new(0u32));
        let second = Rc::new(RefCell::new(0u32));

        let sink = Rc::clone(&first);
        let first_id = store.subscribe(move |_| *sink.borrow_mut() += 1);
        let sink = Rc::clone(&second);
        store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.dispatch(CartAction::AddItem(product_a()));
        assert!(store.unsubscribe(first_id));
        store.dispatch(CartAction::AddItem(product_a()));

        assert_eq!(*first.borrow(), 1);
        assert_eq!(*second.borrow(), 2);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_unsubscribe_unknown_id_returns_false() {
        let mut store = CartStore::new();
        let id = store.subscribe(|_| {});
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn test_subscriber_ids_are_distinct() {
        let mut store = CartStore::new();
        let a = store.subscribe(|_| {});
        let b = store.subscribe(|_| {});
        assert_ne!(a, b);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut store = CartStore::new();
        store.dispatch(CartAction::AddItem(product_a()));

        let snapshot = store.snapshot();
        store.dispatch(CartAction::Clear);

        assert_eq!(snapshot.item_count(), 1);
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_with_state_seeds_store() {
        let mut seeded = CartStore::new();
        seeded.dispatch(CartAction::AddItem(product_a()));

        let store = CartStore::with_state(seeded.snapshot());
        assert_eq!(store.state().item_count(), 1);
    }
}
