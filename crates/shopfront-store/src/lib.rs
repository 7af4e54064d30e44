//! Cart state container for Shopfront.
//!
//! This crate provides the cart feature's state machine:
//!
//! - **State**: [`CartState`], an ordered collection of [`CartItem`]s
//! - **Actions**: [`CartAction`], the operations the cart accepts
//! - **Reducer**: [`reduce`], the pure transition function
//! - **Store**: [`CartStore`], an owned state container with dispatch and
//!   change subscriptions
//!
//! # Example
//!
//! ```rust
//! use shopfront_store::prelude::*;
//!
//! let mut store = CartStore::new();
//! store.dispatch(CartAction::AddItem(Product::new(1, "Product A", 6000)));
//! store.dispatch(CartAction::IncreaseQuantity(ProductId::new(1)));
//! assert_eq!(store.state().item_count(), 2);
//! ```

pub mod cart;
pub mod ids;
pub mod product;

pub use cart::{reduce, replay, CartAction, CartItem, CartState, CartStore, SubscriberId};
pub use ids::ProductId;
pub use product::Product;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{
        reduce, replay, CartAction, CartItem, CartState, CartStore, SubscriberId,
    };
    pub use crate::ids::ProductId;
    pub use crate::product::Product;
}
