//! Shopping cart module.
//!
//! Contains the cart state, the actions it accepts, the reducer that
//! applies them, and the owning store.

mod action;
mod item;
mod reducer;
mod state;
mod store;

pub use action::CartAction;
pub use item::CartItem;
pub use reducer::{reduce, replay};
pub use state::CartState;
pub use store::{CartStore, SubscriberId};
