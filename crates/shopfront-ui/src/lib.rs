//! Product listing and cart views for Shopfront.
//!
//! This crate provides the storefront-facing side of the cart feature:
//!
//! - **Listing**: [`ProductList`], the catalog view model that dispatches
//!   cart actions and disables products already added
//! - **Rendering**: [`render_product_list`] and [`render_cart_summary`],
//!   plain HTML fragment renderers for the listing and the cart
//!
//! # Example
//!
//! ```rust
//! use shopfront_store::{CartStore, ProductId};
//! use shopfront_ui::{render_product_list, ProductList};
//!
//! let mut store = CartStore::new();
//! let mut list = ProductList::new();
//!
//! assert!(list.add_to_cart(ProductId::new(1), &mut store));
//! assert!(!list.add_to_cart(ProductId::new(1), &mut store));
//!
//! let html = render_product_list(&list);
//! assert!(html.contains("disabled"));
//! ```

pub mod product_list;
pub mod render;

pub use product_list::ProductList;
pub use render::{render_cart_summary, render_product_list};
