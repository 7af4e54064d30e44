//! Product listing view model.

use serde::{Deserialize, Serialize};
use shopfront_store::{CartAction, CartStore, Product, ProductId};
use std::collections::HashSet;

/// The product listing: a catalog plus the set of products already added.
///
/// Once a product has been added to the cart its listing entry is disabled,
/// so the same product cannot be added twice from the listing. Quantity
/// changes happen in the cart itself. The disabled set is never cleared,
/// not even when the product is later removed from the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductList {
    products: Vec<Product>,
    disabled: HashSet<ProductId>,
}

impl Default for ProductList {
    fn default() -> Self {
        Self::with_products(vec![
            Product::new(1, "Product A", 6000),
            Product::new(2, "Product B", 7500),
            Product::new(3, "Product C", 3000),
        ])
    }
}

impl ProductList {
    /// Create a listing with the default catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a listing with a custom catalog.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            disabled: HashSet::new(),
        }
    }

    /// Products in the listing, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product in the catalog.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Check whether a product's add button is disabled.
    pub fn is_disabled(&self, id: ProductId) -> bool {
        self.disabled.contains(&id)
    }

    /// Add a product to the cart and disable its listing entry.
    ///
    /// Returns `false` without dispatching if the product is already
    /// disabled or is not in the catalog.
    pub fn add_to_cart(&mut self, id: ProductId, store: &mut CartStore) -> bool {
        if self.is_disabled(id) {
            tracing::debug!(product = %id, "product already added, ignoring");
            return false;
        }

        let product = match self.get(id) {
            Some(product) => product.clone(),
            None => {
                tracing::debug!(product = %id, "product not in catalog, ignoring");
                return false;
            }
        };

        store.dispatch(CartAction::AddItem(product));
        self.disabled.insert(id);
        true
    }
}
