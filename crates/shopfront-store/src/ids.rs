//! Typed identifiers.
//!
//! Product ids are plain integers in the catalog data, but carrying them
//! as a newtype keeps them from being mixed up with quantities or other
//! integer values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(u64);

impl ProductId {
    /// Create a product id from its integer value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying integer value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
