//! System and product facts.

use crate::ids::{ProductId, SystemId};

/// A computing system with installed products.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct System {
    /// The system identifier.
    pub id: SystemId,
    /// Human readable name.
    pub name: String,
    /// True for physical machines, false for virtual guests.
    pub physical: bool,
}

impl System {
    /// Creates a new system fact.
    pub fn new(id: impl Into<SystemId>, name: impl Into<String>, physical: bool) -> Self {
        System {
            id: id.into(),
            name: name.into(),
            physical,
        }
    }
}

/// An installable product.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product {
    /// The product identifier.
    pub id: ProductId,
    /// Human readable name.
    pub name: String,
}

impl Product {
    /// Creates a new product fact.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
        }
    }
}
