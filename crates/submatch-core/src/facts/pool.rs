//! Capacity pool fact.

use crate::ids::PoolId;

/// A pool of allocable subscription capacity, measured in cents.
///
/// 100 cents equal one full subscription unit. All candidate matches
/// referencing the same pool split its capacity equally: each confirmed
/// candidate is delivered `cents / n` cents, where `n` is the number of
/// confirmed candidates referencing the pool. The division is integer, so
/// the delivered sum can never exceed the pool total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CapacityPool {
    /// The pool identifier.
    pub id: PoolId,
    /// Total capacity of the pool, in hundredths of a subscription unit.
    pub cents: u64,
}

impl CapacityPool {
    /// Creates a new capacity pool.
    pub fn new(id: impl Into<PoolId>, cents: u64) -> Self {
        CapacityPool {
            id: id.into(),
            cents,
        }
    }
}
