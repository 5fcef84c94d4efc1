//! Candidate match fact.

use crate::ids::{GroupId, PoolId, ProductId, SubscriptionId, SystemId};

/// A proposed (system, product, subscription) association, before
/// confirmation.
///
/// All candidates sharing a `group_id` represent one indivisible business
/// decision (for example one subscription's inherited virtualization matches
/// spanning several guest systems) and are confirmed or rejected together.
///
/// The derived `Ord` compares by (system, product, subscription, pool,
/// group), which is the order the sorted candidate cache is kept in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CandidateMatch {
    /// The system the subscription would be assigned to.
    pub system_id: SystemId,
    /// The installed product the assignment would cover.
    pub product_id: ProductId,
    /// The subscription being assigned.
    pub subscription_id: SubscriptionId,
    /// The capacity pool this candidate draws from.
    pub pool_id: PoolId,
    /// The match group this candidate belongs to.
    pub group_id: GroupId,
}

impl CandidateMatch {
    /// Creates a new candidate match.
    pub fn new(
        system_id: impl Into<SystemId>,
        product_id: impl Into<ProductId>,
        subscription_id: impl Into<SubscriptionId>,
        pool_id: impl Into<PoolId>,
        group_id: impl Into<GroupId>,
    ) -> Self {
        CandidateMatch {
            system_id: system_id.into(),
            product_id: product_id.into(),
            subscription_id: subscription_id.into(),
            pool_id: pool_id.into(),
            group_id: group_id.into(),
        }
    }
}
