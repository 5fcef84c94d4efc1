//! Pinned preference fact.

use crate::ids::{SubscriptionId, SystemId};

/// A match that the user would like to see in the solution.
///
/// Pins are soft: the scorer rewards satisfying them, and the result
/// collector reports every pin the final assignment left unmet. They never
/// constrain the search directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PinnedPreference {
    /// The system the user wants covered.
    pub system_id: SystemId,
    /// The subscription the user wants assigned to it.
    pub subscription_id: SubscriptionId,
}

impl PinnedPreference {
    /// Creates a new pinned preference.
    pub fn new(system_id: impl Into<SystemId>, subscription_id: impl Into<SubscriptionId>) -> Self {
        PinnedPreference {
            system_id: system_id.into(),
            subscription_id: subscription_id.into(),
        }
    }
}
