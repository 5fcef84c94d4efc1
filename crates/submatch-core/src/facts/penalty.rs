//! Penalty group fact.

use crate::ids::SystemId;

/// Membership of a virtual guest in a splitting-penalty group.
///
/// A penalty group collects the virtual guests over which a 1-2 subscription
/// may be split without penalty. Spreading one subscription's confirmed
/// matches across more than one penalty group costs a soft score penalty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PenaltyGroup {
    /// The penalty group identifier.
    pub id: u32,
    /// The virtual guest belonging to the group.
    pub guest_id: SystemId,
}

impl PenaltyGroup {
    /// Creates a new penalty group membership.
    pub fn new(id: u32, guest_id: impl Into<SystemId>) -> Self {
        PenaltyGroup {
            id,
            guest_id: guest_id.into(),
        }
    }
}
