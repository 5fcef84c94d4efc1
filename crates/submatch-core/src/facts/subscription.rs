//! Subscription fact.

use crate::ids::SubscriptionId;

/// Virtual machine assignment policy of a [`Subscription`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Policy {
    /// Assignable to a physical system only; virtual machines running on top
    /// of it do not inherit the subscription.
    Physical,
    /// Assignable to a physical system only; virtual machines running on top
    /// of it automatically inherit the subscription.
    UnlimitedVirtualization,
    /// Assignable either to one physical system that hosts no virtual
    /// machines or to up to two virtual machines.
    OneTwo,
    /// Assignable to a single physical or virtual instance, with no
    /// virtualization inheritance.
    Instance,
    /// Covers an extension product; inherits the policy of the base
    /// product's subscription on the same system.
    InheritedVirtualization,
}

/// An entitlement to use one or more products on one or more systems.
///
/// Date ranges and bundle linkage are resolved by the external derivation
/// step before the facts reach the engine, so they are not carried here.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Subscription {
    /// The subscription identifier.
    pub id: SubscriptionId,
    /// Vendor part number.
    pub part_number: String,
    /// Human readable name.
    pub name: String,
    /// Number of purchased units.
    pub quantity: u32,
    /// Virtual machine assignment policy.
    pub policy: Policy,
}

impl Subscription {
    /// Creates a new subscription fact.
    pub fn new(
        id: impl Into<SubscriptionId>,
        part_number: impl Into<String>,
        name: impl Into<String>,
        quantity: u32,
        policy: Policy,
    ) -> Self {
        Subscription {
            id: id.into(),
            part_number: part_number.into(),
            name: name.into(),
            quantity,
            policy,
        }
    }
}
