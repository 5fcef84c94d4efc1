//! Core types for the subscription matching engine.
//!
//! This crate holds everything the optimizer reasons about but never mutates:
//! the typed facts produced by the external derivation step, the immutable
//! [`FactSet`](facts::FactSet) they are collected into, the two-level
//! [`HardSoftScore`](score::HardSoftScore) used to rank solutions, and the
//! request-scoped [`IdInterner`](interner::IdInterner) that maps arbitrary
//! key tuples to dense sequential ids.

pub mod error;
pub mod facts;
pub mod ids;
pub mod interner;
pub mod score;

pub use error::{MatchError, Result};
pub use facts::{
    CandidateMatch, CapacityPool, FactSet, FactSetBuilder, Message, MessageLevel, PenaltyGroup,
    PinnedPreference, Policy, Product, Subscription, System,
};
pub use ids::{GroupId, PoolId, ProductId, SubscriptionId, SystemId};
pub use interner::IdInterner;
pub use score::HardSoftScore;
