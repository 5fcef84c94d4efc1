//! Typed facts consumed and produced by the matching engine.
//!
//! Facts are created by the external derivation step, are immutable after
//! load, and are handed to the optimizer collected in a [`FactSet`]. Any fact
//! kind may be completely absent: empty collections are valid input.

mod candidate;
mod inventory;
mod message;
mod penalty;
mod pin;
mod pool;
mod store;
mod subscription;

pub use candidate::CandidateMatch;
pub use inventory::{Product, System};
pub use message::{Message, MessageLevel};
pub use penalty::PenaltyGroup;
pub use pin::PinnedPreference;
pub use pool::CapacityPool;
pub use store::{FactSet, FactSetBuilder};
pub use subscription::{Policy, Subscription};
