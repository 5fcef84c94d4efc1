//! Termination conditions for the local search.

mod composite;
mod step_count;
mod time;
mod unimproved;

use std::fmt::Debug;

use crate::scope::SearchScope;

pub use composite::OrTermination;
pub use step_count::StepCountTermination;
pub use time::TimeTermination;
pub use unimproved::UnimprovedStepCountTermination;

/// Decides when the search should stop.
pub trait Termination: Send + Debug {
    /// Returns true if solving should terminate.
    fn is_terminated(&self, scope: &SearchScope) -> bool;
}
