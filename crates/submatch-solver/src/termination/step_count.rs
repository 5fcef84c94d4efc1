//! Step count termination.

use super::Termination;
use crate::scope::SearchScope;

/// Terminates after a fixed number of steps.
///
/// # Example
///
/// ```
/// use submatch_solver::termination::StepCountTermination;
///
/// let term = StepCountTermination::new(10_000);
/// ```
#[derive(Debug, Clone)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    /// Creates a termination that stops after `limit` steps.
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for StepCountTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.step_count() >= self.limit
    }
}
