//! Termination based on lack of improvement.

use super::Termination;
use crate::scope::SearchScope;

/// Terminates if the best score has not improved for a number of
/// consecutive steps.
///
/// This is the primary stopping condition: it avoids spending time once the
/// search has plateaued. Test configurations use a much smaller limit than
/// production.
///
/// # Example
///
/// ```
/// use submatch_solver::termination::UnimprovedStepCountTermination;
///
/// let term = UnimprovedStepCountTermination::new(500);
/// ```
#[derive(Debug, Clone)]
pub struct UnimprovedStepCountTermination {
    limit: u64,
}

impl UnimprovedStepCountTermination {
    /// Creates a termination that stops after `limit` steps without
    /// improvement.
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for UnimprovedStepCountTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.steps_since_improvement() >= self.limit
    }
}
