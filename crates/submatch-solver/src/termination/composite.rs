//! Composite termination with OR semantics.

use super::Termination;
use crate::scope::SearchScope;

/// Combines several terminations; fires when ANY child fires.
///
/// # Example
///
/// ```
/// use submatch_solver::termination::{
///     OrTermination, StepCountTermination, UnimprovedStepCountTermination,
/// };
///
/// let mut term = OrTermination::new();
/// term.push(UnimprovedStepCountTermination::new(500));
/// term.push(StepCountTermination::new(100_000));
/// ```
#[derive(Debug, Default)]
pub struct OrTermination {
    children: Vec<Box<dyn Termination>>,
}

impl OrTermination {
    /// Creates an empty composite; with no children it never terminates.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Adds a child termination.
    pub fn push(&mut self, termination: impl Termination + 'static) {
        self.children.push(Box::new(termination));
    }

    /// Number of child terminations.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True if no child was added.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Termination for OrTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        self.children.iter().any(|child| child.is_terminated(scope))
    }
}
