//! Conflict-aware filter for single-variable changes.

use submatch_core::GroupId;

use crate::assignment::Assignment;

/// Accepts only single-group changes that cannot create a conflict.
///
/// Independent of the swap generator: any selector proposing a change of one
/// group's confirmed flag can consult this predicate to keep the hard
/// conflict invariant from being violated even transiently. The greedy
/// construction pass is one such selector.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConflictMoveFilter;

impl ConflictMoveFilter {
    /// Creates a new filter.
    pub fn new() -> Self {
        ConflictMoveFilter
    }

    /// Whether changing `group_id`'s confirmed flag to `value` is safe.
    ///
    /// Leaving a group unconfirmed is always safe; confirming is accepted
    /// only if no conflicting group is confirmed already.
    pub fn accept(&self, assignment: &Assignment, group_id: GroupId, value: bool) -> bool {
        if !value {
            return true;
        }
        assignment
            .conflicts()
            .sets_for(group_id)
            .flat_map(|set| set.members().iter().copied())
            .all(|member| member == group_id || !assignment.is_confirmed(member))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use submatch_core::{CandidateMatch, CapacityPool, FactSet};

    /// Two candidates for (system 1, product 10) with group ids 5 and 6.
    fn assignment() -> Assignment {
        let facts = FactSet::builder()
            .pool(CapacityPool::new(0u32, 100))
            .candidate(CandidateMatch::new(1i64, 10i64, 9i64, 0u32, 5u32))
            .candidate(CandidateMatch::new(1i64, 10i64, 8i64, 0u32, 6u32))
            .build()
            .unwrap();
        Assignment::new(facts)
    }

    #[test]
    fn unconfirming_is_always_accepted() {
        let mut assignment = assignment();
        assignment.set_confirmed(GroupId(5), true).unwrap();

        let filter = ConflictMoveFilter::new();
        assert!(filter.accept(&assignment, GroupId(5), false));
        assert!(filter.accept(&assignment, GroupId(6), false));
    }

    #[test]
    fn confirming_against_a_confirmed_conflict_is_rejected() {
        let mut assignment = assignment();
        assignment.set_confirmed(GroupId(5), true).unwrap();

        let filter = ConflictMoveFilter::new();
        assert!(!filter.accept(&assignment, GroupId(6), true));

        // once 5 is unconfirmed again, 6 becomes acceptable
        assignment.set_confirmed(GroupId(5), false).unwrap();
        assert!(filter.accept(&assignment, GroupId(6), true));
    }

    #[test]
    fn confirming_without_conflicts_is_accepted() {
        let assignment = assignment();
        let filter = ConflictMoveFilter::new();
        assert!(filter.accept(&assignment, GroupId(5), true));
    }
}
