//! The mutable solution state.

use std::collections::HashMap;

use submatch_core::{CandidateMatch, FactSet, GroupId, MatchError, Result};

use crate::conflict::ConflictIndex;

/// The full solution state of one matching request.
///
/// Holds one boolean decision (`confirmed`) per match group — stored as a
/// dense array indexed by group position — together with the read-only
/// problem facts and the precomputed conflict index. Flipping a group's
/// confirmed flag is the only mutation surface; everything else is frozen
/// for the lifetime of the assignment.
///
/// Created once per matching request, owned exclusively by the optimization
/// run and discarded after output extraction.
#[derive(Clone, Debug)]
pub struct Assignment {
    /// Sorted, deduplicated group ids.
    group_ids: Vec<GroupId>,
    /// Confirmed flag per group, parallel to `group_ids`.
    confirmed: Vec<bool>,
    /// Group id to dense position.
    positions: HashMap<GroupId, usize>,
    facts: FactSet,
    conflicts: ConflictIndex,
}

impl Assignment {
    /// Creates the unsolved assignment for a fact set: every group starts
    /// unconfirmed.
    pub fn new(facts: FactSet) -> Self {
        let group_ids = facts.group_ids();
        let positions = group_ids
            .iter()
            .enumerate()
            .map(|(position, &id)| (id, position))
            .collect();
        let conflicts = ConflictIndex::build(facts.candidates());
        let confirmed = vec![false; group_ids.len()];
        Assignment {
            group_ids,
            confirmed,
            positions,
            facts,
            conflicts,
        }
    }

    /// Number of match groups.
    pub fn group_count(&self) -> usize {
        self.group_ids.len()
    }

    /// True if there is nothing to search.
    pub fn is_empty(&self) -> bool {
        self.group_ids.is_empty()
    }

    /// The sorted match group ids.
    pub fn group_ids(&self) -> &[GroupId] {
        &self.group_ids
    }

    /// True if the group is currently confirmed. Unknown ids read as
    /// unconfirmed.
    pub fn is_confirmed(&self, group_id: GroupId) -> bool {
        self.positions
            .get(&group_id)
            .map(|&position| self.confirmed[position])
            .unwrap_or(false)
    }

    /// Sets a group's confirmed flag.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidState`] for a group id that does not
    /// belong to this assignment.
    pub fn set_confirmed(&mut self, group_id: GroupId, value: bool) -> Result<()> {
        match self.positions.get(&group_id) {
            Some(&position) => {
                self.confirmed[position] = value;
                Ok(())
            }
            None => Err(MatchError::InvalidState(format!(
                "unknown match group {group_id}"
            ))),
        }
    }

    /// True if the candidate's owning group is confirmed.
    pub fn candidate_confirmed(&self, candidate: &CandidateMatch) -> bool {
        self.is_confirmed(candidate.group_id)
    }

    /// Number of confirmed groups.
    pub fn confirmed_count(&self) -> usize {
        self.confirmed.iter().filter(|&&c| c).count()
    }

    /// Snapshot of all confirmed flags, parallel to [`group_ids`].
    ///
    /// [`group_ids`]: Assignment::group_ids
    pub fn confirmed_states(&self) -> Vec<bool> {
        self.confirmed.clone()
    }

    /// Restores a snapshot taken with [`confirmed_states`].
    ///
    /// [`confirmed_states`]: Assignment::confirmed_states
    pub fn restore_states(&mut self, states: &[bool]) -> Result<()> {
        if states.len() != self.confirmed.len() {
            return Err(MatchError::InvalidState(format!(
                "state snapshot has {} groups, assignment has {}",
                states.len(),
                self.confirmed.len()
            )));
        }
        self.confirmed.copy_from_slice(states);
        Ok(())
    }

    /// The read-only problem facts.
    pub fn facts(&self) -> &FactSet {
        &self.facts
    }

    /// The cached sorted, deduplicated candidate matches.
    pub fn candidates(&self) -> &[CandidateMatch] {
        self.facts.candidates()
    }

    /// The conflict index.
    pub fn conflicts(&self) -> &ConflictIndex {
        &self.conflicts
    }

    /// Counts confirmed members beyond the first across all conflict sets.
    /// Zero means the hard conflict invariant holds.
    pub fn conflict_violations(&self) -> u64 {
        self.conflicts
            .sets()
            .iter()
            .map(|set| {
                let confirmed = set
                    .members()
                    .iter()
                    .filter(|&&member| self.is_confirmed(member))
                    .count() as u64;
                confirmed.saturating_sub(1)
            })
            .sum()
    }

    /// Verifies the hard conflict invariant, for full-assert runs.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidState`] naming the violation count if
    /// any conflict set has more than one confirmed member.
    pub fn assert_consistent(&self) -> Result<()> {
        let violations = self.conflict_violations();
        if violations > 0 {
            return Err(MatchError::InvalidState(format!(
                "conflict invariant violated: {violations} conflicting confirmations"
            )));
        }
        Ok(())
    }
}
