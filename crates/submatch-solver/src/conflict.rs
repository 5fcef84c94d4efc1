//! Conflict sets and the conflict index.
//!
//! Two match groups conflict when they target the same (system, product)
//! pair: covering one installation twice is never allowed, so at most one
//! member of every conflict set may be confirmed at any time.

use std::collections::{BTreeMap, BTreeSet};

use smallvec::SmallVec;
use submatch_core::{CandidateMatch, GroupId, IdInterner, ProductId, SystemId};

/// A set of mutually exclusive match groups.
///
/// Members are kept sorted so membership tests are a binary search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConflictSet {
    members: Vec<GroupId>,
}

impl ConflictSet {
    fn new(members: Vec<GroupId>) -> Self {
        debug_assert!(members.windows(2).all(|w| w[0] < w[1]));
        ConflictSet { members }
    }

    /// The member group ids, sorted ascending.
    pub fn members(&self) -> &[GroupId] {
        &self.members
    }

    /// True if `group_id` belongs to this set.
    pub fn contains(&self, group_id: GroupId) -> bool {
        self.members.binary_search(&group_id).is_ok()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Maps every match group to the conflict sets it participates in.
///
/// Built once from the candidate matches before optimization starts and
/// immutable for the remainder of the run. Construction is deterministic:
/// the same candidate set yields identical sets and index regardless of
/// input ordering.
#[derive(Clone, Debug, Default)]
pub struct ConflictIndex {
    sets: Vec<ConflictSet>,
    /// Indices into `sets`, per group. Most groups sit in very few sets.
    by_group: BTreeMap<GroupId, SmallVec<[u32; 4]>>,
}

impl ConflictIndex {
    /// Builds the index by grouping candidates by (system, product),
    /// collecting the distinct group ids per bucket and deduplicating
    /// identical sets across buckets.
    pub fn build(candidates: &[CandidateMatch]) -> Self {
        let mut buckets: BTreeMap<(SystemId, ProductId), BTreeSet<GroupId>> = BTreeMap::new();
        for candidate in candidates {
            buckets
                .entry((candidate.system_id, candidate.product_id))
                .or_default()
                .insert(candidate.group_id);
        }

        // Two different (system, product) pairs can yield the same exclusion
        // set; the interner collapses duplicates into one dense set id.
        let mut interner: IdInterner<Vec<GroupId>> = IdInterner::new();
        let mut sets: Vec<ConflictSet> = Vec::new();
        for members in buckets.into_values() {
            let members: Vec<GroupId> = members.into_iter().collect();
            let set_id = interner.intern(members.clone());
            if set_id as usize == sets.len() {
                sets.push(ConflictSet::new(members));
            }
        }

        let mut by_group: BTreeMap<GroupId, SmallVec<[u32; 4]>> = BTreeMap::new();
        for (index, set) in sets.iter().enumerate() {
            for &member in set.members() {
                by_group.entry(member).or_default().push(index as u32);
            }
        }

        ConflictIndex { sets, by_group }
    }

    /// All distinct conflict sets.
    pub fn sets(&self) -> &[ConflictSet] {
        &self.sets
    }

    /// The conflict sets containing `group_id`.
    pub fn sets_for(&self, group_id: GroupId) -> impl Iterator<Item = &ConflictSet> + '_ {
        self.by_group
            .get(&group_id)
            .into_iter()
            .flatten()
            .map(move |&index| &self.sets[index as usize])
    }

    /// The distinct group ids conflicting with `group_id`, excluding
    /// `group_id` itself, sorted ascending.
    pub fn conflicting_ids(&self, group_id: GroupId) -> Vec<GroupId> {
        let mut ids: Vec<GroupId> = self
            .sets_for(group_id)
            .flat_map(|set| set.members().iter().copied())
            .filter(|&member| member != group_id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(system: i64, product: i64, group: u32) -> CandidateMatch {
        CandidateMatch::new(system, product, 9i64, 0u32, group)
    }

    #[test]
    fn groups_targeting_same_installation_conflict() {
        let index = ConflictIndex::build(&[
            candidate(1, 10, 5),
            candidate(1, 10, 6),
            candidate(2, 10, 7),
        ]);

        assert_eq!(index.sets().len(), 2);
        assert_eq!(index.conflicting_ids(GroupId(5)), vec![GroupId(6)]);
        assert_eq!(index.conflicting_ids(GroupId(6)), vec![GroupId(5)]);
        assert!(index.conflicting_ids(GroupId(7)).is_empty());
    }

    #[test]
    fn identical_sets_are_deduplicated() {
        // groups 5 and 6 clash on two different installations
        let index = ConflictIndex::build(&[
            candidate(1, 10, 5),
            candidate(1, 10, 6),
            candidate(1, 11, 5),
            candidate(1, 11, 6),
        ]);

        assert_eq!(index.sets().len(), 1);
        assert_eq!(index.sets_for(GroupId(5)).count(), 1);
    }

    #[test]
    fn build_is_order_independent() {
        let forward = vec![candidate(1, 10, 5), candidate(1, 10, 6), candidate(2, 11, 6)];
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = ConflictIndex::build(&forward);
        let b = ConflictIndex::build(&reversed);

        assert_eq!(a.sets(), b.sets());
        assert_eq!(a.conflicting_ids(GroupId(6)), b.conflicting_ids(GroupId(6)));
    }

    #[test]
    fn unknown_group_has_no_conflicts() {
        let index = ConflictIndex::build(&[candidate(1, 10, 5)]);
        assert!(index.conflicting_ids(GroupId(99)).is_empty());
    }

    #[test]
    fn empty_candidates_yield_empty_index() {
        let index = ConflictIndex::build(&[]);
        assert!(index.sets().is_empty());
    }
}
