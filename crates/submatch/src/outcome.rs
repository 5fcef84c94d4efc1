//! Result extraction from a solved assignment.

use submatch_core::{
    HardSoftScore, MatchError, Message, ProductId, Result, SubscriptionId, SystemId,
};
use submatch_solver::scoring::confirmed_pool_counts;
use submatch_solver::{Assignment, SearchStats};

/// One confirmed match in the final solution: this system's installation of
/// this product is covered by this subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConfirmedMatch {
    /// The covered system.
    pub system_id: SystemId,
    /// The covered product installation.
    pub product_id: ProductId,
    /// The covering subscription.
    pub subscription_id: SubscriptionId,
    /// Capacity cents this match consumes: the owning pool's total split
    /// equally across all confirmed matches drawing from it.
    pub cents: u64,
}

/// Everything a matching run produces.
#[derive(Clone, Debug)]
pub struct MatchOutcome {
    /// The solved assignment, for callers that want to inspect match groups
    /// directly.
    pub assignment: Assignment,
    /// Score of the returned solution.
    pub score: HardSoftScore,
    /// The confirmed matches, sorted by (system, product, subscription).
    pub confirmed: Vec<ConfirmedMatch>,
    /// User-facing diagnostics, sorted and deduplicated.
    pub messages: Vec<Message>,
    /// Search run summary.
    pub stats: SearchStats,
}

/// Extracts the confirmed matches from a solved assignment.
///
/// Each confirmed candidate is charged `pool total / n` cents, where `n` is
/// the number of confirmed candidates drawing from the same pool; integer
/// division leaves any remainder undelivered rather than overdrawing the
/// pool.
pub fn confirmed_matches(assignment: &Assignment) -> Result<Vec<ConfirmedMatch>> {
    let pool_counts = confirmed_pool_counts(assignment);

    let mut confirmed = Vec::new();
    for candidate in assignment.candidates() {
        if !assignment.candidate_confirmed(candidate) {
            continue;
        }
        let cents = assignment
            .facts()
            .pool_cents(candidate.pool_id)
            .zip(pool_counts.get(&candidate.pool_id))
            .map(|(total, &count)| total / count)
            .ok_or_else(|| {
                MatchError::InvalidState(format!(
                    "confirmed candidate references unknown capacity pool {}",
                    candidate.pool_id
                ))
            })?;
        confirmed.push(ConfirmedMatch {
            system_id: candidate.system_id,
            product_id: candidate.product_id,
            subscription_id: candidate.subscription_id,
            cents,
        });
    }

    confirmed.sort_unstable();
    Ok(confirmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use submatch_core::{CandidateMatch, CapacityPool, FactSet, GroupId};

    #[test]
    fn splits_pool_cents_across_confirmed_matches() {
        let facts = FactSet::builder()
            .pool(CapacityPool::new(0u32, 100))
            .candidate(CandidateMatch::new(2i64, 10i64, 9i64, 0u32, 2u32))
            .candidate(CandidateMatch::new(1i64, 10i64, 9i64, 0u32, 1u32))
            .build()
            .unwrap();
        let mut assignment = Assignment::new(facts);
        assignment.set_confirmed(GroupId(1), true).unwrap();
        assignment.set_confirmed(GroupId(2), true).unwrap();

        let confirmed = confirmed_matches(&assignment).unwrap();
        assert_eq!(confirmed.len(), 2);
        assert!(confirmed.iter().all(|m| m.cents == 50));
        // sorted by system
        assert_eq!(confirmed[0].system_id, SystemId(1));
        assert_eq!(confirmed[1].system_id, SystemId(2));
    }

    #[test]
    fn unconfirmed_candidates_are_left_out() {
        let facts = FactSet::builder()
            .pool(CapacityPool::new(0u32, 100))
            .candidate(CandidateMatch::new(1i64, 10i64, 9i64, 0u32, 1u32))
            .candidate(CandidateMatch::new(2i64, 10i64, 9i64, 0u32, 2u32))
            .build()
            .unwrap();
        let mut assignment = Assignment::new(facts);
        assignment.set_confirmed(GroupId(1), true).unwrap();

        let confirmed = confirmed_matches(&assignment).unwrap();
        assert_eq!(confirmed.len(), 1);
        assert_eq!(confirmed[0].cents, 100);
    }
}
