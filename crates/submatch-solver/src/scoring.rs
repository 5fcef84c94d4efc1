//! Assignment scoring.
//!
//! The authoritative weighting formula belongs to the scoring collaborator;
//! the engine only relies on the signals encoded in [`HardSoftScore`]: the
//! hard level counts conflict violations and must stay at zero, the soft
//! level aggregates covered capacity, satisfied pins and split penalties.
//! [`MatchingScorer`] is the default collaborator with explicit weights.

use std::collections::{BTreeSet, HashMap};

use submatch_core::{HardSoftScore, MatchError, PoolId, Result, SubscriptionId, SystemId};

use crate::assignment::Assignment;

/// Computes the authoritative score of a working assignment.
///
/// A scoring failure is fatal for the run: an assignment whose score cannot
/// be computed is not a valid deliverable.
pub trait Scorer: Send {
    /// Scores the assignment's current state.
    fn calculate(&self, assignment: &Assignment) -> Result<HardSoftScore>;
}

/// Weights of the default scorer's soft components.
///
/// Capacity cents enter the soft score 1:1; pins and split penalties are
/// scaled so that a satisfied pin outweighs small capacity shuffles and a
/// split penalty costs a full subscription unit.
#[derive(Clone, Copy, Debug)]
pub struct ScoreWeights {
    /// Soft reward per delivered capacity cent.
    pub cent_weight: i64,
    /// Soft reward per satisfied pinned preference.
    pub pin_weight: i64,
    /// Soft penalty per split-penalty grouping.
    pub split_penalty_weight: i64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            cent_weight: 1,
            pin_weight: 500,
            split_penalty_weight: 100,
        }
    }
}

/// Default scoring collaborator.
///
/// Hard level: minus the number of confirmed-members-beyond-the-first
/// across all conflict sets. Soft level: delivered cents, plus the pin
/// reward, minus the split penalty.
#[derive(Clone, Copy, Debug, Default)]
pub struct MatchingScorer {
    weights: ScoreWeights,
}

impl MatchingScorer {
    /// Creates a scorer with default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scorer with explicit weights.
    pub fn with_weights(weights: ScoreWeights) -> Self {
        MatchingScorer { weights }
    }
}

impl Scorer for MatchingScorer {
    fn calculate(&self, assignment: &Assignment) -> Result<HardSoftScore> {
        let hard = -(assignment.conflict_violations() as i64);

        let cents = delivered_cents(assignment)? as i64;
        let pins = satisfied_pin_count(assignment) as i64;
        let splits = split_penalty_count(assignment) as i64;

        let soft = cents * self.weights.cent_weight + pins * self.weights.pin_weight
            - splits * self.weights.split_penalty_weight;

        Ok(HardSoftScore::of(hard, soft))
    }
}

/// Number of confirmed candidate matches per capacity pool.
///
/// This is the divisor of the equal split: each confirmed candidate in a
/// pool is delivered `total / n` cents.
pub fn confirmed_pool_counts(assignment: &Assignment) -> HashMap<PoolId, u64> {
    let mut counts: HashMap<PoolId, u64> = HashMap::new();
    for candidate in assignment.candidates() {
        if assignment.candidate_confirmed(candidate) {
            *counts.entry(candidate.pool_id).or_insert(0) += 1;
        }
    }
    counts
}

/// Total cents delivered to confirmed candidates, summed over all pools.
///
/// Integer division makes the per-pool sum `(total / n) * n`, never more
/// than the pool total.
pub fn delivered_cents(assignment: &Assignment) -> Result<u64> {
    let mut total = 0u64;
    for (pool_id, count) in confirmed_pool_counts(assignment) {
        let cents = assignment.facts().pool_cents(pool_id).ok_or_else(|| {
            MatchError::ScoreCalculation(format!("capacity pool {pool_id} not found"))
        })?;
        total += (cents / count) * count;
    }
    Ok(total)
}

/// Number of pinned preferences satisfied by a confirmed candidate.
pub fn satisfied_pin_count(assignment: &Assignment) -> usize {
    assignment
        .facts()
        .pins()
        .iter()
        .filter(|pin| {
            assignment.candidates().iter().any(|candidate| {
                assignment.candidate_confirmed(candidate)
                    && candidate.system_id == pin.system_id
                    && candidate.subscription_id == pin.subscription_id
            })
        })
        .count()
}

/// Number of split-penalty groupings in the current state.
///
/// For every subscription, each distinct penalty group covered by its
/// confirmed candidates beyond the first counts as one split.
pub fn split_penalty_count(assignment: &Assignment) -> usize {
    let penalty_group_of: HashMap<SystemId, u32> = assignment
        .facts()
        .penalty_groups()
        .iter()
        .map(|membership| (membership.guest_id, membership.id))
        .collect();
    if penalty_group_of.is_empty() {
        return 0;
    }

    let mut groups_per_subscription: HashMap<SubscriptionId, BTreeSet<u32>> = HashMap::new();
    for candidate in assignment.candidates() {
        if !assignment.candidate_confirmed(candidate) {
            continue;
        }
        if let Some(&penalty_group) = penalty_group_of.get(&candidate.system_id) {
            groups_per_subscription
                .entry(candidate.subscription_id)
                .or_default()
                .insert(penalty_group);
        }
    }

    groups_per_subscription
        .values()
        .map(|groups| groups.len().saturating_sub(1))
        .sum()
}
