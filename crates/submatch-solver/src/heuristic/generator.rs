//! Randomized swap move generation.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use submatch_core::{GroupId, SubscriptionId};

use crate::assignment::Assignment;
use crate::heuristic::SwapMove;

/// Produces one finite, non-restartable batch of randomized swap moves.
///
/// Every move pairs two match groups that share at least one candidate's
/// subscription and currently differ in confirmed state. Construction, per
/// batch:
///
/// 1. Partition the cached sorted candidates by subscription, then by the
///    owning group's current confirmed state.
/// 2. Shuffle the confirmed and unconfirmed buckets independently.
/// 3. Pair elements positionally; the shorter bucket bounds the pairing.
/// 4. Flatten all subscriptions' pairs and shuffle the whole list.
///
/// The batch is consumed in order, once; the driver builds a fresh
/// generator (drawing new randomness) when it runs dry.
#[derive(Debug)]
pub struct SwapMoveGenerator {
    moves: std::vec::IntoIter<SwapMove>,
}

impl SwapMoveGenerator {
    /// Builds one move batch from the assignment's current state.
    pub fn new<R: Rng + ?Sized>(assignment: &Assignment, rng: &mut R) -> Self {
        // subscription -> (groups of confirmed candidates, groups of
        // unconfirmed candidates); candidate-level like the cache itself,
        // so groups spanning several candidates are paired proportionally
        let mut buckets: BTreeMap<SubscriptionId, (Vec<GroupId>, Vec<GroupId>)> = BTreeMap::new();
        for candidate in assignment.candidates() {
            let entry = buckets.entry(candidate.subscription_id).or_default();
            if assignment.is_confirmed(candidate.group_id) {
                entry.0.push(candidate.group_id);
            } else {
                entry.1.push(candidate.group_id);
            }
        }

        let mut moves: Vec<SwapMove> = Vec::new();
        for (confirmed, unconfirmed) in buckets.into_values() {
            let mut confirmed = confirmed;
            let mut unconfirmed = unconfirmed;
            confirmed.shuffle(rng);
            unconfirmed.shuffle(rng);
            moves.extend(
                confirmed
                    .into_iter()
                    .zip(unconfirmed)
                    .filter(|(left, right)| left != right)
                    .map(|(left, right)| SwapMove::new(left, right)),
            );
        }
        moves.shuffle(rng);

        SwapMoveGenerator {
            moves: moves.into_iter(),
        }
    }

    /// Moves left in this batch.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Iterator for SwapMoveGenerator {
    type Item = SwapMove;

    fn next(&mut self) -> Option<SwapMove> {
        self.moves.next()
    }
}
