//! The local search driver.

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use submatch_config::{
    AcceptorType, EnvironmentMode, MatcherConfig, DEFAULT_UNIMPROVED_STEP_COUNT_LIMIT,
};
use submatch_core::{GroupId, HardSoftScore, Result};

use crate::acceptor::{Acceptor, AnyAcceptor};
use crate::assignment::Assignment;
use crate::heuristic::{ConflictMoveFilter, SwapMoveGenerator};
use crate::scope::SearchScope;
use crate::scoring::{split_penalty_count, MatchingScorer, Scorer};
use crate::termination::{
    OrTermination, StepCountTermination, Termination, TimeTermination,
    UnimprovedStepCountTermination,
};

/// Summary of one finished search run.
#[derive(Clone, Copy, Debug)]
pub struct SearchStats {
    /// Best score found; also the score of the returned assignment.
    pub best_score: HardSoftScore,
    /// Steps taken.
    pub steps: u64,
    /// Moves scored, including rejected ones.
    pub moves_evaluated: u64,
    /// Confirmed match groups in the returned assignment.
    pub confirmed: usize,
}

/// Iteratively improves an [`Assignment`] through randomized swap moves.
///
/// The three strategies are injectable: the scorer computes the
/// authoritative score, the acceptor decides which evaluated moves to keep,
/// and the termination decides when to stop. The driver owns the run's
/// seeded random source, tracks the best solution seen and restores it into
/// the assignment before returning.
///
/// A run that never improves on its starting state simply returns that
/// state; that is valid output, not an error. A scoring failure aborts the
/// run.
#[derive(Debug)]
pub struct LocalSearch<Sc, A, T> {
    scorer: Sc,
    acceptor: A,
    termination: T,
    rng: ChaCha8Rng,
    full_assert: bool,
}

impl LocalSearch<MatchingScorer, AnyAcceptor, OrTermination> {
    /// Assembles a driver from a [`MatcherConfig`].
    ///
    /// When the configuration sets no termination limit at all, the default
    /// unimproved-step limit is used so a run always terminates.
    pub fn from_config(config: &MatcherConfig) -> Self {
        let acceptor = match config.acceptor.acceptor_type {
            AcceptorType::HillClimbing => AnyAcceptor::hill_climbing(),
            AcceptorType::LateAcceptance => {
                AnyAcceptor::late_acceptance(config.acceptor.late_acceptance_size)
            }
        };

        let limits = &config.termination;
        let mut termination = OrTermination::new();
        if let Some(limit) = limits.unimproved_step_count_limit {
            termination.push(UnimprovedStepCountTermination::new(limit));
        }
        if let Some(limit) = limits.step_count_limit {
            termination.push(StepCountTermination::new(limit));
        }
        if let Some(secs) = limits.seconds_spent_limit {
            termination.push(TimeTermination::seconds(secs));
        }
        if termination.is_empty() {
            termination.push(UnimprovedStepCountTermination::new(
                DEFAULT_UNIMPROVED_STEP_COUNT_LIMIT,
            ));
        }

        let mut search = LocalSearch::new(MatchingScorer::new(), acceptor, termination)
            .with_full_assert(config.environment_mode == EnvironmentMode::FullAssert);
        if let Some(seed) = config.random_seed {
            search = search.with_seed(seed);
        }
        search
    }
}

impl<Sc, A, T> LocalSearch<Sc, A, T>
where
    Sc: Scorer,
    A: Acceptor,
    T: Termination,
{
    /// Creates a driver with an OS-seeded random source.
    pub fn new(scorer: Sc, acceptor: A, termination: T) -> Self {
        LocalSearch {
            scorer,
            acceptor,
            termination,
            rng: ChaCha8Rng::from_os_rng(),
            full_assert: false,
        }
    }

    /// Fixes the random seed; two runs over the same facts with the same
    /// seed produce identical assignments.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Re-checks the conflict invariant after every applied move.
    pub fn with_full_assert(mut self, full_assert: bool) -> Self {
        self.full_assert = full_assert;
        self
    }

    /// Runs the search, leaving the best found state in `assignment`.
    pub fn solve(&mut self, assignment: &mut Assignment) -> Result<SearchStats> {
        info!(
            event = "solve_start",
            match_groups = assignment.group_count(),
            conflict_sets = assignment.conflicts().sets().len(),
            candidates = assignment.candidates().len(),
        );

        // short circuit in case there's nothing to optimize
        if assignment.is_empty() {
            let score = self.scorer.calculate(assignment)?;
            info!(event = "solve_end", score = %score, steps = 0u64);
            return Ok(SearchStats {
                best_score: score,
                steps: 0,
                moves_evaluated: 0,
                confirmed: 0,
            });
        }

        let mut scope = SearchScope::new();
        let mut last_step_score = self.construct(assignment)?;
        let mut best_score = last_step_score;
        let mut best_states = assignment.confirmed_states();
        scope.record_improvement(best_score);

        self.acceptor.phase_started(&last_step_score);
        let mut moves_evaluated: u64 = 0;
        let mut generator = SwapMoveGenerator::new(assignment, &mut self.rng);

        while !self.termination.is_terminated(&scope) {
            let mv = match generator.next() {
                Some(mv) => mv,
                None => {
                    // batch exhausted, reshuffle a fresh one
                    generator = SwapMoveGenerator::new(assignment, &mut self.rng);
                    match generator.next() {
                        Some(mv) => mv,
                        // no swap can be built from the current state
                        None => break,
                    }
                }
            };
            // states may have drifted since the batch was built
            if !mv.is_doable(assignment) {
                continue;
            }

            let undo = mv.apply(assignment)?;
            let move_score = self.scorer.calculate(assignment)?;
            moves_evaluated += 1;
            if self.full_assert {
                assignment.assert_consistent()?;
            }
            trace!(left = %mv.left, right = %mv.right, score = %move_score, "move evaluated");

            scope.record_step();
            if self.acceptor.is_accepted(&last_step_score, &move_score) {
                last_step_score = move_score;
                self.acceptor.step_ended(&move_score);
                if move_score > best_score {
                    best_score = move_score;
                    best_states = assignment.confirmed_states();
                    scope.record_improvement(move_score);
                    debug!(event = "new_best", score = %move_score, step = scope.step_count());
                }
            } else {
                undo.undo(assignment)?;
            }
        }

        assignment.restore_states(&best_states)?;
        info!(
            event = "solve_end",
            score = %best_score,
            steps = scope.step_count(),
            moves_evaluated,
            confirmed = assignment.confirmed_count(),
            split_penalties = split_penalty_count(assignment),
            elapsed_ms = scope.elapsed().as_millis() as u64,
        );

        Ok(SearchStats {
            best_score,
            steps: scope.step_count(),
            moves_evaluated,
            confirmed: assignment.confirmed_count(),
        })
    }

    /// Greedy opening: confirm groups one by one whenever the conflict
    /// filter allows it and the score improves. Gives the swap generator a
    /// mixed confirmed/unconfirmed population to pair from.
    ///
    /// Groups satisfying a pinned preference get first pick; swap moves only
    /// pair groups sharing a subscription, so a pinned group losing its spot
    /// to a differently-subscribed rival here could never win it back later.
    fn construct(&mut self, assignment: &mut Assignment) -> Result<HardSoftScore> {
        let filter = ConflictMoveFilter::new();
        let mut score = self.scorer.calculate(assignment)?;

        let pinned: BTreeSet<GroupId> = assignment
            .facts()
            .pins()
            .iter()
            .flat_map(|pin| {
                assignment.candidates().iter().filter_map(move |candidate| {
                    (candidate.system_id == pin.system_id
                        && candidate.subscription_id == pin.subscription_id)
                        .then_some(candidate.group_id)
                })
            })
            .collect();
        let ordered: Vec<GroupId> = pinned
            .iter()
            .copied()
            .chain(
                assignment
                    .group_ids()
                    .iter()
                    .copied()
                    .filter(|id| !pinned.contains(id)),
            )
            .collect();

        for group_id in ordered {
            if assignment.is_confirmed(group_id) || !filter.accept(assignment, group_id, true) {
                continue;
            }
            assignment.set_confirmed(group_id, true)?;
            let candidate_score = self.scorer.calculate(assignment)?;
            if candidate_score > score {
                score = candidate_score;
            } else {
                assignment.set_confirmed(group_id, false)?;
            }
        }

        info!(
            event = "construction_end",
            score = %score,
            confirmed = assignment.confirmed_count(),
        );
        Ok(score)
    }
}
