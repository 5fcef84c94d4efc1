//! Search run bookkeeping.

use std::time::{Duration, Instant};

use submatch_core::HardSoftScore;

/// Read-mostly view of one search run, maintained by the driver and
/// consulted by termination conditions.
#[derive(Clone, Debug)]
pub struct SearchScope {
    start: Instant,
    step_count: u64,
    steps_since_improvement: u64,
    best_score: Option<HardSoftScore>,
}

impl SearchScope {
    /// Starts the clock for a new run.
    pub fn new() -> Self {
        SearchScope {
            start: Instant::now(),
            step_count: 0,
            steps_since_improvement: 0,
            best_score: None,
        }
    }

    /// Wall-clock time since the run started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Total steps taken so far.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Consecutive steps since the best score last improved.
    pub fn steps_since_improvement(&self) -> u64 {
        self.steps_since_improvement
    }

    /// Best score seen so far, if any.
    pub fn best_score(&self) -> Option<HardSoftScore> {
        self.best_score
    }

    /// Records one evaluated step.
    pub fn record_step(&mut self) {
        self.step_count += 1;
        self.steps_since_improvement += 1;
    }

    /// Records a new best score, resetting the unimproved counter.
    pub fn record_improvement(&mut self, score: HardSoftScore) {
        debug_assert!(self.best_score.map_or(true, |best| score > best));
        self.best_score = Some(score);
        self.steps_since_improvement = 0;
    }
}

impl Default for SearchScope {
    fn default() -> Self {
        Self::new()
    }
}
