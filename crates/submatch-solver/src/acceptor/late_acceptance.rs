//! Late acceptance acceptor.

use submatch_core::HardSoftScore;

use super::Acceptor;

/// Accepts moves that improve on a historical score.
///
/// Keeps a circular buffer of recent step scores and accepts a move when it
/// beats either the previous step or the score from N steps ago, which lets
/// the search walk out of local optima.
#[derive(Debug, Clone)]
pub struct LateAcceptanceAcceptor {
    /// Circular buffer of historical step scores.
    score_history: Vec<Option<HardSoftScore>>,
    /// Current index in the buffer.
    current_index: usize,
}

impl LateAcceptanceAcceptor {
    /// Creates a late acceptance acceptor keeping `size` historical scores.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "late acceptance history must not be empty");
        Self {
            score_history: vec![None; size],
            current_index: 0,
        }
    }
}

impl Acceptor for LateAcceptanceAcceptor {
    fn is_accepted(
        &mut self,
        last_step_score: &HardSoftScore,
        move_score: &HardSoftScore,
    ) -> bool {
        if move_score > last_step_score {
            return true;
        }
        match &self.score_history[self.current_index] {
            Some(late_score) => move_score >= late_score,
            // no history yet, accept
            None => true,
        }
    }

    fn phase_started(&mut self, initial_score: &HardSoftScore) {
        for slot in &mut self.score_history {
            *slot = Some(*initial_score);
        }
        self.current_index = 0;
    }

    fn step_ended(&mut self, step_score: &HardSoftScore) {
        self.score_history[self.current_index] = Some(*step_score);
        self.current_index = (self.current_index + 1) % self.score_history.len();
    }
}
