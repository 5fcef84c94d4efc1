//! Hill climbing acceptor.

use submatch_core::HardSoftScore;

use super::Acceptor;

/// Accepts only strictly improving moves.
///
/// The simplest acceptor; fast but liable to get stuck in local optima.
#[derive(Debug, Clone, Copy, Default)]
pub struct HillClimbingAcceptor;

impl HillClimbingAcceptor {
    /// Creates a new hill climbing acceptor.
    pub fn new() -> Self {
        Self
    }
}

impl Acceptor for HillClimbingAcceptor {
    fn is_accepted(
        &mut self,
        last_step_score: &HardSoftScore,
        move_score: &HardSoftScore,
    ) -> bool {
        move_score > last_step_score
    }
}
