//! Acceptors for local search move acceptance.
//!
//! Acceptors decide whether an evaluated move should be kept, comparing the
//! resulting score with the previous step's score.

mod hill_climbing;
mod late_acceptance;

use std::fmt::Debug;

use submatch_core::HardSoftScore;

pub use hill_climbing::HillClimbingAcceptor;
pub use late_acceptance::LateAcceptanceAcceptor;

/// Strategy for accepting or rejecting moves in local search.
pub trait Acceptor: Send + Debug {
    /// Returns true if a move resulting in `move_score` should be accepted,
    /// given the previous step's score.
    fn is_accepted(&mut self, last_step_score: &HardSoftScore, move_score: &HardSoftScore)
        -> bool;

    /// Called once when the search starts.
    fn phase_started(&mut self, _initial_score: &HardSoftScore) {}

    /// Called after every accepted step.
    fn step_ended(&mut self, _step_score: &HardSoftScore) {}
}

/// Acceptor chosen at runtime from the configuration.
#[derive(Debug, Clone)]
pub enum AnyAcceptor {
    /// Accept only strictly improving moves.
    HillClimbing(HillClimbingAcceptor),
    /// Accept moves beating the score from N steps ago.
    LateAcceptance(LateAcceptanceAcceptor),
}

impl AnyAcceptor {
    /// Creates a hill climbing acceptor.
    pub fn hill_climbing() -> Self {
        AnyAcceptor::HillClimbing(HillClimbingAcceptor::new())
    }

    /// Creates a late acceptance acceptor with the given history size.
    pub fn late_acceptance(size: usize) -> Self {
        AnyAcceptor::LateAcceptance(LateAcceptanceAcceptor::new(size))
    }
}

impl Acceptor for AnyAcceptor {
    fn is_accepted(
        &mut self,
        last_step_score: &HardSoftScore,
        move_score: &HardSoftScore,
    ) -> bool {
        match self {
            AnyAcceptor::HillClimbing(inner) => inner.is_accepted(last_step_score, move_score),
            AnyAcceptor::LateAcceptance(inner) => inner.is_accepted(last_step_score, move_score),
        }
    }

    fn phase_started(&mut self, initial_score: &HardSoftScore) {
        match self {
            AnyAcceptor::HillClimbing(inner) => inner.phase_started(initial_score),
            AnyAcceptor::LateAcceptance(inner) => inner.phase_started(initial_score),
        }
    }

    fn step_ended(&mut self, step_score: &HardSoftScore) {
        match self {
            AnyAcceptor::HillClimbing(inner) => inner.step_ended(step_score),
            AnyAcceptor::LateAcceptance(inner) => inner.step_ended(step_score),
        }
    }
}
