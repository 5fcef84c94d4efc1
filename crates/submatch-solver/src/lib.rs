//! Conflict-aware local search engine for subscription matching.
//!
//! The engine takes the immutable facts of one matching request, derives the
//! atomic decision units (match groups) and their mutual-exclusion conflict
//! sets, and then improves an [`Assignment`](assignment::Assignment) through
//! randomized swap moves until a configured stopping condition fires.
//!
//! Logging levels follow the usual convention:
//! - **INFO**: solve start/end, problem scale, construction summary
//! - **DEBUG**: best-solution improvements
//! - **TRACE**: individual move evaluations

pub mod acceptor;
pub mod assignment;
pub mod conflict;
pub mod heuristic;
pub mod scope;
pub mod scoring;
pub mod solver;
pub mod termination;

pub use acceptor::{Acceptor, AnyAcceptor, HillClimbingAcceptor, LateAcceptanceAcceptor};
pub use assignment::Assignment;
pub use conflict::{ConflictIndex, ConflictSet};
pub use heuristic::{ConflictMoveFilter, SwapMove, SwapMoveGenerator, UndoMove};
pub use scope::SearchScope;
pub use scoring::{MatchingScorer, ScoreWeights, Scorer};
pub use solver::{LocalSearch, SearchStats};
pub use termination::{
    OrTermination, StepCountTermination, Termination, TimeTermination,
    UnimprovedStepCountTermination,
};
