//! Moves, move generation and move filtering.

mod filter;
mod generator;
mod swap;

pub use filter::ConflictMoveFilter;
pub use generator::SwapMoveGenerator;
pub use swap::{SwapMove, UndoMove};
