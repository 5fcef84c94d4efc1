//! Score types used to rank assignments.

mod hard_soft;

pub use hard_soft::HardSoftScore;
