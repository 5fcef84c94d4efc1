//! Conflict-aware subscription matching.
//!
//! Takes the typed facts of one matching request — candidate matches,
//! capacity pools, pinned preferences, penalty group memberships — and
//! searches for the confirmed subset that maximizes delivered capacity and
//! satisfied pins while never confirming two candidates competing for the
//! same (system, product) target.
//!
//! # Examples
//!
//! ```
//! use submatch::{CandidateMatch, CapacityPool, FactSet, Matcher, MatcherConfig};
//!
//! let facts = FactSet::builder()
//!     .pool(CapacityPool::new(0u32, 100))
//!     .candidate(CandidateMatch::new(1i64, 10i64, 9i64, 0u32, 1u32))
//!     .build()?;
//!
//! let outcome = Matcher::new(MatcherConfig::default()).run(facts)?;
//! assert!(outcome.score.is_feasible());
//! # Ok::<(), submatch::MatchError>(())
//! ```

pub mod logging;
pub mod matcher;
pub mod messages;
pub mod outcome;

pub use matcher::Matcher;
pub use outcome::{ConfirmedMatch, MatchOutcome};

pub use submatch_config::{
    AcceptorConfig, AcceptorType, ConfigError, EnvironmentMode, MatcherConfig, TerminationConfig,
};
pub use submatch_core::{
    CandidateMatch, CapacityPool, FactSet, FactSetBuilder, GroupId, HardSoftScore, MatchError,
    Message, MessageLevel, PenaltyGroup, PinnedPreference, Policy, PoolId, Product, ProductId,
    Result, Subscription, SubscriptionId, System, SystemId,
};
pub use submatch_solver::{Assignment, SearchStats};
