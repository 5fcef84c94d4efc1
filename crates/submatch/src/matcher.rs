//! The top level matching pipeline.

use tracing::info;

use submatch_config::MatcherConfig;
use submatch_core::{FactSet, Result};
use submatch_solver::{Assignment, LocalSearch};

use crate::messages::collect_messages;
use crate::outcome::{confirmed_matches, MatchOutcome};

/// Runs the full matching pipeline: facts in, confirmed matches and
/// diagnostics out.
///
/// A `Matcher` is cheap to construct and holds only configuration, so one
/// instance can serve any number of sequential requests.
#[derive(Clone, Debug, Default)]
pub struct Matcher {
    config: MatcherConfig,
}

impl Matcher {
    /// Creates a matcher with the given configuration.
    pub fn new(config: MatcherConfig) -> Self {
        Matcher { config }
    }

    /// The matcher's configuration.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Solves one matching request.
    ///
    /// # Errors
    ///
    /// Propagates scoring failures and internal state errors from the
    /// search; the input facts themselves are validated earlier, by
    /// [`FactSetBuilder::build`](submatch_core::FactSetBuilder::build).
    pub fn run(&self, facts: FactSet) -> Result<MatchOutcome> {
        let mut assignment = Assignment::new(facts);
        let stats = LocalSearch::from_config(&self.config).solve(&mut assignment)?;

        let confirmed = confirmed_matches(&assignment)?;
        let messages = collect_messages(&assignment);
        info!(
            event = "match_end",
            score = %stats.best_score,
            confirmed = confirmed.len(),
            messages = messages.len(),
        );

        Ok(MatchOutcome {
            assignment,
            score: stats.best_score,
            confirmed,
            messages,
            stats,
        })
    }
}
