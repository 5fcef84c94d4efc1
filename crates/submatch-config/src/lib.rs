//! Run configuration for the subscription matching engine.
//!
//! Load matcher configuration from TOML or YAML files to control the random
//! seed, assertion strictness, termination limits and move acceptance
//! strategy without code changes.
//!
//! # Examples
//!
//! ```
//! use submatch_config::MatcherConfig;
//!
//! let config = MatcherConfig::from_toml_str(r#"
//!     environment_mode = "full_assert"
//!     random_seed = 42
//!
//!     [termination]
//!     unimproved_step_count_limit = 12
//!
//!     [acceptor]
//!     acceptor_type = "late_acceptance"
//!     late_acceptance_size = 100
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(42));
//! assert_eq!(config.termination.unimproved_step_count_limit, Some(12));
//! ```
//!
//! Use default config when no file is given:
//!
//! ```
//! use submatch_config::MatcherConfig;
//!
//! let config = MatcherConfig::load("matcher.toml").unwrap_or_default();
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Production default for the unimproved-step termination.
pub const DEFAULT_UNIMPROVED_STEP_COUNT_LIMIT: u64 = 500;

/// Unimproved-step limit used by the test preset; tests deal with fewer
/// data and need to run faster.
pub const TESTING_UNIMPROVED_STEP_COUNT_LIMIT: u64 = 12;

/// Default size of the late acceptance score history.
pub const DEFAULT_LATE_ACCEPTANCE_SIZE: usize = 400;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Main matcher configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MatcherConfig {
    /// Environment mode affecting assertion strictness.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Random seed for reproducible runs; `None` draws an OS seed.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Termination configuration.
    #[serde(default)]
    pub termination: TerminationConfig,

    /// Move acceptance configuration.
    #[serde(default)]
    pub acceptor: AcceptorConfig,
}

impl MatcherConfig {
    /// Parses a configuration from a TOML string.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: MatcherConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a configuration from a YAML string.
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: MatcherConfig = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file, dispatching on the file extension
    /// (`.toml`, `.yaml` or `.yml`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&raw),
            _ => Self::from_toml_str(&raw),
        }
    }

    /// The configuration preset used by unit tests: full assertions and a
    /// much smaller unimproved-step limit than production.
    pub fn testing() -> Self {
        MatcherConfig {
            environment_mode: EnvironmentMode::FullAssert,
            random_seed: None,
            termination: TerminationConfig {
                unimproved_step_count_limit: Some(TESTING_UNIMPROVED_STEP_COUNT_LIMIT),
                ..TerminationConfig::default()
            },
            acceptor: AcceptorConfig::default(),
        }
    }

    /// The configured time limit, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.seconds_spent_limit.map(Duration::from_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.acceptor.late_acceptance_size == 0 {
            return Err(ConfigError::Invalid(
                "late_acceptance_size must be greater than zero".into(),
            ));
        }
        if self.termination.step_count_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "step_count_limit must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Environment mode affecting reproducibility and assertions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Fastest; no extra consistency checks during search.
    #[default]
    Production,
    /// Re-checks the conflict invariant after every applied move. Slow;
    /// meant for tests and debugging.
    FullAssert,
}

/// Stopping conditions for the local search.
///
/// Limits compose with OR semantics: the search stops as soon as any
/// configured limit fires. When no limit is set at all, the engine falls
/// back to [`DEFAULT_UNIMPROVED_STEP_COUNT_LIMIT`] so a run always
/// terminates.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Stop after this many consecutive steps without improving the best
    /// score.
    #[serde(default)]
    pub unimproved_step_count_limit: Option<u64>,

    /// Stop after this many steps in total.
    #[serde(default)]
    pub step_count_limit: Option<u64>,

    /// Stop after this many seconds of wall-clock time.
    #[serde(default)]
    pub seconds_spent_limit: Option<u64>,
}

/// Move acceptance strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AcceptorType {
    /// Accept only strictly improving moves.
    HillClimbing,
    /// Accept moves beating the score from N steps ago.
    LateAcceptance,
}

/// Configuration of the move acceptance strategy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AcceptorConfig {
    /// Which acceptor to use.
    pub acceptor_type: AcceptorType,

    /// Size of the late acceptance score history.
    #[serde(default = "default_late_acceptance_size")]
    pub late_acceptance_size: usize,
}

impl Default for AcceptorConfig {
    fn default() -> Self {
        AcceptorConfig {
            acceptor_type: AcceptorType::LateAcceptance,
            late_acceptance_size: DEFAULT_LATE_ACCEPTANCE_SIZE,
        }
    }
}

fn default_late_acceptance_size() -> usize {
    DEFAULT_LATE_ACCEPTANCE_SIZE
}

#[cfg(test)]
mod tests;
