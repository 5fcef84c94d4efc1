//! Diagnostic message fact.

use std::collections::BTreeMap;

/// Severity of a [`Message`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MessageLevel {
    /// Informational, e.g. an unsatisfied pin.
    Info,
    /// A warning the user should look at.
    Warning,
    /// An error in the input data.
    Error,
}

/// A user-facing diagnostic produced by the result collector.
///
/// The payload is a sorted key/value map so that message lists are
/// deterministic and deduplicable.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Message {
    /// Severity level.
    pub level: MessageLevel,
    /// Machine readable message kind, e.g. `unsatisfied_pinned_match`.
    pub kind: String,
    /// Message payload, sorted by key.
    pub data: BTreeMap<String, String>,
}

impl Message {
    /// Creates an informational message with the given payload pairs.
    pub fn info<K, V>(kind: impl Into<String>, data: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Message {
            level: MessageLevel::Info,
            kind: kind.into(),
            data: data
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
