//! User-facing diagnostics derived from the final solution.

use submatch_core::Message;
use submatch_solver::Assignment;

/// Collects the diagnostics of a solved assignment.
///
/// Every pinned preference without a confirmed candidate on its (system,
/// subscription) pair yields one `unsatisfied_pinned_match` message telling
/// the user the engine overrode their pin. Messages are sorted and
/// deduplicated so repeated pins report once.
pub fn collect_messages(assignment: &Assignment) -> Vec<Message> {
    let mut messages: Vec<Message> = assignment
        .facts()
        .pins()
        .iter()
        .filter(|pin| {
            !assignment.candidates().iter().any(|candidate| {
                assignment.candidate_confirmed(candidate)
                    && candidate.system_id == pin.system_id
                    && candidate.subscription_id == pin.subscription_id
            })
        })
        .map(|pin| {
            Message::info(
                "unsatisfied_pinned_match",
                [
                    ("system_id", pin.system_id.to_string()),
                    ("subscription_id", pin.subscription_id.to_string()),
                ],
            )
        })
        .collect();

    messages.sort_unstable();
    messages.dedup();
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use submatch_core::{
        CandidateMatch, CapacityPool, FactSet, GroupId, MessageLevel, PinnedPreference,
    };

    #[test]
    fn unsatisfied_pin_is_reported_once() {
        let facts = FactSet::builder()
            .pool(CapacityPool::new(0u32, 100))
            .candidate(CandidateMatch::new(1i64, 10i64, 9i64, 0u32, 1u32))
            .pin(PinnedPreference::new(1i64, 8i64))
            .pin(PinnedPreference::new(1i64, 8i64))
            .build()
            .unwrap();
        let assignment = Assignment::new(facts);

        let messages = collect_messages(&assignment);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].level, MessageLevel::Info);
        assert_eq!(messages[0].kind, "unsatisfied_pinned_match");
        assert_eq!(messages[0].data["system_id"], "1");
        assert_eq!(messages[0].data["subscription_id"], "8");
    }

    #[test]
    fn satisfied_pin_is_silent() {
        let facts = FactSet::builder()
            .pool(CapacityPool::new(0u32, 100))
            .candidate(CandidateMatch::new(1i64, 10i64, 9i64, 0u32, 1u32))
            .pin(PinnedPreference::new(1i64, 9i64))
            .build()
            .unwrap();
        let mut assignment = Assignment::new(facts);

        assert_eq!(collect_messages(&assignment).len(), 1);
        assignment.set_confirmed(GroupId(1), true).unwrap();
        assert!(collect_messages(&assignment).is_empty());
    }
}
