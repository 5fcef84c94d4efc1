//! End-to-end matching scenarios.

use submatch::{
    CandidateMatch, CapacityPool, EnvironmentMode, FactSet, Matcher, MatcherConfig, PenaltyGroup,
    PinnedPreference, Policy, Product, ProductId, Subscription, SubscriptionId, System, SystemId,
};

fn seeded_config(seed: u64) -> MatcherConfig {
    MatcherConfig {
        random_seed: Some(seed),
        ..MatcherConfig::testing()
    }
}

fn run(facts: FactSet) -> submatch::MatchOutcome {
    Matcher::new(seeded_config(42)).run(facts).unwrap()
}

#[test]
fn competing_subscriptions_never_both_cover_the_same_installation() {
    // subscriptions 100 and 200 both offer coverage for product 10 on
    // system 1; subscription 100 carries more capacity
    let facts = FactSet::builder()
        .pool(CapacityPool::new(0u32, 100))
        .pool(CapacityPool::new(1u32, 50))
        .candidate(CandidateMatch::new(1i64, 10i64, 100i64, 0u32, 1u32))
        .candidate(CandidateMatch::new(1i64, 10i64, 200i64, 1u32, 2u32))
        .build()
        .unwrap();

    let outcome = run(facts);

    assert!(outcome.score.is_feasible());
    assert_eq!(outcome.confirmed.len(), 1);
    let winner = &outcome.confirmed[0];
    assert_eq!(winner.system_id, SystemId(1));
    assert_eq!(winner.product_id, ProductId(10));
    assert_eq!(winner.subscription_id, SubscriptionId(100));
    assert_eq!(winner.cents, 100);
    assert!(outcome.messages.is_empty());
}

#[test]
fn pinned_preference_overrides_raw_capacity() {
    // the user pinned the weaker subscription 200 to system 1
    let facts = FactSet::builder()
        .pool(CapacityPool::new(0u32, 100))
        .pool(CapacityPool::new(1u32, 50))
        .candidate(CandidateMatch::new(1i64, 10i64, 100i64, 0u32, 1u32))
        .candidate(CandidateMatch::new(1i64, 10i64, 200i64, 1u32, 2u32))
        .pin(PinnedPreference::new(1i64, 200i64))
        .build()
        .unwrap();

    let outcome = run(facts);

    assert_eq!(outcome.confirmed.len(), 1);
    assert_eq!(outcome.confirmed[0].subscription_id, SubscriptionId(200));
    // the pin was honored, so no diagnostic
    assert!(outcome.messages.is_empty());
}

#[test]
fn impossible_pin_produces_a_diagnostic() {
    // subscription 300 has no candidate at all for system 1
    let facts = FactSet::builder()
        .pool(CapacityPool::new(0u32, 100))
        .candidate(CandidateMatch::new(1i64, 10i64, 100i64, 0u32, 1u32))
        .pin(PinnedPreference::new(1i64, 300i64))
        .build()
        .unwrap();

    let outcome = run(facts);

    assert_eq!(outcome.confirmed.len(), 1);
    assert_eq!(outcome.messages.len(), 1);
    let message = &outcome.messages[0];
    assert_eq!(message.kind, "unsatisfied_pinned_match");
    assert_eq!(message.data["system_id"], "1");
    assert_eq!(message.data["subscription_id"], "300");
}

#[test]
fn pool_capacity_is_split_equally_and_never_overdrawn() {
    // both systems are pinned to subscription 9, forcing both matches to be
    // confirmed out of the shared 100-cent pool
    let facts = FactSet::builder()
        .pool(CapacityPool::new(0u32, 100))
        .candidate(CandidateMatch::new(1i64, 10i64, 9i64, 0u32, 1u32))
        .candidate(CandidateMatch::new(2i64, 10i64, 9i64, 0u32, 2u32))
        .pin(PinnedPreference::new(1i64, 9i64))
        .pin(PinnedPreference::new(2i64, 9i64))
        .build()
        .unwrap();

    let outcome = run(facts);

    assert_eq!(outcome.confirmed.len(), 2);
    assert!(outcome.confirmed.iter().all(|m| m.cents == 50));
    let delivered: u64 = outcome.confirmed.iter().map(|m| m.cents).sum();
    assert_eq!(delivered, 100);
    assert!(outcome.messages.is_empty());
}

#[test]
fn splitting_a_subscription_across_penalty_groups_is_avoided() {
    // guests 1 and 2 live on different hosts; covering both from
    // subscription 9 would gain no cents but incur the split penalty
    let facts = FactSet::builder()
        .pool(CapacityPool::new(0u32, 100))
        .candidate(CandidateMatch::new(1i64, 10i64, 9i64, 0u32, 1u32))
        .candidate(CandidateMatch::new(2i64, 10i64, 9i64, 0u32, 2u32))
        .penalty_group(PenaltyGroup::new(1, 1i64))
        .penalty_group(PenaltyGroup::new(2, 2i64))
        .build()
        .unwrap();

    let outcome = run(facts);

    assert_eq!(outcome.confirmed.len(), 1);
    assert_eq!(outcome.confirmed[0].cents, 100);
}

#[test]
fn empty_facts_produce_an_empty_outcome() {
    let outcome = run(FactSet::builder().build().unwrap());

    assert!(outcome.confirmed.is_empty());
    assert!(outcome.messages.is_empty());
    assert_eq!(outcome.stats.steps, 0);
}

#[test]
fn runs_with_the_same_seed_are_reproducible() {
    let facts = || {
        FactSet::builder()
            .pool(CapacityPool::new(0u32, 70))
            .pool(CapacityPool::new(1u32, 80))
            .pool(CapacityPool::new(2u32, 90))
            .candidate(CandidateMatch::new(1i64, 10i64, 7i64, 0u32, 1u32))
            .candidate(CandidateMatch::new(1i64, 10i64, 8i64, 1u32, 2u32))
            .candidate(CandidateMatch::new(2i64, 10i64, 7i64, 0u32, 3u32))
            .candidate(CandidateMatch::new(2i64, 10i64, 9i64, 2u32, 4u32))
            .candidate(CandidateMatch::new(3i64, 11i64, 8i64, 1u32, 5u32))
            .build()
            .unwrap()
    };

    let first = Matcher::new(seeded_config(7)).run(facts()).unwrap();
    let second = Matcher::new(seeded_config(7)).run(facts()).unwrap();

    assert_eq!(first.confirmed, second.confirmed);
    assert_eq!(first.score, second.score);
}

#[test]
fn inventory_facts_ride_along_without_affecting_the_search() {
    let facts = FactSet::builder()
        .system(System::new(1i64, "web01", true))
        .product(Product::new(10i64, "Server OS"))
        .subscription(Subscription::new(9i64, "SKU-0001", "Server OS 1Y", 2, Policy::Physical))
        .pool(CapacityPool::new(0u32, 200))
        .candidate(CandidateMatch::new(1i64, 10i64, 9i64, 0u32, 1u32))
        .build()
        .unwrap();

    let outcome = Matcher::new(MatcherConfig {
        environment_mode: EnvironmentMode::FullAssert,
        random_seed: Some(1),
        ..MatcherConfig::default()
    })
    .run(facts)
    .unwrap();

    assert_eq!(outcome.confirmed.len(), 1);
    assert_eq!(outcome.confirmed[0].cents, 200);
}
