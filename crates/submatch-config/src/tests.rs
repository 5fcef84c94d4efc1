use super::*;

#[test]
fn default_config() {
    let config = MatcherConfig::default();
    assert_eq!(config.environment_mode, EnvironmentMode::Production);
    assert_eq!(config.random_seed, None);
    assert_eq!(config.termination.unimproved_step_count_limit, None);
    assert_eq!(config.acceptor.acceptor_type, AcceptorType::LateAcceptance);
    assert_eq!(
        config.acceptor.late_acceptance_size,
        DEFAULT_LATE_ACCEPTANCE_SIZE
    );
}

#[test]
fn parse_toml() {
    let config = MatcherConfig::from_toml_str(
        r#"
        environment_mode = "full_assert"
        random_seed = 7

        [termination]
        unimproved_step_count_limit = 12
        seconds_spent_limit = 30

        [acceptor]
        acceptor_type = "hill_climbing"
        "#,
    )
    .unwrap();

    assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
    assert_eq!(config.random_seed, Some(7));
    assert_eq!(config.termination.unimproved_step_count_limit, Some(12));
    assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
    assert_eq!(config.acceptor.acceptor_type, AcceptorType::HillClimbing);
}

#[test]
fn parse_yaml() {
    let config = MatcherConfig::from_yaml_str(
        r#"
        random_seed: 99
        termination:
          step_count_limit: 1000
        acceptor:
          acceptor_type: late_acceptance
          late_acceptance_size: 50
        "#,
    )
    .unwrap();

    assert_eq!(config.random_seed, Some(99));
    assert_eq!(config.termination.step_count_limit, Some(1000));
    assert_eq!(config.acceptor.late_acceptance_size, 50);
}

#[test]
fn zero_late_acceptance_size_is_invalid() {
    let err = MatcherConfig::from_toml_str(
        r#"
        [acceptor]
        acceptor_type = "late_acceptance"
        late_acceptance_size = 0
        "#,
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn testing_preset_shrinks_unimproved_limit() {
    let config = MatcherConfig::testing();
    assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
    assert_eq!(
        config.termination.unimproved_step_count_limit,
        Some(TESTING_UNIMPROVED_STEP_COUNT_LIMIT)
    );
    assert!(
        TESTING_UNIMPROVED_STEP_COUNT_LIMIT < DEFAULT_UNIMPROVED_STEP_COUNT_LIMIT,
        "test runs must terminate sooner than production runs"
    );
}
