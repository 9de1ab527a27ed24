//! Tests for game configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 42

        [game]
        max_players = 3
        room_code_length = 4
        default_difficulty = "veryhard"
        rank_scores = [50, 25]
        fallback_score = 5

        [budgets.hard]
        max_depth = 12
        max_time_ms = 500
        max_nodes = 900
    "#;

    let config = GameConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.game.max_players, 3);
    assert_eq!(config.game.room_code_length, 4);
    assert_eq!(config.game.default_difficulty, Difficulty::VeryHard);
    // Unset keys keep their defaults.
    assert_eq!(config.game.min_ready_players, 2);
    assert_eq!(config.game.max_name_length, 20);
    assert_eq!(
        config.budget_for(Difficulty::Hard),
        SearchBudget::new(12, 500, 900)
    );
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 7
        game:
          max_players: 2
          default_difficulty: easy
        budgets:
          easy:
            max_depth: 5
            max_time_ms: 100
            max_nodes: 50
    "#;

    let config = GameConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.random_seed, Some(7));
    assert_eq!(config.game.max_players, 2);
    assert_eq!(config.game.default_difficulty, Difficulty::Easy);
    assert_eq!(config.budget_for(Difficulty::Easy).max_nodes, 50);
}

#[test]
fn test_empty_document_is_default() {
    let config = GameConfig::from_toml_str("").unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_defaults() {
    let game = GameSettings::default();
    assert_eq!(game.max_players, 4);
    assert_eq!(game.room_code_length, 6);
    assert_eq!(game.default_difficulty, Difficulty::Medium);
    assert_eq!(game.rank_scores, vec![100, 70, 50, 30]);
    assert_eq!(game.fallback_score, 10);
}

#[test]
fn test_budget_table() {
    let expected = [
        (Difficulty::Easy, (25, 2000, 10_000)),
        (Difficulty::Medium, (25, 2000, 10_000)),
        (Difficulty::Hard, (30, 3000, 15_000)),
        (Difficulty::VeryHard, (35, 4000, 20_000)),
        (Difficulty::Insane, (35, 4000, 20_000)),
    ];
    let config = GameConfig::new();
    for (difficulty, (depth, ms, nodes)) in expected {
        assert_eq!(
            config.budget_for(difficulty),
            SearchBudget::new(depth, ms, nodes)
        );
    }
}

#[test]
fn test_score_for_rank() {
    let game = GameSettings::default();
    assert_eq!(game.score_for_rank(1), 100);
    assert_eq!(game.score_for_rank(2), 70);
    assert_eq!(game.score_for_rank(3), 50);
    assert_eq!(game.score_for_rank(4), 30);
    assert_eq!(game.score_for_rank(5), 10);
    assert_eq!(game.score_for_rank(0), 10);
}

#[test]
fn test_builder() {
    let budget = SearchBudget::default()
        .with_max_depth(3)
        .with_max_time_ms(10)
        .with_max_nodes(0);
    let config = GameConfig::new()
        .with_random_seed(123)
        .with_max_players(8)
        .with_budget(Difficulty::Insane, budget);

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.game.max_players, 8);
    assert_eq!(config.budget_for(Difficulty::Insane), budget);
    assert_eq!(
        config.budget_for(Difficulty::VeryHard),
        SearchBudget::for_difficulty(Difficulty::VeryHard)
    );
}

#[test]
fn test_invalid_limits_rejected() {
    let err = GameConfig::from_toml_str("[game]\nmax_players = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = GameConfig::from_toml_str("[game]\nmax_players = 1\nmin_ready_players = 2\n")
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_unknown_difficulty_is_parse_error() {
    let err = GameConfig::from_toml_str("[game]\ndefault_difficulty = \"nightmare\"\n")
        .unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file_falls_back() {
    let err = GameConfig::load("/nonexistent/colormerge.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    let config = GameConfig::load("/nonexistent/colormerge.toml").unwrap_or_default();
    assert_eq!(config.game.max_players, 4);
}
