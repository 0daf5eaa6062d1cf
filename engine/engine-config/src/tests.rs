//! Tests for the configuration module.

use super::*;
use std::io::Write;

#[test]
fn test_default_config() {
    let config = CentralConfig::default();
    assert_eq!(config.common.data_dir, "./data");
    assert_eq!(config.common.log_level, "info");
    assert_eq!(config.actor.actor_id, "actor-1");
    assert_eq!(config.actor.max_episodes, 10);
    assert_eq!(config.actor.log_interval, 1);
    assert_eq!(config.actor.seed, 42);
}

#[test]
fn test_mcts_defaults() {
    let config = CentralConfig::default();
    assert_eq!(config.mcts.num_iterations, 1000);
    assert!((config.mcts.exploration - std::f64::consts::SQRT_2).abs() < f64::EPSILON);
    assert!((config.mcts.epsilon - 0.1).abs() < f64::EPSILON);
    assert_eq!(config.mcts.max_rollout_depth, 100);
    assert_eq!(config.mcts.heuristic_depth, 3);
    assert!((config.mcts.lookahead_weight - 0.7).abs() < f64::EPSILON);
}

#[test]
fn test_env_overrides() {
    std::env::set_var("ENGINE_MCTS_NUM_ITERATIONS", "250");
    std::env::set_var("ENGINE_ACTOR_ACTOR_ID", "override-actor");
    std::env::set_var("ENGINE_MCTS_LOOKAHEAD_WEIGHT", "0.5");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.mcts.num_iterations, 250);
    assert_eq!(config.actor.actor_id, "override-actor");
    assert!((config.mcts.lookahead_weight - 0.5).abs() < f64::EPSILON);

    std::env::remove_var("ENGINE_MCTS_NUM_ITERATIONS");
    std::env::remove_var("ENGINE_ACTOR_ACTOR_ID");
    std::env::remove_var("ENGINE_MCTS_LOOKAHEAD_WEIGHT");
}

#[test]
fn test_unparsable_env_override_is_ignored() {
    std::env::set_var("ENGINE_ACTOR_SEED", "not-a-number");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.actor.seed, 42);

    std::env::remove_var("ENGINE_ACTOR_SEED");
}

#[test]
fn test_parse_config_toml() {
    let toml_content = r#"
[common]
data_dir = "/custom/data"

[mcts]
num_iterations = 5000
epsilon = 0.0

[actor]
actor_id = "my-actor"
max_episodes = 100
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.common.data_dir, "/custom/data");
    assert_eq!(config.mcts.num_iterations, 5000);
    assert_eq!(config.mcts.epsilon, 0.0);
    assert_eq!(config.actor.actor_id, "my-actor");
    assert_eq!(config.actor.max_episodes, 100);
}

#[test]
fn test_partial_config() {
    let toml_content = r#"
[mcts]
heuristic_depth = 5
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.mcts.heuristic_depth, 5);
    assert_eq!(config.mcts.num_iterations, 1000); // Default
    assert_eq!(config.common.data_dir, "./data"); // Default
    assert_eq!(config.actor.actor_id, "actor-1"); // Default
}

#[test]
fn test_load_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[mcts]\nexploration = 2.5\n\n[actor]\nseed = 7").unwrap();

    let config = load_from_path(file.path());
    assert!((config.mcts.exploration - 2.5).abs() < f64::EPSILON);
    assert_eq!(config.actor.seed, 7);
    assert_eq!(config.mcts.max_rollout_depth, 100); // Default
}

#[test]
fn test_load_from_invalid_file_falls_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[mcts\nthis is not toml").unwrap();

    let config = load_from_path(file.path());
    assert_eq!(config.mcts.heuristic_depth, 3);
    assert_eq!(config.actor.max_episodes, 10);
}

#[test]
fn test_load_from_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_from_path(&dir.path().join("missing.toml"));
    assert_eq!(config.common.log_level, "info");
}

#[test]
fn test_config_clone() {
    let config = CentralConfig::default();
    let cloned = config.clone();
    assert_eq!(config.common.data_dir, cloned.common.data_dir);
    assert_eq!(config.actor.actor_id, cloned.actor.actor_id);
}
