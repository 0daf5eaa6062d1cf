//! Default configuration values loaded from config.defaults.toml.
//!
//! This module loads defaults from the shared TOML file at compile time,
//! so the checked-in defaults file is the single source of default values.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    mcts: MctsDefaults,
    actor: ActorDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    data_dir: String,
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct MctsDefaults {
    num_iterations: u32,
    exploration: f64,
    epsilon: f64,
    max_rollout_depth: u32,
    heuristic_depth: u32,
    lookahead_weight: f64,
}

#[derive(Debug, Deserialize)]
struct ActorDefaults {
    actor_id: String,
    max_episodes: i32,
    log_interval: u32,
    seed: u64,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn data_dir() -> &'static str {
    &DEFAULTS.common.data_dir
}
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}

// MCTS
pub fn num_iterations() -> u32 {
    DEFAULTS.mcts.num_iterations
}
pub fn exploration() -> f64 {
    DEFAULTS.mcts.exploration
}
pub fn epsilon() -> f64 {
    DEFAULTS.mcts.epsilon
}
pub fn max_rollout_depth() -> u32 {
    DEFAULTS.mcts.max_rollout_depth
}
pub fn heuristic_depth() -> u32 {
    DEFAULTS.mcts.heuristic_depth
}
pub fn lookahead_weight() -> f64 {
    DEFAULTS.mcts.lookahead_weight
}

// Actor
pub fn actor_id() -> &'static str {
    &DEFAULTS.actor.actor_id
}
pub fn max_episodes() -> i32 {
    DEFAULTS.actor.max_episodes
}
pub fn log_interval() -> u32 {
    DEFAULTS.actor.log_interval
}
pub fn seed() -> u64 {
    DEFAULTS.actor.seed
}
