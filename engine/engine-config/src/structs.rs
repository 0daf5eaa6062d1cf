//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_data_dir() -> String {
    defaults::data_dir().into()
}
fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_num_iterations() -> u32 {
    defaults::num_iterations()
}
fn d_exploration() -> f64 {
    defaults::exploration()
}
fn d_epsilon() -> f64 {
    defaults::epsilon()
}
fn d_max_rollout_depth() -> u32 {
    defaults::max_rollout_depth()
}
fn d_heuristic_depth() -> u32 {
    defaults::heuristic_depth()
}
fn d_lookahead_weight() -> f64 {
    defaults::lookahead_weight()
}
fn d_actor_id() -> String {
    defaults::actor_id().into()
}
fn d_max_episodes() -> i32 {
    defaults::max_episodes()
}
fn d_log_interval() -> u32 {
    defaults::log_interval()
}
fn d_seed() -> u64 {
    defaults::seed()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub mcts: MctsConfig,
    #[serde(default)]
    pub actor: ActorConfig,
}

/// Common configuration shared by all components
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_data_dir")]
    pub data_dir: String,
    #[serde(default = "d_log_level")]
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            data_dir: defaults::data_dir().into(),
            log_level: defaults::log_level().into(),
        }
    }
}

/// MCTS (Monte Carlo Tree Search) configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MctsConfig {
    #[serde(default = "d_num_iterations")]
    pub num_iterations: u32,
    /// UCB1 exploration constant
    #[serde(default = "d_exploration")]
    pub exploration: f64,
    /// Probability of a uniformly random rollout move
    #[serde(default = "d_epsilon")]
    pub epsilon: f64,
    #[serde(default = "d_max_rollout_depth")]
    pub max_rollout_depth: u32,
    #[serde(default = "d_heuristic_depth")]
    pub heuristic_depth: u32,
    /// Weight of the lookahead value against the position's own heuristic
    #[serde(default = "d_lookahead_weight")]
    pub lookahead_weight: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            num_iterations: defaults::num_iterations(),
            exploration: defaults::exploration(),
            epsilon: defaults::epsilon(),
            max_rollout_depth: defaults::max_rollout_depth(),
            heuristic_depth: defaults::heuristic_depth(),
            lookahead_weight: defaults::lookahead_weight(),
        }
    }
}

/// Actor (self-play) configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ActorConfig {
    #[serde(default = "d_actor_id")]
    pub actor_id: String,
    /// Games to play (-1 = until interrupted)
    #[serde(default = "d_max_episodes")]
    pub max_episodes: i32,
    #[serde(default = "d_log_interval")]
    pub log_interval: u32,
    #[serde(default = "d_seed")]
    pub seed: u64,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            actor_id: defaults::actor_id().into(),
            max_episodes: defaults::max_episodes(),
            log_interval: defaults::log_interval(),
            seed: defaults::seed(),
        }
    }
}
