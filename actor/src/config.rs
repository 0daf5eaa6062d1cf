//! Configuration for the Actor service
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use anyhow::{anyhow, Result};
use clap::Parser;
use engine_config::{load_config, CentralConfig};
use mcts::MctsConfig;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

// Default value functions that read from central config
fn default_actor_id() -> String {
    CENTRAL_CONFIG.actor.actor_id.clone()
}

fn default_max_episodes() -> i32 {
    CENTRAL_CONFIG.actor.max_episodes
}

fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

fn default_log_interval() -> u32 {
    CENTRAL_CONFIG.actor.log_interval
}

fn default_data_dir() -> String {
    CENTRAL_CONFIG.common.data_dir.clone()
}

fn default_seed() -> u64 {
    CENTRAL_CONFIG.actor.seed
}

fn default_num_iterations() -> u32 {
    CENTRAL_CONFIG.mcts.num_iterations
}

fn default_exploration() -> f64 {
    CENTRAL_CONFIG.mcts.exploration
}

fn default_epsilon() -> f64 {
    CENTRAL_CONFIG.mcts.epsilon
}

fn default_max_rollout_depth() -> u32 {
    CENTRAL_CONFIG.mcts.max_rollout_depth
}

fn default_heuristic_depth() -> u32 {
    CENTRAL_CONFIG.mcts.heuristic_depth
}

fn default_lookahead_weight() -> f64 {
    CENTRAL_CONFIG.mcts.lookahead_weight
}

#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(name = "actor")]
#[command(about = "Self-play runner - TicTacToe games between two MCTS searchers")]
#[command(
    long_about = "Actor that plays TicTacToe games where both sides pick their moves
with Monte Carlo Tree Search, and writes running statistics to
<data_dir>/actor_stats.json.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    /// Unique actor identifier
    #[arg(long, default_value_t = default_actor_id())]
    pub actor_id: String,

    /// Maximum episodes to run (-1 for unlimited)
    #[arg(long, default_value_t = default_max_episodes(), allow_negative_numbers = true)]
    pub max_episodes: i32,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,

    /// Log progress every N episodes (0 to disable)
    #[arg(long, default_value_t = default_log_interval())]
    pub log_interval: u32,

    /// Data directory for the stats file
    #[arg(long, default_value_t = default_data_dir())]
    pub data_dir: String,

    /// Base seed; episode N is played with seed + N
    #[arg(long, default_value_t = default_seed())]
    pub seed: u64,

    /// Number of MCTS iterations per move
    #[arg(long, default_value_t = default_num_iterations())]
    pub num_iterations: u32,

    /// UCB1 exploration constant
    #[arg(long, default_value_t = default_exploration())]
    pub exploration: f64,

    /// Probability of a random move during rollouts
    #[arg(long, default_value_t = default_epsilon())]
    pub epsilon: f64,

    /// Maximum moves per rollout
    #[arg(long, default_value_t = default_max_rollout_depth())]
    pub max_rollout_depth: u32,

    /// Plies of heuristic lookahead used to bias rollouts
    #[arg(long, default_value_t = default_heuristic_depth())]
    pub heuristic_depth: u32,

    /// Weight of the lookahead value against the position's own heuristic
    #[arg(long, default_value_t = default_lookahead_weight())]
    pub lookahead_weight: f64,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.actor_id.is_empty() {
            return Err(anyhow!("actor_id cannot be empty"));
        }

        if self.max_episodes == 0 {
            return Err(anyhow!("max_episodes must be positive or -1 for unlimited"));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        self.mcts_config().validate()?;

        Ok(())
    }

    /// Search parameters used for every move
    pub fn mcts_config(&self) -> MctsConfig {
        MctsConfig::default()
            .with_iterations(self.num_iterations)
            .with_exploration(self.exploration)
            .with_epsilon(self.epsilon)
            .with_max_rollout_depth(self.max_rollout_depth)
            .with_heuristic_depth(self.heuristic_depth)
            .with_lookahead_weight(self.lookahead_weight)
    }

    /// Human-readable episode limit for logging
    pub fn max_episodes_description(&self) -> String {
        if self.max_episodes < 0 {
            "unlimited".to_string()
        } else {
            self.max_episodes.to_string()
        }
    }
}
