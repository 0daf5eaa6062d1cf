//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use crate::CentralConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",      // Current directory
    "../config.toml",   // Parent directory (when running from subdirectory)
    "/app/config.toml", // Docker container
];

/// Load the central configuration from config.toml.
///
/// Searches for config.toml in the following order:
/// 1. Path specified by ENGINE_CONFIG environment variable
/// 2. Current directory (config.toml)
/// 3. Parent directory (../config.toml)
/// 4. Docker container path (/app/config.toml)
///
/// After loading, environment variable overrides are applied.
pub fn load_config() -> CentralConfig {
    // Check for explicit config path
    if let Ok(path) = std::env::var("ENGINE_CONFIG") {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from ENGINE_CONFIG: {}", path.display());
            return load_from_path(&path);
        }
        warn!(
            "ENGINE_CONFIG={} not found, searching defaults",
            path.display()
        );
    }

    // Search default locations
    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(path);
        }
    }

    // Fall back to defaults
    debug!("No config.toml found, using built-in defaults");
    apply_env_overrides(CentralConfig::default())
}

/// Load configuration from a specific path.
///
/// Read or parse failures are logged and fall back to the built-in defaults.
pub fn load_from_path(path: &Path) -> CentralConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(CentralConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(CentralConfig::default())
        }
    }
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (u32, u64, f64, etc.); unparsable values are ignored
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        if let Ok(raw) = std::env::var($key) {
            match raw.parse() {
                Ok(v) => $config.$section.$field = v,
                Err(_) => warn!("Ignoring {}={:?}: not a valid value", $key, raw),
            }
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: ENGINE_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    // Common
    env_override!(config, common.data_dir, "ENGINE_COMMON_DATA_DIR");
    env_override!(config, common.log_level, "ENGINE_COMMON_LOG_LEVEL");

    // MCTS
    env_override!(
        config,
        mcts.num_iterations,
        "ENGINE_MCTS_NUM_ITERATIONS",
        parse
    );
    env_override!(config, mcts.exploration, "ENGINE_MCTS_EXPLORATION", parse);
    env_override!(config, mcts.epsilon, "ENGINE_MCTS_EPSILON", parse);
    env_override!(
        config,
        mcts.max_rollout_depth,
        "ENGINE_MCTS_MAX_ROLLOUT_DEPTH",
        parse
    );
    env_override!(
        config,
        mcts.heuristic_depth,
        "ENGINE_MCTS_HEURISTIC_DEPTH",
        parse
    );
    env_override!(
        config,
        mcts.lookahead_weight,
        "ENGINE_MCTS_LOOKAHEAD_WEIGHT",
        parse
    );

    // Actor
    env_override!(config, actor.actor_id, "ENGINE_ACTOR_ACTOR_ID");
    env_override!(
        config,
        actor.max_episodes,
        "ENGINE_ACTOR_MAX_EPISODES",
        parse
    );
    env_override!(
        config,
        actor.log_interval,
        "ENGINE_ACTOR_LOG_INTERVAL",
        parse
    );
    env_override!(config, actor.seed, "ENGINE_ACTOR_SEED", parse);

    config
}
