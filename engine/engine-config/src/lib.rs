//! Centralized configuration loading from config.toml.
//!
//! This crate provides configuration structs and loading logic shared
//! across the Rust components (search engine settings and the self-play actor).
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`ENGINE_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! ENGINE_<SECTION>_<KEY>=value
//!
//! Examples:
//!     ENGINE_COMMON_DATA_DIR=/data
//!     ENGINE_COMMON_LOG_LEVEL=debug
//!     ENGINE_MCTS_NUM_ITERATIONS=5000
//!     ENGINE_MCTS_EPSILON=0.0
//!     ENGINE_ACTOR_MAX_EPISODES=100
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;

#[cfg(test)]
mod tests;
