//! Core traits and types shared by the search engine and game implementations
//!
//! This crate provides the abstraction the MCTS engine drives:
//! - `GameState`: the position capability set (successors, terminality,
//!   utility, heuristic, mover identity, cloning, value equality)
//! - `Player` / `MAXIMIZING_PLAYER`: the two-party identity convention
//! - `game_utils`: helpers for two-player zero-sum implementations

pub mod game_utils;
pub mod state;

// Re-export main types for convenience
pub use game_utils::{opponent, outcome_utility};
pub use state::{GameState, Player, MAXIMIZING_PLAYER, MINIMIZING_PLAYER};
