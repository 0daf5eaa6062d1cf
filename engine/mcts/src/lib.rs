//! Monte Carlo Tree Search (MCTS) for two-player zero-sum games.
//!
//! This crate provides a game-agnostic MCTS implementation that works with any
//! position type implementing the `engine-core` [`GameState`](engine_core::GameState)
//! trait. Given a position and an iteration budget it recommends the next
//! position to move to.
//!
//! # Overview
//!
//! MCTS builds a search tree by running iterations. Each iteration consists
//! of four phases:
//!
//! 1. **Selection**: Traverse the tree using UCB1 (Upper Confidence Bound) to
//!    balance exploration and exploitation
//! 2. **Expansion**: Add one previously unseen successor of the selected node
//! 3. **Simulation**: Play an epsilon-greedy rollout guided by a shallow
//!    heuristic lookahead
//! 4. **Backpropagation**: Update visit counts and value sums along the path
//!    from the new node to the root, flipping the sign at every level
//!
//! # Usage
//!
//! ```rust,ignore
//! use games_tictactoe::State;
//! use mcts::{run_mcts, search, MctsConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//!
//! // Default parameters, fixed budget
//! let next = search(State::new(), 1000, &mut rng).unwrap();
//!
//! // Full control and search statistics
//! let config = MctsConfig::for_evaluation().with_iterations(2000);
//! let result = run_mcts(config, State::new(), &mut rng).unwrap();
//! println!("Next: {}", result.state);
//! println!("Root visits per child: {:?}", result.child_visits);
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `num_iterations`: Iterations per search (default: 1000)
//! - `exploration`: UCB1 exploration constant (default: sqrt(2))
//! - `epsilon`: Probability of a random rollout move (default: 0.1)
//! - `max_rollout_depth`: Rollout step cap (default: 100)
//! - `heuristic_depth`: Plies of heuristic lookahead (default: 3)
//! - `lookahead_weight`: Share of the lookahead in the blend (default: 0.7)
//!
//! # Architecture
//!
//! ```text
//! +-------------------------------------------------------------+
//! |                         MctsSearch                          |
//! +-------------------------------------------------------------+
//! |  +-------------+  +---------------+  +---------------------+ |
//! |  |  MctsTree   |  | RolloutPolicy |  | HeuristicEvaluator  | |
//! |  |  (arena)    |  | (epsilon mix) |  | (depth-limited)     | |
//! |  +------+------+  +-------+-------+  +----------+----------+ |
//! |         |                 |                     |            |
//! |         v                 v                     v            |
//! |  +-------------------------------------------------------+   |
//! |  |        select -> expand -> simulate -> backpropagate  |   |
//! |  +-------------------------------------------------------+   |
//! +-------------------------------------------------------------+
//! ```

pub mod config;
pub mod heuristic;
pub mod node;
pub mod rollout;
pub mod search;
pub mod tree;

#[cfg(test)]
mod test_util;

// Re-export main types
pub use config::MctsConfig;
pub use heuristic::HeuristicEvaluator;
pub use node::{MctsNode, NodeId};
pub use rollout::{RolloutOutcome, RolloutPolicy};
pub use search::{run_mcts, search, MctsSearch, SearchError, SearchResult, SearchStats};
pub use tree::{MctsTree, TreeStats};
