//! MCTS search implementation.
//!
//! Implements the core MCTS algorithm:
//! 1. Selection: Descend with UCB1 until a position that still has an
//!    unmaterialized successor (or a terminal position)
//! 2. Expansion: Materialize one new child for that position
//! 3. Simulation: Epsilon-greedy rollout from the new child
//! 4. Backpropagation: Record the rollout value up to the root,
//!    negating it at every level
//!
//! The tree is built from scratch on every call and dropped when the
//! recommendation is returned.

use std::time::Instant;

use engine_core::GameState;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::MctsConfig;
use crate::node::NodeId;
use crate::rollout::{RolloutOutcome, RolloutPolicy};
use crate::tree::MctsTree;

/// Errors that can occur during MCTS search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Iteration budget must be at least 1, got {0}")]
    InvalidBudget(u32),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Counters collected while a search runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStats {
    /// Iterations completed
    pub iterations: u32,
    /// Nodes added to the tree (root excluded)
    pub nodes_created: u32,
    /// Expansions that found no new successor and reused the best child
    pub expansion_fallbacks: u32,
    /// Iterations whose selected node was terminal or had no successors
    pub terminal_hits: u32,
    /// Moves played across all rollouts
    pub rollout_steps: u64,
    /// Rollouts stopped by the step cap on a non-terminal position
    pub truncated_rollouts: u32,
    /// Wall-clock time of the search (microseconds)
    pub total_time_us: u64,
}

/// Result of an MCTS search.
#[derive(Debug, Clone)]
pub struct SearchResult<S> {
    /// Recommended next position (the initial position if it has no children)
    pub state: S,

    /// Mean outcome recorded at the root
    pub value: f64,

    /// Visit counts of the root's children in creation order
    pub child_visits: Vec<u32>,

    /// Number of outcomes recorded at the root
    pub root_visits: u32,

    pub stats: SearchStats,
}

/// MCTS search state.
pub struct MctsSearch<S: GameState> {
    tree: MctsTree<S>,
    config: MctsConfig,
    rollout: RolloutPolicy,
    stats: SearchStats,
}

impl<S: GameState> MctsSearch<S> {
    /// Create a new MCTS search from the given position.
    pub fn new(config: MctsConfig, initial_state: S) -> Result<Self, SearchError> {
        config.validate()?;

        Ok(Self {
            tree: MctsTree::new(initial_state),
            rollout: RolloutPolicy::from_config(&config),
            config,
            stats: SearchStats::default(),
        })
    }

    /// Run the configured number of iterations and recommend a position.
    ///
    /// Calling `run` again keeps growing the same tree.
    pub fn run(&mut self, rng: &mut ChaCha20Rng) -> Result<SearchResult<S>, SearchError> {
        let start = Instant::now();

        for iteration in 0..self.config.num_iterations {
            self.iterate(iteration, rng);
        }

        self.stats.total_time_us += start.elapsed().as_micros() as u64;

        let root = self.tree.get(self.tree.root());
        let result = SearchResult {
            state: self.recommend().clone(),
            value: root.mean_value(),
            child_visits: self.tree.root_visits(),
            root_visits: root.visit_count,
            stats: self.stats.clone(),
        };

        debug!(
            iterations = self.stats.iterations,
            tree_size = self.tree.len(),
            root_visits = result.root_visits,
            root_value = result.value,
            fallbacks = self.stats.expansion_fallbacks,
            truncated = self.stats.truncated_rollouts,
            elapsed_us = self.stats.total_time_us,
            "MCTS search complete"
        );

        Ok(result)
    }

    /// Run a single iteration (select -> expand -> simulate -> backpropagate).
    fn iterate(&mut self, iteration: u32, rng: &mut ChaCha20Rng) {
        let selected = self.select();
        let expanded = self.expand(selected);
        let outcome = self.simulate(expanded, rng);

        self.tree.backpropagate(expanded, outcome.value);

        self.stats.iterations += 1;
        self.stats.rollout_steps += outcome.steps as u64;
        if outcome.truncated {
            self.stats.truncated_rollouts += 1;
        }

        trace!(
            iteration,
            selected = selected.0,
            expanded = expanded.0,
            steps = outcome.steps,
            value = outcome.value,
            "MCTS iteration complete"
        );
    }

    /// Descend from the root until a terminal position or a node that still
    /// has an unmaterialized successor.
    fn select(&self) -> NodeId {
        let mut current = self.tree.root();

        while !self.tree.get(current).state.is_terminal() {
            if !self.tree.is_fully_expanded(current) {
                return current;
            }

            match self.tree.best_child(current, self.config.exploration) {
                Some(child_id) => current = child_id,
                None => break, // Non-terminal position without successors
            }
        }

        current
    }

    /// Materialize the first successor that is not yet a child.
    ///
    /// Terminal and stuck positions are returned unchanged. If every
    /// successor is already present, the best child under pure
    /// exploitation is reused.
    fn expand(&mut self, node_id: NodeId) -> NodeId {
        let state = &self.tree.get(node_id).state;
        if state.is_terminal() {
            self.stats.terminal_hits += 1;
            return node_id;
        }

        let next_states = state.next_states();
        if next_states.is_empty() {
            self.stats.terminal_hits += 1;
            return node_id;
        }

        let fresh = next_states
            .into_iter()
            .find(|candidate| !self.tree.has_child_state(node_id, candidate));

        match fresh {
            Some(state) => {
                self.stats.nodes_created += 1;
                self.tree.add_child(node_id, state)
            }
            None => {
                self.stats.expansion_fallbacks += 1;
                self.tree.best_child(node_id, 0.0).unwrap_or(node_id)
            }
        }
    }

    fn simulate(&self, node_id: NodeId, rng: &mut ChaCha20Rng) -> RolloutOutcome {
        self.rollout.simulate(&self.tree.get(node_id).state, rng)
    }

    /// Best root child under pure exploitation, or the root position itself
    /// when nothing was expanded.
    fn recommend(&self) -> &S {
        let root = self.tree.root();
        let best = self.tree.best_child(root, 0.0).unwrap_or(root);
        &self.tree.get(best).state
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &MctsTree<S> {
        &self.tree
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Convenience function to run a single MCTS search with a full config.
pub fn run_mcts<S: GameState>(
    config: MctsConfig,
    initial_state: S,
    rng: &mut ChaCha20Rng,
) -> Result<SearchResult<S>, SearchError> {
    let mut search = MctsSearch::new(config, initial_state)?;
    search.run(rng)
}

/// Recommend the next position after `iterations` iterations with the
/// default parameters (c = sqrt(2), epsilon = 0.1, 100-step rollouts,
/// depth-3 heuristic lookahead).
///
/// Returns `initial_state` itself when it is terminal or has no successors.
pub fn search<S: GameState>(
    initial_state: S,
    iterations: u32,
    rng: &mut ChaCha20Rng,
) -> Result<S, SearchError> {
    let config = MctsConfig::default().with_iterations(iterations);
    run_mcts(config, initial_state, rng).map(|result| result.state)
}
