//! MCTS configuration parameters.

use crate::search::SearchError;

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone, PartialEq)]
pub struct MctsConfig {
    /// Number of select/expand/simulate/backpropagate iterations per search.
    pub num_iterations: u32,

    /// Exploration weight `c` in the UCB1 formula used during selection.
    /// The final recommendation always uses 0 (pure exploitation).
    pub exploration: f64,

    /// Probability that a rollout step picks a uniformly random successor
    /// instead of the heuristic choice. 0.0 makes rollouts deterministic.
    pub epsilon: f64,

    /// Maximum number of moves a single rollout may play.
    pub max_rollout_depth: u32,

    /// Lookahead depth of the heuristic evaluator used by rollouts.
    pub heuristic_depth: u32,

    /// Weight of the best successor value in the heuristic blend.
    /// The position's own heuristic receives `1 - lookahead_weight`.
    pub lookahead_weight: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            num_iterations: 1000,
            exploration: std::f64::consts::SQRT_2,
            epsilon: 0.1,
            max_rollout_depth: 100,
            heuristic_depth: 3,
            lookahead_weight: 0.7,
        }
    }
}

impl MctsConfig {
    /// Create config for evaluation (no random rollout moves).
    pub fn for_evaluation() -> Self {
        Self {
            epsilon: 0.0,
            ..Self::default()
        }
    }

    /// Create a fast, deterministic config for testing.
    pub fn for_testing() -> Self {
        Self {
            num_iterations: 50,
            epsilon: 0.0,
            ..Self::default()
        }
    }

    /// Builder pattern: set number of iterations.
    pub fn with_iterations(mut self, n: u32) -> Self {
        self.num_iterations = n;
        self
    }

    /// Builder pattern: set UCB1 exploration weight.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration = c;
        self
    }

    /// Builder pattern: set rollout exploration probability.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Builder pattern: set rollout step cap.
    pub fn with_max_rollout_depth(mut self, depth: u32) -> Self {
        self.max_rollout_depth = depth;
        self
    }

    /// Builder pattern: set heuristic lookahead depth.
    pub fn with_heuristic_depth(mut self, depth: u32) -> Self {
        self.heuristic_depth = depth;
        self
    }

    /// Builder pattern: set heuristic blend weight.
    pub fn with_lookahead_weight(mut self, weight: f64) -> Self {
        self.lookahead_weight = weight;
        self
    }

    /// Check the parameters before a search starts.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.num_iterations == 0 {
            return Err(SearchError::InvalidBudget(self.num_iterations));
        }
        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "exploration must be a finite non-negative number, got {}",
                self.exploration
            )));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(SearchError::InvalidConfig(format!(
                "epsilon must be within [0, 1], got {}",
                self.epsilon
            )));
        }
        if !(0.0..=1.0).contains(&self.lookahead_weight) {
            return Err(SearchError::InvalidConfig(format!(
                "lookahead_weight must be within [0, 1], got {}",
                self.lookahead_weight
            )));
        }
        Ok(())
    }
}
