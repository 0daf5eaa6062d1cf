//! Epsilon-greedy rollout policy.
//!
//! A rollout plays from a position until the game ends, the mover is stuck,
//! or the step cap is reached. Each step picks a uniformly random successor
//! with probability epsilon and the heuristic evaluator's choice otherwise.

use engine_core::GameState;
use rand::Rng;
use rand_chacha::ChaCha20Rng;

use crate::config::MctsConfig;
use crate::heuristic::HeuristicEvaluator;

/// Result of a single rollout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RolloutOutcome {
    /// Utility of the position the rollout stopped at
    pub value: f64,

    /// Number of moves played
    pub steps: u32,

    /// Whether the rollout stopped on a terminal position
    pub reached_terminal: bool,

    /// Whether the step cap ended the rollout on a non-terminal position
    pub truncated: bool,
}

/// Epsilon-greedy playout policy biased by [`HeuristicEvaluator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RolloutPolicy {
    epsilon: f64,
    max_depth: u32,
    evaluator: HeuristicEvaluator,
}

impl Default for RolloutPolicy {
    fn default() -> Self {
        Self::from_config(&MctsConfig::default())
    }
}

impl RolloutPolicy {
    pub fn new(epsilon: f64, max_depth: u32, evaluator: HeuristicEvaluator) -> Self {
        Self {
            epsilon,
            max_depth,
            evaluator,
        }
    }

    pub fn from_config(config: &MctsConfig) -> Self {
        Self::new(
            config.epsilon,
            config.max_rollout_depth,
            HeuristicEvaluator::from_config(config),
        )
    }

    pub fn evaluator(&self) -> &HeuristicEvaluator {
        &self.evaluator
    }

    /// Pick the index of the next position among `next_states`.
    ///
    /// `maximize` is whether the player choosing is player 1.
    /// Returns None only when `next_states` is empty.
    pub fn choose<S: GameState>(
        &self,
        next_states: &[S],
        maximize: bool,
        rng: &mut ChaCha20Rng,
    ) -> Option<usize> {
        if next_states.is_empty() {
            return None;
        }

        if rng.gen::<f64>() < self.epsilon {
            Some(rng.gen_range(0..next_states.len()))
        } else {
            self.evaluator.best_index(next_states, maximize)
        }
    }

    /// Play out from `start` and report the value reached.
    ///
    /// `start` itself is never modified; the playout works on a copy.
    /// If the cap stops the playout on a non-terminal position, that
    /// position's utility is used as the result.
    pub fn simulate<S: GameState>(&self, start: &S, rng: &mut ChaCha20Rng) -> RolloutOutcome {
        let mut current = start.clone();
        let mut steps = 0;

        while steps < self.max_depth && !current.is_terminal() {
            let mut next_states = current.next_states();
            let Some(index) = self.choose(&next_states, current.is_maximizing(), rng) else {
                break;
            };
            current = next_states.swap_remove(index);
            steps += 1;
        }

        let reached_terminal = current.is_terminal();
        RolloutOutcome {
            value: current.utility(),
            steps,
            reached_terminal,
            truncated: !reached_terminal && steps == self.max_depth,
        }
    }
}
