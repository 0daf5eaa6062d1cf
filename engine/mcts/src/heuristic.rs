//! Bounded-depth heuristic lookahead.
//!
//! The evaluator blends a position's own heuristic with a shallow minimax
//! over its successors:
//!
//! ```text
//! value(s, 0)        = h(s)
//! value(terminal, d) = h(s)
//! value(s, d)        = w * best(value(s', d - 1)) + (1 - w) * h(s)
//! ```
//!
//! `best` is the maximum when player 1 is to move at `s` and the minimum
//! otherwise. Rollouts use it to pick their next move.

use engine_core::GameState;

use crate::config::MctsConfig;

/// Shallow minimax over heuristic values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicEvaluator {
    depth: u32,
    lookahead_weight: f64,
}

impl Default for HeuristicEvaluator {
    fn default() -> Self {
        Self::from_config(&MctsConfig::default())
    }
}

impl HeuristicEvaluator {
    pub fn new(depth: u32, lookahead_weight: f64) -> Self {
        Self {
            depth,
            lookahead_weight,
        }
    }

    pub fn from_config(config: &MctsConfig) -> Self {
        Self::new(config.heuristic_depth, config.lookahead_weight)
    }

    /// Lookahead depth used by [`evaluate`](Self::evaluate).
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Blend value of `state` at the configured depth.
    pub fn evaluate<S: GameState>(&self, state: &S) -> f64 {
        self.evaluate_at_depth(state, self.depth)
    }

    /// Blend value of `state` with `depth` plies of lookahead remaining.
    pub fn evaluate_at_depth<S: GameState>(&self, state: &S, depth: u32) -> f64 {
        let own = state.heuristic();
        if depth == 0 || state.is_terminal() {
            return own;
        }

        let next_states = state.next_states();
        if next_states.is_empty() {
            return own;
        }

        let values = next_states
            .iter()
            .map(|next| self.evaluate_at_depth(next, depth - 1));
        let best = if state.is_maximizing() {
            values.fold(f64::NEG_INFINITY, f64::max)
        } else {
            values.fold(f64::INFINITY, f64::min)
        };

        self.lookahead_weight * best + (1.0 - self.lookahead_weight) * own
    }

    /// Index of the candidate with the highest (`maximize`) or lowest blend
    /// value. Ties go to the earliest candidate; None if `candidates` is empty.
    pub fn best_index<S: GameState>(&self, candidates: &[S], maximize: bool) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, candidate) in candidates.iter().enumerate() {
            let value = self.evaluate(candidate);
            let improves = match best {
                None => true,
                Some((_, best_value)) if maximize => value > best_value,
                Some((_, best_value)) => value < best_value,
            };
            if improves {
                best = Some((index, value));
            }
        }
        best.map(|(index, _)| index)
    }
}
