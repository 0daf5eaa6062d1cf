//! Self-play runner: both sides of every game are played by MCTS.

use anyhow::{anyhow, Result};
use games_tictactoe::State;
use indicatif::{ProgressBar, ProgressStyle};
use mcts::{run_mcts, MctsConfig, SearchStats};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Instant;
use tracing::{debug, error, info, trace};

use crate::config::Config;
use crate::stats::ActorStats;

/// A TicTacToe game can never take more moves than there are squares.
const MAX_MOVES: u32 = 9;

/// Aggregated MCTS stats for an episode.
#[derive(Debug, Default)]
pub struct EpisodeStats {
    /// Number of MCTS searches performed
    pub search_count: u32,
    /// Total wall-clock time across all searches (microseconds)
    pub total_time_us: u64,
    /// Total iterations across all searches
    pub iterations: u64,
    /// Total tree nodes created
    pub nodes_created: u64,
    /// Total rollout moves played
    pub rollout_steps: u64,
    /// Rollouts stopped by the step cap
    pub truncated_rollouts: u32,
    /// Expansions that reused an existing child
    pub expansion_fallbacks: u32,
    /// Iterations that selected a finished position
    pub terminal_hits: u32,
}

impl EpisodeStats {
    /// Add stats from a single MCTS search.
    fn add(&mut self, stats: &SearchStats) {
        self.search_count += 1;
        self.total_time_us += stats.total_time_us;
        self.iterations += stats.iterations as u64;
        self.nodes_created += stats.nodes_created as u64;
        self.rollout_steps += stats.rollout_steps;
        self.truncated_rollouts += stats.truncated_rollouts;
        self.expansion_fallbacks += stats.expansion_fallbacks;
        self.terminal_hits += stats.terminal_hits;
    }

    /// Log a summary of the episode stats.
    fn log_summary(&self, episode_num: u32) {
        if self.search_count == 0 || self.total_time_us == 0 {
            return;
        }

        let total_ms = self.total_time_us as f64 / 1000.0;
        let avg_rollout = if self.iterations > 0 {
            self.rollout_steps as f64 / self.iterations as f64
        } else {
            0.0
        };

        info!(
            episode = episode_num,
            searches = self.search_count,
            total_ms = format!("{:.1}", total_ms),
            iterations = self.iterations,
            nodes_created = self.nodes_created,
            avg_rollout_steps = format!("{:.2}", avg_rollout),
            truncated_rollouts = self.truncated_rollouts,
            expansion_fallbacks = self.expansion_fallbacks,
            terminal_hits = self.terminal_hits,
            "MCTS episode stats"
        );
    }
}

/// Result of a finished game.
#[derive(Debug)]
pub struct EpisodeOutcome {
    pub moves: u32,
    /// Winner indicator of the final board (1 = X, 2 = O, 3 = draw)
    pub winner: u8,
    pub final_state: State,
    pub stats: EpisodeStats,
}

pub struct Actor {
    config: Config,
    mcts_config: MctsConfig,
    stats: ActorStats,
    episode_count: AtomicU32,
    shutdown_signal: AtomicBool,
}

impl Actor {
    pub fn new(config: Config) -> Result<Self> {
        let mcts_config = config.mcts_config();
        mcts_config.validate()?;

        info!(
            "MCTS config: {} iterations, exploration={:.3}, epsilon={}, rollout cap={}, lookahead depth={}",
            mcts_config.num_iterations,
            mcts_config.exploration,
            mcts_config.epsilon,
            mcts_config.max_rollout_depth,
            mcts_config.heuristic_depth
        );

        let stats = ActorStats::new(&config.data_dir, &config.actor_id);

        Ok(Self {
            config,
            mcts_config,
            stats,
            episode_count: AtomicU32::new(0),
            shutdown_signal: AtomicBool::new(false),
        })
    }

    pub async fn run(&self) -> Result<()> {
        info!(
            actor_id = %self.config.actor_id,
            max_episodes = self.config.max_episodes,
            seed = self.config.seed,
            "Actor starting main loop"
        );

        // Create progress bar for bounded episode runs (only when stderr is a TTY)
        let progress = if self.config.max_episodes > 0
            && std::io::IsTerminal::is_terminal(&std::io::stderr())
        {
            let pb = ProgressBar::new(self.config.max_episodes as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} episodes ({eta})")
                    .map_err(|e| anyhow!("Invalid progress bar template: {}", e))?
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        loop {
            if self.shutdown_signal.load(Ordering::Relaxed) {
                info!("Shutdown signal received, stopping actor");
                break;
            }

            let current_episode_count = self.episode_count.load(Ordering::Relaxed);
            if self.config.max_episodes > 0
                && current_episode_count >= self.config.max_episodes as u32
            {
                info!(
                    "Reached maximum episodes ({}), stopping",
                    self.config.max_episodes
                );
                break;
            }

            let episode_start = Instant::now();
            match self.run_episode(current_episode_count) {
                Ok(Some(outcome)) => {
                    let new_count = self.episode_count.fetch_add(1, Ordering::Relaxed) + 1;
                    let duration = episode_start.elapsed().as_secs_f64();

                    self.stats.record_episode(outcome.moves, outcome.winner);
                    self.stats.record_searches(
                        outcome.stats.search_count,
                        outcome.stats.iterations,
                        outcome.stats.total_time_us,
                    );
                    debug!(
                        episode = new_count,
                        moves = outcome.moves,
                        winner = outcome.winner,
                        duration,
                        "Episode completed\n{}",
                        outcome.final_state
                    );

                    if let Some(ref pb) = progress {
                        pb.inc(1);
                    }

                    if self.config.log_interval > 0
                        && new_count.is_multiple_of(self.config.log_interval)
                    {
                        self.stats.write_stats();
                        let snapshot = self.stats.snapshot();

                        // Suspend progress bar while logging to avoid visual glitches
                        let log = || {
                            info!(
                                "Completed {} episodes (last: {:.2}s, X {} / O {} / draw {})",
                                new_count,
                                duration,
                                snapshot.x_wins,
                                snapshot.o_wins,
                                snapshot.draws
                            );
                            outcome.stats.log_summary(new_count);
                        };
                        match progress {
                            Some(ref pb) => pb.suspend(log),
                            None => log(),
                        }
                    }
                }
                Ok(None) => {
                    info!("Episode {} interrupted", current_episode_count + 1);
                }
                Err(e) => {
                    error!("Episode {} failed: {}", current_episode_count + 1, e);
                    return Err(e);
                }
            }

            // Let the shutdown handler run between episodes
            tokio::task::yield_now().await;
        }

        if let Some(pb) = progress {
            pb.finish_with_message("done");
        }

        self.stats.write_stats();
        let snapshot = self.stats.snapshot();
        info!(
            episodes = snapshot.episodes_completed,
            x_wins = snapshot.x_wins,
            o_wins = snapshot.o_wins,
            draws = snapshot.draws,
            runtime_secs = format!("{:.2}", snapshot.runtime_seconds),
            "Actor stopped gracefully"
        );
        Ok(())
    }

    pub fn shutdown(&self) {
        self.shutdown_signal.store(true, Ordering::Relaxed);
        info!("Shutdown signal set");
    }

    /// Play one game from the empty board.
    ///
    /// Returns None if shutdown was requested before the game finished.
    pub fn run_episode(&self, episode: u32) -> Result<Option<EpisodeOutcome>> {
        let mut rng = ChaCha20Rng::seed_from_u64(self.config.seed.wrapping_add(episode as u64));
        let mut state = State::new();
        let mut moves = 0u32;
        let mut episode_stats = EpisodeStats::default();

        while !state.is_done() {
            if self.shutdown_signal.load(Ordering::Relaxed) {
                return Ok(None);
            }
            if moves >= MAX_MOVES {
                return Err(anyhow!(
                    "Episode exceeded {} moves without terminating",
                    MAX_MOVES
                ));
            }

            // Each side searches as the maximizing player
            let mover = state.to_move();
            let result = run_mcts(
                self.mcts_config.clone(),
                state.with_perspective(mover),
                &mut rng,
            )?;
            episode_stats.add(&result.stats);

            let position = state
                .move_between(&result.state)
                .ok_or_else(|| anyhow!("Search returned a position that is not one move ahead"))?;

            trace!(
                episode,
                mover,
                position,
                value = result.value,
                child_visits = ?result.child_visits,
                "Move chosen"
            );

            state = state.make_move(position);
            moves += 1;
        }

        Ok(Some(EpisodeOutcome {
            moves,
            winner: state.winner(),
            final_state: state,
            stats: episode_stats,
        }))
    }

    pub fn stats(&self) -> &ActorStats {
        &self.stats
    }

    /// Get current episode count
    pub fn episode_count(&self) -> u32 {
        self.episode_count.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::base_config;
    use engine_core::game_utils::DRAW;
    use tempfile::tempdir;

    fn test_config(data_dir: &std::path::Path) -> Config {
        Config {
            actor_id: "test-actor".into(),
            max_episodes: 2,
            log_interval: 1,
            data_dir: data_dir.to_string_lossy().into_owned(),
            num_iterations: 50, // Fewer for tests
            ..base_config()
        }
    }

    #[test]
    fn test_actor_rejects_invalid_search_config() {
        let dir = tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.lookahead_weight = 2.0;

        assert!(Actor::new(config).is_err());
    }

    #[test]
    fn test_single_episode_plays_to_the_end() {
        let dir = tempdir().unwrap();
        let actor = Actor::new(test_config(dir.path())).unwrap();

        let outcome = actor.run_episode(0).unwrap().unwrap();
        assert!(outcome.final_state.is_done());
        assert!(outcome.moves >= 5 && outcome.moves <= MAX_MOVES);
        assert_eq!(outcome.moves as usize, outcome.final_state.moves_played());
        assert_eq!(outcome.stats.search_count, outcome.moves);
        assert_eq!(outcome.stats.iterations, outcome.moves as u64 * 50);
        assert!([1, 2, DRAW].contains(&outcome.winner));
    }

    #[test]
    fn test_episodes_are_reproducible() {
        let dir = tempdir().unwrap();
        let actor = Actor::new(test_config(dir.path())).unwrap();

        let first = actor.run_episode(3).unwrap().unwrap();
        let second = actor.run_episode(3).unwrap().unwrap();
        assert_eq!(first.final_state, second.final_state);
    }

    #[test]
    fn test_shutdown_interrupts_episode() {
        let dir = tempdir().unwrap();
        let actor = Actor::new(test_config(dir.path())).unwrap();

        actor.shutdown();
        assert!(actor.run_episode(0).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_run_stops_at_max_episodes_and_writes_stats() {
        let dir = tempdir().unwrap();
        let actor = Actor::new(test_config(dir.path())).unwrap();

        actor.run().await.unwrap();

        assert_eq!(actor.episode_count(), 2);
        let snapshot = actor.stats().snapshot();
        assert_eq!(snapshot.episodes_completed, 2);
        assert_eq!(snapshot.x_wins + snapshot.o_wins + snapshot.draws, 2);
        assert!(std::path::Path::new(actor.stats().stats_path()).exists());
    }

    #[tokio::test]
    async fn test_run_after_shutdown_plays_nothing() {
        let dir = tempdir().unwrap();
        let actor = Actor::new(test_config(dir.path())).unwrap();

        actor.shutdown();
        actor.run().await.unwrap();

        assert_eq!(actor.episode_count(), 0);
    }
}
