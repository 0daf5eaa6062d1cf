//! Actor statistics tracking and persistence.
//!
//! This module provides statistics tracking for the actor, including:
//! - Episode counts and outcomes
//! - MCTS search effort per move
//! - Episode timing information
//!
//! Stats are written to a JSON file so runs can be inspected while in progress.

use engine_core::game_utils::DRAW;
use games_tictactoe::{O, X};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::time::Instant;
use tracing::{debug, warn};

/// Aggregated actor statistics, designed for lock-free updates.
#[derive(Debug)]
pub struct ActorStats {
    /// Number of episodes completed
    episodes_completed: AtomicU32,
    /// Total moves across all episodes
    total_moves: AtomicU64,
    /// Episodes won by X (first player)
    x_wins: AtomicU32,
    /// Episodes won by O (second player)
    o_wins: AtomicU32,
    /// Episodes that ended in a draw
    draws: AtomicU32,
    /// Start time for rate calculations
    start_time: Instant,
    /// Path to write stats file
    stats_path: String,
    /// Actor identifier
    actor_id: String,
    /// MCTS stats: total search time (microseconds)
    search_time_us: AtomicU64,
    /// MCTS stats: total searches performed
    searches: AtomicU64,
    /// MCTS stats: total iterations run
    iterations: AtomicU64,
}

/// Serializable stats for JSON output.
#[derive(Debug, Serialize, Deserialize)]
pub struct ActorStatsSnapshot {
    pub actor_id: String,
    pub episodes_completed: u32,
    pub total_moves: u64,
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
    pub avg_episode_length: f64,
    pub episodes_per_second: f64,
    pub runtime_seconds: f64,
    pub searches: u64,
    pub avg_search_us: f64,
    pub avg_iterations_per_second: f64,
    pub timestamp: u64,
}

impl ActorStats {
    /// Create new stats tracker.
    pub fn new(data_dir: &str, actor_id: &str) -> Self {
        let stats_path = format!("{}/actor_stats.json", data_dir);

        // Ensure data directory exists
        if let Err(e) = fs::create_dir_all(data_dir) {
            warn!("Failed to create data directory: {}", e);
        }

        Self {
            episodes_completed: AtomicU32::new(0),
            total_moves: AtomicU64::new(0),
            x_wins: AtomicU32::new(0),
            o_wins: AtomicU32::new(0),
            draws: AtomicU32::new(0),
            start_time: Instant::now(),
            stats_path,
            actor_id: actor_id.to_string(),
            search_time_us: AtomicU64::new(0),
            searches: AtomicU64::new(0),
            iterations: AtomicU64::new(0),
        }
    }

    /// Record a completed episode.
    ///
    /// `winner` uses the board convention: 1 = X, 2 = O, 3 = draw.
    pub fn record_episode(&self, moves: u32, winner: u8) {
        self.episodes_completed.fetch_add(1, Ordering::Relaxed);
        self.total_moves.fetch_add(moves as u64, Ordering::Relaxed);

        match winner {
            X => self.x_wins.fetch_add(1, Ordering::Relaxed),
            O => self.o_wins.fetch_add(1, Ordering::Relaxed),
            DRAW => self.draws.fetch_add(1, Ordering::Relaxed),
            other => {
                warn!(winner = other, "Recorded episode without a final result");
                return;
            }
        };
    }

    /// Record MCTS effort for an episode.
    pub fn record_searches(&self, searches: u32, iterations: u64, time_us: u64) {
        self.searches.fetch_add(searches as u64, Ordering::Relaxed);
        self.iterations.fetch_add(iterations, Ordering::Relaxed);
        self.search_time_us.fetch_add(time_us, Ordering::Relaxed);
    }

    /// Get a snapshot of current stats.
    pub fn snapshot(&self) -> ActorStatsSnapshot {
        let episodes = self.episodes_completed.load(Ordering::Relaxed);
        let total_moves = self.total_moves.load(Ordering::Relaxed);
        let runtime = self.start_time.elapsed().as_secs_f64();
        let searches = self.searches.load(Ordering::Relaxed);
        let iterations = self.iterations.load(Ordering::Relaxed);
        let search_time_us = self.search_time_us.load(Ordering::Relaxed);

        let avg_episode_length = if episodes > 0 {
            total_moves as f64 / episodes as f64
        } else {
            0.0
        };

        let episodes_per_second = if runtime > 0.0 {
            episodes as f64 / runtime
        } else {
            0.0
        };

        let avg_search_us = if searches > 0 {
            search_time_us as f64 / searches as f64
        } else {
            0.0
        };

        let avg_iterations_per_second = if search_time_us > 0 {
            iterations as f64 / (search_time_us as f64 / 1_000_000.0)
        } else {
            0.0
        };

        ActorStatsSnapshot {
            actor_id: self.actor_id.clone(),
            episodes_completed: episodes,
            total_moves,
            x_wins: self.x_wins.load(Ordering::Relaxed),
            o_wins: self.o_wins.load(Ordering::Relaxed),
            draws: self.draws.load(Ordering::Relaxed),
            avg_episode_length,
            episodes_per_second,
            runtime_seconds: runtime,
            searches,
            avg_search_us,
            avg_iterations_per_second,
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        }
    }

    /// Write stats to JSON file (atomic write-then-rename).
    pub fn write_stats(&self) {
        let snapshot = self.snapshot();

        // Serialize to JSON
        let json = match serde_json::to_string_pretty(&snapshot) {
            Ok(j) => j,
            Err(e) => {
                warn!("Failed to serialize actor stats: {}", e);
                return;
            }
        };

        // Write to temp file then rename (atomic on most filesystems)
        let temp_path = format!("{}.tmp", self.stats_path);
        match fs::File::create(&temp_path) {
            Ok(mut file) => {
                if let Err(e) = file.write_all(json.as_bytes()) {
                    warn!("Failed to write actor stats: {}", e);
                    return;
                }
            }
            Err(e) => {
                warn!("Failed to create temp stats file: {}", e);
                return;
            }
        }

        if let Err(e) = fs::rename(&temp_path, &self.stats_path) {
            warn!("Failed to rename stats file: {}", e);
            let _ = fs::remove_file(&temp_path);
            return;
        }

        debug!("Wrote actor stats to {}", self.stats_path);
    }

    pub fn stats_path(&self) -> &str {
        &self.stats_path
    }
}
