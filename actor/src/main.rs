//! Actor - TicTacToe self-play runner
//!
//! A long-running process that:
//! 1. Plays TicTacToe games where every move is chosen by MCTS
//! 2. Seeds each episode deterministically from the configured base seed
//! 3. Writes running statistics to `<data_dir>/actor_stats.json`

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

mod actor;
mod config;
mod stats;

use crate::actor::Actor;
use crate::config::Config;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");

    info!(
        max_episodes = config.max_episodes,
        "Actor will run {} episodes",
        config.max_episodes_description()
    );
    info!(
        "Starting actor {} (seed {}, {} iterations per move)",
        config.actor_id, config.seed, config.num_iterations
    );

    let actor = Arc::new(Actor::new(config)?);

    // Setup graceful shutdown
    let shutdown_actor = Arc::clone(&actor);
    let shutdown_handle = tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received, stopping actor...");
                shutdown_actor.shutdown();
            }
            Err(e) => error!("Failed to listen for ctrl+c: {}", e),
        }
    });

    let run_result = actor.run().await;
    shutdown_handle.abort();

    match run_result {
        Ok(()) => {
            info!("Actor completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Actor failed: {}", e);
            Err(e)
        }
    }
}
