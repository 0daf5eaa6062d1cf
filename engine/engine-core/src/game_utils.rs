//! Shared utilities for two-player game implementations
//!
//! This module provides common functionality used by game implementations
//! so they report values under the same convention the engine assumes.

use crate::state::{Player, MAXIMIZING_PLAYER, MINIMIZING_PLAYER};

/// Winner indicator for an ongoing game.
pub const ONGOING: u8 = 0;

/// Winner indicator for a drawn game.
pub const DRAW: u8 = 3;

/// The other party in a two-player game.
///
/// # Example
/// ```
/// use engine_core::game_utils::opponent;
///
/// assert_eq!(opponent(1), 2);
/// assert_eq!(opponent(2), 1);
/// ```
#[inline]
pub fn opponent(player: Player) -> Player {
    if player == MAXIMIZING_PLAYER {
        MINIMIZING_PLAYER
    } else {
        MAXIMIZING_PLAYER
    }
}

/// Calculate the utility of a finished two-player zero-sum game.
///
/// Returns the value from the perspective of `perspective`.
///
/// # Arguments
/// * `winner` - Winner indicator: 0=ongoing, 1=player1 wins, 2=player2 wins, 3=draw
/// * `perspective` - The player the value is reported for (1 or 2)
///
/// # Returns
/// * `1.0` if `perspective` won
/// * `-1.0` if `perspective` lost
/// * `0.0` for draws or ongoing games
///
/// # Example
/// ```
/// use engine_core::game_utils::outcome_utility;
///
/// // Player 1 wins, viewed from player 1's perspective
/// assert_eq!(outcome_utility(1, 1), 1.0);
///
/// // Player 1 wins, viewed from player 2's perspective
/// assert_eq!(outcome_utility(1, 2), -1.0);
///
/// // Draw
/// assert_eq!(outcome_utility(3, 1), 0.0);
///
/// // Game ongoing
/// assert_eq!(outcome_utility(0, 1), 0.0);
/// ```
#[inline]
pub fn outcome_utility(winner: u8, perspective: Player) -> f64 {
    match winner {
        ONGOING | DRAW => 0.0,
        w if w == perspective => 1.0,
        MAXIMIZING_PLAYER | MINIMIZING_PLAYER => -1.0,
        _ => 0.0, // Shouldn't happen
    }
}
