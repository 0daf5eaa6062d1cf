//! The position capability set consumed by the search engine.
//!
//! The engine never looks inside a position. Everything it needs is expressed
//! through [`GameState`], so concrete games are swappable implementations.

use std::fmt::Debug;

/// Identity of a party in a two-player game.
pub type Player = u8;

/// The party whose heuristic and utility values are maximized.
pub const MAXIMIZING_PLAYER: Player = 1;

/// The party whose heuristic and utility values are minimized.
pub const MINIMIZING_PLAYER: Player = 2;

/// A position in a two-player, zero-sum, perfect-information game.
///
/// Values are interpreted from the point of view of [`MAXIMIZING_PLAYER`]:
/// larger `utility` and `heuristic` values are better for player 1.
///
/// # Contract
///
/// * `next_states` must be deterministic for a fixed value. The engine
///   compares the number of materialized children against the length of this
///   sequence to decide whether a node is fully expanded.
/// * `PartialEq` must hold exactly when two values describe the same
///   position. Expansion deduplicates children by equality alone; a state that
///   compares equal to a different position (or unequal to itself) corrupts the
///   tree statistics silently.
/// * Once a value is handed to the engine it is treated as immutable.
///
/// `Clone` provides the independent deep copy used when a rollout starts.
///
/// # Example
///
/// ```rust
/// use engine_core::{GameState, Player};
///
/// /// Take-away: remove one or two counters, whoever takes the last one wins.
/// #[derive(Debug, Clone, PartialEq)]
/// struct Nim {
///     counters: u8,
///     to_move: Player,
/// }
///
/// impl GameState for Nim {
///     fn next_states(&self) -> Vec<Self> {
///         (1..=2)
///             .filter(|&take| take <= self.counters)
///             .map(|take| Nim {
///                 counters: self.counters - take,
///                 to_move: engine_core::opponent(self.to_move),
///             })
///             .collect()
///     }
///
///     fn is_terminal(&self) -> bool {
///         self.counters == 0
///     }
///
///     fn utility(&self) -> f64 {
///         // The player who just moved took the last counter.
///         match (self.is_terminal(), self.to_move) {
///             (false, _) => 0.0,
///             (true, 1) => -1.0,
///             (true, _) => 1.0,
///         }
///     }
///
///     fn heuristic(&self) -> f64 {
///         self.utility()
///     }
///
///     fn current_player(&self) -> Player {
///         self.to_move
///     }
/// }
///
/// let start = Nim { counters: 3, to_move: 1 };
/// assert_eq!(start.next_states().len(), 2);
/// assert!(start.is_maximizing());
/// ```
pub trait GameState: Clone + PartialEq + Debug {
    /// Ordered successor positions. Empty when the position is terminal or
    /// the mover has no legal continuation.
    fn next_states(&self) -> Vec<Self>;

    /// Whether the game is over at this position.
    fn is_terminal(&self) -> bool;

    /// Outcome value of the position.
    ///
    /// Meaningful for terminal positions. The engine also reads it when a
    /// rollout is truncated by its step cap, so implementations should return
    /// a bounded estimate for non-terminal positions too.
    fn utility(&self) -> f64;

    /// Bounded static evaluation, valid for terminal and non-terminal positions.
    fn heuristic(&self) -> f64;

    /// The player to move at this position.
    fn current_player(&self) -> Player;

    /// Whether the player to move is [`MAXIMIZING_PLAYER`].
    #[inline]
    fn is_maximizing(&self) -> bool {
        self.current_player() == MAXIMIZING_PLAYER
    }
}
