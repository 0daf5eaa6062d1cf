//! Small hand-built positions for exercising the engine without real game rules.

use engine_core::{GameState, Player, MAXIMIZING_PLAYER, MINIMIZING_PLAYER};

#[derive(Debug, Clone, PartialEq)]
pub enum Toy {
    /// Player 1 to move with a losing reply listed before a winning reply.
    Duel,
    /// Terminal position with a fixed value.
    Leaf { value: f64 },
    /// Non-terminal position with no legal continuation.
    Stuck,
    /// Endless single line of play; utility is the distance travelled.
    Counter(u32),
    /// Reports the same terminal successor twice.
    Twins,
    /// Two-ply tree with known heuristics, see [`Toy::inner_children`].
    Inner(u8),
}

impl Toy {
    /// Two-ply table used by lookahead tests:
    ///
    /// ```text
    /// Inner(0)  P1  h= 0.0 -> Inner(1), Inner(2)
    /// Inner(1)  P2  h= 0.2 -> Leaf(1.0), Leaf(-0.5)
    /// Inner(2)  P2  h=-0.4 -> Leaf(0.6), Leaf(0.4)
    /// ```
    fn inner_children(id: u8) -> Vec<Toy> {
        match id {
            0 => vec![Toy::Inner(1), Toy::Inner(2)],
            1 => vec![Toy::Leaf { value: 1.0 }, Toy::Leaf { value: -0.5 }],
            2 => vec![Toy::Leaf { value: 0.6 }, Toy::Leaf { value: 0.4 }],
            _ => Vec::new(),
        }
    }

    fn inner_heuristic(id: u8) -> f64 {
        match id {
            1 => 0.2,
            2 => -0.4,
            _ => 0.0,
        }
    }
}

impl GameState for Toy {
    fn next_states(&self) -> Vec<Self> {
        match self {
            Toy::Duel => vec![Toy::Leaf { value: -1.0 }, Toy::Leaf { value: 1.0 }],
            Toy::Leaf { .. } | Toy::Stuck => Vec::new(),
            Toy::Counter(n) => vec![Toy::Counter(n + 1)],
            Toy::Twins => vec![Toy::Leaf { value: 0.5 }, Toy::Leaf { value: 0.5 }],
            Toy::Inner(id) => Toy::inner_children(*id),
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self, Toy::Leaf { .. })
    }

    fn utility(&self) -> f64 {
        match self {
            Toy::Leaf { value } => *value,
            Toy::Stuck => 0.25,
            Toy::Counter(n) => *n as f64,
            Toy::Inner(id) => Toy::inner_heuristic(*id),
            Toy::Duel | Toy::Twins => 0.0,
        }
    }

    fn heuristic(&self) -> f64 {
        match self {
            Toy::Leaf { value } => *value,
            Toy::Stuck => 0.5,
            Toy::Inner(id) => Toy::inner_heuristic(*id),
            Toy::Duel | Toy::Twins | Toy::Counter(_) => 0.0,
        }
    }

    fn current_player(&self) -> Player {
        match self {
            Toy::Counter(n) if n % 2 == 1 => MINIMIZING_PLAYER,
            Toy::Leaf { .. } => MINIMIZING_PLAYER,
            Toy::Inner(1) | Toy::Inner(2) => MINIMIZING_PLAYER,
            _ => MAXIMIZING_PLAYER,
        }
    }
}
