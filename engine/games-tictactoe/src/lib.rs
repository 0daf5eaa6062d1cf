//! TicTacToe positions for the MCTS engine
//!
//! This crate provides a complete reference implementation of TicTacToe
//! demonstrating how to implement the [`GameState`] trait so the search
//! engine can drive it.
//!
//! Values are reported from the point of view of a fixed *perspective*
//! player. The perspective player is the maximizing side, whichever mark
//! it plays, so the engine can search for X or for O.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::GameState;
//! use games_tictactoe::{State, O};
//!
//! let state = State::new().make_move(4);
//! assert_eq!(state.next_states().len(), 8);
//!
//! // Search on behalf of O, who is now to move
//! let for_o = state.with_perspective(O);
//! assert!(for_o.is_maximizing());
//! ```

use std::fmt;

use engine_core::game_utils::{outcome_utility, DRAW, ONGOING};
use engine_core::{opponent, GameState, Player, MAXIMIZING_PLAYER, MINIMIZING_PLAYER};

/// Mark of the first player.
pub const X: Player = 1;

/// Mark of the second player.
pub const O: Player = 2;

/// Winning positions (rows, columns, diagonals)
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Largest possible line score of a non-terminal board, used to keep
/// heuristic estimates inside (-1, 1).
const HEURISTIC_SCALE: f64 = 16.0;

/// TicTacToe game state
///
/// Represents the complete state of a TicTacToe game including the board,
/// the player to move, the winner, and the player values are reported for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    /// Board representation: 0=empty, 1=X, 2=O
    board: [u8; 9],
    /// Player to move: 1=X, 2=O
    to_move: Player,
    /// Winner: 0=none/ongoing, 1=X, 2=O, 3=draw
    winner: u8,
    /// Player whose outcome utility and heuristic report
    perspective: Player,
}

impl State {
    /// Create a new initial game state, valued for X
    pub fn new() -> Self {
        Self {
            board: [0; 9],
            to_move: X, // X goes first
            winner: ONGOING,
            perspective: X,
        }
    }

    /// Same position, valued for `player`
    pub fn with_perspective(self, player: Player) -> Self {
        Self {
            perspective: player,
            ..self
        }
    }

    /// Replay `moves` from the empty board, X first.
    ///
    /// Returns None if any move is illegal.
    pub fn from_moves(moves: &[u8]) -> Option<Self> {
        moves
            .iter()
            .try_fold(Self::new(), |state, &position| state.try_move(position))
    }

    pub fn board(&self) -> &[u8; 9] {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Winner indicator: 0=ongoing, 1=X, 2=O, 3=draw
    pub fn winner(&self) -> u8 {
        self.winner
    }

    pub fn perspective(&self) -> Player {
        self.perspective
    }

    /// Check if the game is over
    pub fn is_done(&self) -> bool {
        self.winner != ONGOING
    }

    /// Number of marks on the board
    pub fn moves_played(&self) -> usize {
        self.board.iter().filter(|&&cell| cell != 0).count()
    }

    /// Get legal moves (empty positions)
    pub fn legal_moves(&self) -> Vec<u8> {
        if self.is_done() {
            return Vec::new();
        }

        (0..9u8)
            .filter(|&pos| self.board[pos as usize] == 0)
            .collect()
    }

    /// Make a move and return the new state
    pub fn make_move(&self, position: u8) -> State {
        self.try_move(position).unwrap_or(*self) // Invalid move, return unchanged state
    }

    /// Make a move, or None if `position` is not a legal move.
    pub fn try_move(&self, position: u8) -> Option<State> {
        if self.is_done() || position >= 9 || self.board[position as usize] != 0 {
            return None;
        }

        let mut new_state = *self;
        new_state.board[position as usize] = self.to_move;

        // Check for winner
        new_state.winner = Self::check_winner(&new_state.board);

        // Switch player if game not over
        if new_state.winner == ONGOING {
            new_state.to_move = opponent(self.to_move);
        }

        Some(new_state)
    }

    /// The square that was played to get from `self` to `next`.
    ///
    /// Returns None unless `next` is `self` plus exactly one mark.
    pub fn move_between(&self, next: &State) -> Option<u8> {
        let mut played = None;
        for (position, (&before, &after)) in self.board.iter().zip(next.board.iter()).enumerate() {
            if before == after {
                continue;
            }
            if before != 0 || played.is_some() {
                return None;
            }
            played = Some(position as u8);
        }
        played
    }

    /// Check for winner on the board
    fn check_winner(board: &[u8; 9]) -> u8 {
        for line in &LINES {
            let [a, b, c] = *line;
            if board[a] != 0 && board[a] == board[b] && board[b] == board[c] {
                return board[a]; // Return the winning player
            }
        }

        // Check for draw (board full but no winner)
        if board.iter().all(|&cell| cell != 0) {
            return DRAW;
        }

        ONGOING
    }

    /// Sum over open lines: +marks for lines holding only the perspective
    /// player's marks, -marks for lines holding only the opponent's.
    fn line_score(&self) -> i32 {
        let them = opponent(self.perspective);
        LINES
            .iter()
            .map(|line| {
                let ours = line.iter().filter(|&&i| self.board[i] == self.perspective).count() as i32;
                let theirs = line.iter().filter(|&&i| self.board[i] == them).count() as i32;
                match (ours, theirs) {
                    (n, 0) => n,
                    (0, n) => -n,
                    _ => 0,
                }
            })
            .sum()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for State {
    fn next_states(&self) -> Vec<Self> {
        self.legal_moves()
            .into_iter()
            .filter_map(|position| self.try_move(position))
            .collect()
    }

    fn is_terminal(&self) -> bool {
        self.is_done()
    }

    fn utility(&self) -> f64 {
        outcome_utility(self.winner, self.perspective)
    }

    fn heuristic(&self) -> f64 {
        if self.is_done() {
            return self.utility();
        }
        self.line_score() as f64 / HEURISTIC_SCALE
    }

    fn current_player(&self) -> Player {
        if self.to_move == self.perspective {
            MAXIMIZING_PLAYER
        } else {
            MINIMIZING_PLAYER
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.board.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                let symbol = match *cell {
                    X => 'X',
                    O => 'O',
                    _ => '.',
                };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}
