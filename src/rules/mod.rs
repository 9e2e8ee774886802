//! Game rules for freestyle Gomoku
//!
//! This module implements the rule set:
//! - Move legality (on the board, empty intersection, game still running)
//! - Win condition (five or more in a row, overlines allowed)
//! - Draw condition (board full without a five)

pub mod legality;
pub mod win;

use crate::board::Stone;

// Re-exports for convenient access
pub use legality::{check_move, is_legal};
pub use win::{check_win, find_five, has_five_at_pos, is_draw, WinResult, DIRECTIONS};

/// Stage of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won(Stone),
    Draw,
}

impl GameStatus {
    /// Won or drawn
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    #[inline]
    pub fn winner(self) -> Option<Stone> {
        match self {
            GameStatus::Won(stone) => Some(stone),
            _ => None,
        }
    }
}
