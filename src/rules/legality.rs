//! Move legality

use super::GameStatus;
use crate::board::{Board, Pos};
use crate::error::GameError;

/// Validate a candidate move, naming the reason on rejection.
///
/// Bounds are checked first so that an off-board click on a finished
/// game still reports `OutOfBounds`.
pub fn check_move(board: &Board, pos: Pos, status: GameStatus) -> Result<(), GameError> {
    if !board.contains(pos) {
        return Err(GameError::OutOfBounds {
            row: pos.row as usize,
            col: pos.col as usize,
            size: board.size(),
        });
    }
    if status.is_terminal() || !board.is_empty(pos) {
        return Err(GameError::IllegalMove {
            row: pos.row as usize,
            col: pos.col as usize,
        });
    }
    Ok(())
}

/// Check if a stone may be placed at `pos`
#[inline]
pub fn is_legal(board: &Board, pos: Pos, status: GameStatus) -> bool {
    check_move(board, pos, status).is_ok()
}
