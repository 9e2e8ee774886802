//! Win and draw detection for freestyle Gomoku
//!
//! Win condition: five or more stones of one colour in an unbroken line
//! (horizontal, vertical or diagonal). Overlines count.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Outcome of a win check through one intersection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WinResult {
    pub won: bool,
    /// The winning run, ordered along its axis; empty when `won` is false
    pub line: Vec<Pos>,
}

/// Count contiguous `stone` cells next to `pos` along `dir`, in the
/// negative and positive sense. `pos` itself is not inspected, so this
/// also answers "what if `stone` were placed here".
pub(crate) fn run_extent(board: &Board, pos: Pos, stone: Stone, (dr, dc): (i32, i32)) -> (usize, usize) {
    let size = board.size();
    let count = |sign: i32| {
        let mut n: usize = 0;
        while let Some(p) = pos.offset(dr * sign, dc * sign, n as i32 + 1, size) {
            if board.stone_at(p) != stone {
                break;
            }
            n += 1;
        }
        n
    };
    (count(-1), count(1))
}

/// Fast five-in-a-row check at a specific position.
///
/// Only checks 4 directions from the given position. No allocation.
/// Treats `pos` as holding `stone` whether or not it is placed yet.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, stone: Stone) -> bool {
    if stone == Stone::Empty || !board.contains(pos) {
        return false;
    }
    DIRECTIONS.iter().any(|&dir| {
        let (back, fwd) = run_extent(board, pos, stone, dir);
        back + 1 + fwd >= 5
    })
}

/// Check whether the stone just placed at `pos` completes five in a row.
///
/// Only the four lines through `pos` are scanned. The first axis (in
/// [`DIRECTIONS`] order) carrying a run of five or more is reported.
pub fn check_win(board: &Board, pos: Pos, stone: Stone) -> WinResult {
    if stone == Stone::Empty || !board.contains(pos) {
        return WinResult::default();
    }

    for &(dr, dc) in &DIRECTIONS {
        let (back, fwd) = run_extent(board, pos, stone, (dr, dc));
        if back + 1 + fwd < 5 {
            continue;
        }
        let size = board.size();
        let line = (-(back as i32)..=fwd as i32)
            .filter_map(|step| pos.offset(dr, dc, step, size))
            .collect();
        return WinResult { won: true, line };
    }

    WinResult::default()
}

/// Find the positions of a 5-in-a-row if exists
///
/// Scans the whole board, so it is meant for one-off checks rather than
/// per-move detection.
pub fn find_five(board: &Board, stone: Stone) -> Option<Vec<Pos>> {
    if stone == Stone::Empty {
        return None;
    }
    let size = board.size();

    for pos in board.positions() {
        if board.stone_at(pos) != stone {
            continue;
        }
        for &(dr, dc) in &DIRECTIONS {
            // Only start counting at the first stone of a run
            if pos.offset(dr, dc, -1, size).is_some_and(|p| board.stone_at(p) == stone) {
                continue;
            }
            let mut line = vec![pos];
            while let Some(next) = pos.offset(dr, dc, line.len() as i32, size) {
                if board.stone_at(next) != stone {
                    break;
                }
                line.push(next);
            }
            if line.len() >= 5 {
                return Some(line);
            }
        }
    }
    None
}

/// Check if the game is drawn: no empty intersection and no five
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
        && find_five(board, Stone::Black).is_none()
        && find_five(board, Stone::White).is_none()
}
