//! One-ply heuristic scoring of candidate moves
//!
//! A candidate is judged by the lines it would form for the mover
//! (attack) and the lines it would take away from the opponent
//! (defense), plus a small pull toward the center.

use crate::board::{Board, Pos, Stone};
use crate::rules::win::run_extent;
use crate::rules::DIRECTIONS;

use super::patterns::{is_threat, line_score, PatternScore};

/// Weight per step of distance from the center
const POSITION_WEIGHT: i32 = 2;

/// Run through a hypothetical stone and how many of its ends are free
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineShape {
    pub len: usize,
    pub open_ends: u8,
}

impl LineShape {
    #[inline]
    pub fn score(self) -> i32 {
        line_score(self.len, self.open_ends)
    }
}

/// How a difficulty tier balances attack against defense
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    /// Defense contribution in percent of the attack scale
    pub defense_percent: i32,
    /// Reward moves that raise threats on two axes at once
    pub double_threats: bool,
}

/// Shape of the `stone` line through `pos` along `dir`, as if `stone`
/// were placed at `pos`.
pub fn line_shape(board: &Board, pos: Pos, stone: Stone, dir: (i32, i32)) -> LineShape {
    let size = board.size();
    let (back, fwd) = run_extent(board, pos, stone, dir);
    let (dr, dc) = dir;

    let open = |step: i32| {
        pos.offset(dr, dc, step, size)
            .is_some_and(|p| board.is_empty(p)) as u8
    };

    LineShape {
        len: back + 1 + fwd,
        open_ends: open(-(back as i32) - 1) + open(fwd as i32 + 1),
    }
}

/// Sum of line scores for `stone` through `pos`, with the double-threat
/// bonus when asked for
fn side_score(board: &Board, pos: Pos, stone: Stone, double_threats: bool) -> i32 {
    let mut score = 0;
    let mut threats = 0;
    for &dir in &DIRECTIONS {
        let shape = line_shape(board, pos, stone, dir);
        score += shape.score();
        if is_threat(shape.len, shape.open_ends) {
            threats += 1;
        }
    }
    if double_threats && threats >= 2 {
        score += PatternScore::DOUBLE_THREAT;
    }
    score
}

/// Score an empty intersection as the next move for `stone`.
///
/// Higher is better. The result is only meaningful for comparing
/// candidates on the same board.
#[must_use]
pub fn score_move(board: &Board, pos: Pos, stone: Stone, weights: ScoreWeights) -> i32 {
    let attack = side_score(board, pos, stone, weights.double_threats);
    let defense = if weights.defense_percent > 0 {
        side_score(board, pos, stone.opponent(), weights.double_threats) * weights.defense_percent / 100
    } else {
        0
    };

    let center_dist = pos.distance(board.center()) as i32;
    attack + defense - center_dist * POSITION_WEIGHT
}
