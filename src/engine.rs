//! Computer opponent
//!
//! A deliberately light, deterministic policy. The search follows a
//! priority system:
//!
//! 1. **Opening**: on an empty board, take the center
//! 2. **Immediate win**: complete five if possible
//! 3. **Block**: stop the opponent's immediate five
//! 4. **Heuristic**: best one-ply score among cells near existing stones
//! 5. **Fallback**: center, else the first empty cell
//!
//! # Example
//!
//! ```
//! use gomoku::{choose_move, Difficulty, Stone, TurnController};
//!
//! let mut game = TurnController::new();
//! let reply = choose_move(game.state().board(), Stone::Black, Difficulty::Normal);
//! assert_eq!(reply, Some(game.state().board().center()));
//! game.apply_move(reply.unwrap()).unwrap();
//! ```

use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::eval::{score_move, ScoreWeights};
use crate::rules::has_five_at_pos;

/// Strength tier of the computer opponent
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Grows its own lines and ignores the opponent's until they are lethal
    Easy,
    /// Weighs attack and defense
    #[default]
    Normal,
    /// Looks a little wider and prizes double threats
    Hard,
}

impl Difficulty {
    /// Candidate radius around existing stones
    fn radius(self) -> i32 {
        match self {
            Difficulty::Easy | Difficulty::Normal => 1,
            Difficulty::Hard => 2,
        }
    }

    fn weights(self) -> ScoreWeights {
        match self {
            Difficulty::Easy => ScoreWeights { defense_percent: 0, double_threats: false },
            Difficulty::Normal => ScoreWeights { defense_percent: 90, double_threats: false },
            Difficulty::Hard => ScoreWeights { defense_percent: 100, double_threats: true },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Which rule of the priority list produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
    /// Empty board, took the center
    Opening,
    /// Completes five
    ImmediateWin,
    /// Stops the opponent's five
    Block,
    /// Best heuristic score
    Heuristic,
    /// Nothing near any stone; took center or first empty cell
    Fallback,
}

/// Move chosen by the opponent along with how it was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveChoice {
    /// `None` only when the board is full
    pub best_move: Option<Pos>,
    pub score: i32,
    pub kind: ChoiceKind,
}

impl MoveChoice {
    #[inline]
    fn new(pos: Pos, score: i32, kind: ChoiceKind) -> Self {
        Self {
            best_move: Some(pos),
            score,
            kind,
        }
    }
}

/// Pick a move for `stone`. Same board and difficulty, same answer.
#[must_use]
pub fn choose_move(board: &Board, stone: Stone, difficulty: Difficulty) -> Option<Pos> {
    choose_move_with_stats(board, stone, difficulty).best_move
}

/// Pick a move for `stone` and report which rule produced it
#[must_use]
pub fn choose_move_with_stats(board: &Board, stone: Stone, difficulty: Difficulty) -> MoveChoice {
    let choice = select(board, stone, difficulty);
    debug!(?difficulty, ?stone, choice = ?choice.best_move, kind = ?choice.kind, "opponent move");
    choice
}

fn select(board: &Board, stone: Stone, difficulty: Difficulty) -> MoveChoice {
    let center = board.center();

    // 0. Opening
    if board.is_board_empty() {
        return MoveChoice::new(center, 0, ChoiceKind::Opening);
    }

    let empties: Vec<Pos> = board.positions().filter(|&p| board.is_empty(p)).collect();
    if empties.is_empty() {
        return MoveChoice {
            best_move: None,
            score: 0,
            kind: ChoiceKind::Fallback,
        };
    }

    // 1. Immediate win
    if let Some(&pos) = empties.iter().find(|&&p| has_five_at_pos(board, p, stone)) {
        return MoveChoice::new(pos, crate::eval::PatternScore::FIVE, ChoiceKind::ImmediateWin);
    }

    // 2. Block the opponent's five
    let opponent = stone.opponent();
    if let Some(&pos) = empties.iter().find(|&&p| has_five_at_pos(board, p, opponent)) {
        return MoveChoice::new(pos, -crate::eval::PatternScore::FIVE, ChoiceKind::Block);
    }

    // 3. Heuristic over the neighbourhood of existing stones
    let radius = difficulty.radius();
    let weights = difficulty.weights();
    let best = empties
        .iter()
        .filter(|&&p| board.has_neighbor(p, radius))
        .map(|&p| (p, score_move(board, p, stone, weights)))
        // Earliest candidate wins ties: higher score first, then nearer
        // the center, then row-major order.
        .min_by_key(|&(p, score)| (-score, p.distance(center), p));
    if let Some((pos, score)) = best {
        return MoveChoice::new(pos, score, ChoiceKind::Heuristic);
    }

    // 4. Fallback
    let pos = if board.is_empty(center) { center } else { empties[0] };
    MoveChoice::new(pos, 0, ChoiceKind::Fallback)
}
