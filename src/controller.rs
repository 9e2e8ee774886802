//! Turn controller: the single owner of a game's state
//!
//! Every mutation of a [`GameState`] goes through [`TurnController`]:
//! placing a stone, taking one back, replaying an undone move and
//! restarting. Each operation either succeeds completely or returns an
//! error with the state untouched.

use tracing::{debug, info, instrument};

use crate::board::{Board, Pos, Stone};
use crate::error::GameError;
use crate::history::{Move, MoveHistory};
use crate::rules::{check_move, check_win, is_draw, GameStatus};

/// Snapshot of a game, read by the presentation layer after each call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Stone,
    history: MoveHistory,
    status: GameStatus,
    winning_line: Option<Vec<Pos>>,
}

impl GameState {
    /// Empty board, Black to move
    pub fn new(size: usize) -> Result<Self, GameError> {
        Board::new(size).map(Self::with_board)
    }

    fn with_board(board: Board) -> Self {
        Self {
            board,
            current_player: Stone::Black,
            history: MoveHistory::new(),
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move (the winner once the game is won)
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn winner(&self) -> Option<Stone> {
        self.status.winner()
    }

    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last_move()
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_board(Board::default())
    }
}

/// Owns one [`GameState`] and drives its state machine
/// (`InProgress` → `Won` | `Draw`, with undo leading back to `InProgress`).
#[derive(Debug, Clone, Default)]
pub struct TurnController {
    state: GameState,
}

impl TurnController {
    /// New game on the default 15x15 board
    pub fn new() -> Self {
        Self::default()
    }

    /// New game on a board of the given size
    pub fn with_size(size: usize) -> Result<Self, GameError> {
        Ok(Self {
            state: GameState::new(size)?,
        })
    }

    /// Read-only view of the game
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Place a stone for the side to move.
    ///
    /// Returns the status reached after the move.
    #[instrument(skip(self), fields(player = ?self.state.current_player))]
    pub fn apply_move(&mut self, pos: Pos) -> Result<GameStatus, GameError> {
        check_move(&self.state.board, pos, self.state.status)?;

        let mv = Move::new(pos, self.state.current_player, self.state.history.len());
        self.state.history.record(mv);
        Ok(self.place(mv))
    }

    /// Take back the most recent move.
    ///
    /// The player who made it is to move again, and a finished game
    /// resumes.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<Move, GameError> {
        let mv = self.state.history.pop_last().ok_or(GameError::EmptyHistory)?;

        self.state.board.set(mv.pos, Stone::Empty);
        self.state.history.push_redo(mv);
        self.state.current_player = mv.stone;
        self.state.status = GameStatus::InProgress;
        self.state.winning_line = None;

        debug!(pos = %mv.pos, stone = ?mv.stone, "move taken back");
        Ok(mv)
    }

    /// Replay the most recently undone move.
    ///
    /// Win and draw are evaluated exactly as for a fresh move.
    #[instrument(skip(self))]
    pub fn redo(&mut self) -> Result<Move, GameError> {
        let mv = self.state.history.pop_redo().ok_or(GameError::EmptyHistory)?;

        if let Err(err) = check_move(&self.state.board, mv.pos, self.state.status) {
            self.state.history.push_redo(mv);
            return Err(err);
        }

        self.state.history.restore(mv);
        self.place(mv);
        debug!(pos = %mv.pos, stone = ?mv.stone, "move replayed");
        Ok(mv)
    }

    /// Discard the game and start over on a board of the same size
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.state = GameState::with_board(Board::empty(self.state.board.size()));
        info!("game restarted");
    }

    /// Put an already recorded move on the board and settle the outcome
    fn place(&mut self, mv: Move) -> GameStatus {
        let state = &mut self.state;
        state.board.set(mv.pos, mv.stone);

        let win = check_win(&state.board, mv.pos, mv.stone);
        if win.won {
            info!(winner = ?mv.stone, moves = state.history.len(), "five in a row");
            state.status = GameStatus::Won(mv.stone);
            state.winning_line = Some(win.line);
        } else if is_draw(&state.board) {
            info!(moves = state.history.len(), "board full, game drawn");
            state.status = GameStatus::Draw;
        } else {
            state.current_player = mv.stone.opponent();
        }
        state.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(controller: &mut TurnController, moves: &[(u8, u8)]) {
        for &(r, c) in moves {
            controller.apply_move(Pos::new(r, c)).unwrap();
        }
    }

    /// Black builds (7,3)..(7,6) while White plays on row 0
    fn four_for_black() -> TurnController {
        let mut controller = TurnController::new();
        play(
            &mut controller,
            &[(7, 3), (0, 0), (7, 4), (0, 2), (7, 5), (0, 4), (7, 6), (0, 6)],
        );
        controller
    }

    #[test]
    fn test_new_game() {
        let controller = TurnController::new();
        let state = controller.state();
        assert_eq!(state.board().size(), 15);
        assert_eq!(state.current_player(), Stone::Black);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(state.last_move().is_none());
        assert!(state.winning_line().is_none());
    }

    #[test]
    fn test_apply_move_alternates_players() {
        let mut controller = TurnController::new();
        assert_eq!(controller.apply_move(Pos::new(7, 7)), Ok(GameStatus::InProgress));
        assert_eq!(controller.state().current_player(), Stone::White);
        controller.apply_move(Pos::new(7, 8)).unwrap();
        assert_eq!(controller.state().current_player(), Stone::Black);

        let last = controller.state().last_move().unwrap();
        assert_eq!(last.pos, Pos::new(7, 8));
        assert_eq!(last.stone, Stone::White);
        assert_eq!(last.seq, 1);
    }

    #[test]
    fn test_occupied_cell_rejected_without_change() {
        let mut controller = TurnController::new();
        controller.apply_move(Pos::new(7, 7)).unwrap();
        let before = controller.state().clone();

        assert_eq!(
            controller.apply_move(Pos::new(7, 7)),
            Err(GameError::IllegalMove { row: 7, col: 7 })
        );
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn test_with_size_rejects_unplayable_boards() {
        assert_eq!(
            TurnController::with_size(0).unwrap_err(),
            GameError::InvalidBoardSize { size: 0 }
        );
        assert_eq!(
            TurnController::with_size(256).unwrap_err(),
            GameError::InvalidBoardSize { size: 256 }
        );

        let mut controller = TurnController::with_size(25).unwrap();
        controller.apply_move(Pos::new(24, 24)).unwrap();
        controller.restart();
        assert_eq!(controller.state().board().size(), 25);
        assert_eq!(controller.state().move_count(), 0);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut controller = TurnController::with_size(9).unwrap();
        assert!(matches!(
            controller.apply_move(Pos::new(9, 0)),
            Err(GameError::OutOfBounds { size: 9, .. })
        ));
        assert_eq!(controller.state().move_count(), 0);
    }

    #[test]
    fn test_winning_move() {
        let mut controller = four_for_black();
        assert_eq!(
            controller.apply_move(Pos::new(7, 7)),
            Ok(GameStatus::Won(Stone::Black))
        );
        let state = controller.state();
        assert!(state.is_over());
        assert_eq!(state.winner(), Some(Stone::Black));
        assert_eq!(state.winning_line().map(<[Pos]>::len), Some(5));
    }

    #[test]
    fn test_moves_after_win_rejected() {
        let mut controller = four_for_black();
        controller.apply_move(Pos::new(7, 7)).unwrap();
        let before = controller.state().clone();

        assert_eq!(
            controller.apply_move(Pos::new(10, 10)),
            Err(GameError::IllegalMove { row: 10, col: 10 })
        );
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn test_undo_empty_history() {
        let mut controller = TurnController::new();
        assert_eq!(controller.undo(), Err(GameError::EmptyHistory));
        assert_eq!(controller.redo(), Err(GameError::EmptyHistory));
    }

    #[test]
    fn test_undo_restores_mover() {
        let mut controller = TurnController::new();
        play(&mut controller, &[(7, 7), (7, 8)]);

        let undone = controller.undo().unwrap();
        assert_eq!(undone.pos, Pos::new(7, 8));
        assert_eq!(controller.state().current_player(), Stone::White);
        assert!(controller.state().board().is_empty(Pos::new(7, 8)));
        assert_eq!(controller.state().last_move().map(|m| m.pos), Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_undo_reverses_win() {
        let mut controller = four_for_black();
        controller.apply_move(Pos::new(7, 7)).unwrap();

        controller.undo().unwrap();
        let state = controller.state();
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.current_player(), Stone::Black);
        assert!(state.winning_line().is_none());
        assert!(state.board().is_empty(Pos::new(7, 7)));
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut controller = four_for_black();
        let before = controller.state().clone();

        controller.undo().unwrap();
        controller.undo().unwrap();
        controller.redo().unwrap();
        controller.redo().unwrap();

        let after = controller.state();
        assert_eq!(after.board(), before.board());
        assert_eq!(after.current_player(), before.current_player());
        assert_eq!(after.status(), before.status());
        assert_eq!(after.history().moves(), before.history().moves());
    }

    #[test]
    fn test_redo_winning_move_wins_again() {
        let mut controller = four_for_black();
        controller.apply_move(Pos::new(7, 7)).unwrap();
        let won = controller.state().clone();

        controller.undo().unwrap();
        controller.redo().unwrap();

        assert_eq!(controller.state().status(), GameStatus::Won(Stone::Black));
        assert_eq!(controller.state(), &won);
    }

    #[test]
    fn test_new_move_clears_redo() {
        let mut controller = TurnController::new();
        play(&mut controller, &[(7, 7), (7, 8)]);
        controller.undo().unwrap();
        assert!(controller.state().history().can_redo());

        controller.apply_move(Pos::new(8, 8)).unwrap();
        assert!(!controller.state().history().can_redo());
        assert_eq!(controller.redo(), Err(GameError::EmptyHistory));
    }

    #[test]
    fn test_restart_keeps_size() {
        let mut controller = TurnController::with_size(9).unwrap();
        play(&mut controller, &[(4, 4), (4, 5)]);
        controller.restart();

        let state = controller.state();
        assert_eq!(state.board().size(), 9);
        assert!(state.board().is_board_empty());
        assert_eq!(state.current_player(), Stone::Black);
        assert!(!state.history().can_undo());
        assert!(!state.history().can_redo());
    }
}
