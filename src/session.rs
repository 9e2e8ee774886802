//! A game as the player experiences it
//!
//! [`GameSession`] wraps a [`TurnController`] with the configuration it
//! was started from: who is human, whether a computer opponent plays, and
//! the pause before the computer replies. The pause is the only timed
//! element, and it is cancellable: a pending reply is tied to the state
//! generation it was scheduled against and is dropped if anything
//! happened in between.

use std::time::Instant;

use tracing::{debug, info, instrument, warn};

use crate::board::{Pos, Stone};
use crate::config::GameConfig;
use crate::controller::{GameState, TurnController};
use crate::engine::{choose_move, choose_move_with_stats, Difficulty, MoveChoice};
use crate::error::GameError;
use crate::rules::GameStatus;

/// Computer opponent state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentState {
    Idle,
    /// Reply due at `due`, valid only while the session is still at `generation`
    Waiting { due: Instant, generation: u64 },
}

/// One game plus the configuration it was started with
#[derive(Debug, Clone)]
pub struct GameSession {
    controller: TurnController,
    config: GameConfig,
    opponent: OpponentState,
    /// Bumped on every state transition
    generation: u64,
    last_choice: Option<MoveChoice>,
    hint: Option<Pos>,
}

impl GameSession {
    /// Start a game. If the computer moves first, its reply is scheduled.
    ///
    /// Fails with [`GameError::InvalidBoardSize`] if the configured board
    /// size is out of range.
    pub fn new(config: GameConfig, now: Instant) -> Result<Self, GameError> {
        let mut session = Self {
            controller: TurnController::with_size(config.board_size)?,
            config,
            opponent: OpponentState::Idle,
            generation: 0,
            last_choice: None,
            hint: None,
        };
        session.schedule_reply(now);
        info!(size = config.board_size, opponent = config.opponent.enabled, "new game");
        Ok(session)
    }

    pub fn state(&self) -> &GameState {
        self.controller.state()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stone played by the computer, if there is one
    pub fn computer_stone(&self) -> Option<Stone> {
        let opponent = &self.config.opponent;
        match (opponent.enabled, opponent.human_first) {
            (false, _) => None,
            (true, true) => Some(Stone::White),
            (true, false) => Some(Stone::Black),
        }
    }

    /// Check if it's the computer's turn
    pub fn is_opponent_turn(&self) -> bool {
        !self.state().is_over() && self.computer_stone() == Some(self.state().current_player())
    }

    /// Check if it's a human's turn
    pub fn is_human_turn(&self) -> bool {
        !self.state().is_over() && !self.is_opponent_turn()
    }

    /// Check if the computer's reply is pending
    pub fn is_opponent_thinking(&self) -> bool {
        matches!(self.opponent, OpponentState::Waiting { .. })
    }

    /// When the pending reply is due, for scheduling repaints
    pub fn reply_due(&self) -> Option<Instant> {
        match self.opponent {
            OpponentState::Waiting { due, .. } => Some(due),
            OpponentState::Idle => None,
        }
    }

    /// How the computer found its last move
    pub fn last_choice(&self) -> Option<&MoveChoice> {
        self.last_choice.as_ref()
    }

    /// Suggested move from the last [`GameSession::hint`] call
    pub fn suggested_move(&self) -> Option<Pos> {
        self.hint
    }

    /// Place a stone for the human side to move
    #[instrument(skip(self, now))]
    pub fn submit_move(&mut self, pos: Pos, now: Instant) -> Result<GameStatus, GameError> {
        if self.is_opponent_turn() {
            return Err(GameError::NotYourTurn);
        }
        let status = self.controller.apply_move(pos)?;
        self.advance();
        self.schedule_reply(now);
        Ok(status)
    }

    /// Play the computer's reply once it is due.
    ///
    /// Returns the position played, if any.
    pub fn poll(&mut self, now: Instant) -> Option<Pos> {
        let OpponentState::Waiting { due, generation } = self.opponent else {
            return None;
        };
        if now < due {
            return None;
        }
        self.opponent = OpponentState::Idle;
        if generation != self.generation || !self.is_opponent_turn() {
            debug!(generation, current = self.generation, "discarding stale reply");
            return None;
        }

        let state = self.controller.state();
        let choice = choose_move_with_stats(state.board(), state.current_player(), self.difficulty());
        self.last_choice = Some(choice);
        let pos = choice.best_move?;

        match self.controller.apply_move(pos) {
            Ok(_) => {
                self.advance();
                Some(pos)
            }
            Err(err) => {
                warn!(%err, %pos, "computer move rejected");
                None
            }
        }
    }

    /// Take back moves until a human is to move again.
    ///
    /// Against the computer this usually takes back its reply and the
    /// human move before it. Returns the number of moves taken back.
    #[instrument(skip(self, now))]
    pub fn undo(&mut self, now: Instant) -> Result<usize, GameError> {
        self.controller.undo()?;
        let mut count = 1;
        while self.is_opponent_turn() && self.controller.undo().is_ok() {
            count += 1;
        }
        self.advance();
        self.schedule_reply(now);
        Ok(count)
    }

    /// Replay undone moves until a human is to move again.
    ///
    /// Returns the number of moves replayed.
    #[instrument(skip(self, now))]
    pub fn redo(&mut self, now: Instant) -> Result<usize, GameError> {
        self.controller.redo()?;
        let mut count = 1;
        while self.is_opponent_turn() && self.controller.redo().is_ok() {
            count += 1;
        }
        self.advance();
        self.schedule_reply(now);
        Ok(count)
    }

    /// Start over with the same configuration
    #[instrument(skip(self, now))]
    pub fn restart(&mut self, now: Instant) {
        self.controller.restart();
        self.reset(now);
    }

    /// Start over with a different configuration.
    ///
    /// An out-of-range board size is rejected and the current game is kept.
    #[instrument(skip(self, now))]
    pub fn restart_with(&mut self, config: GameConfig, now: Instant) -> Result<(), GameError> {
        self.controller = TurnController::with_size(config.board_size)?;
        self.config = config;
        self.reset(now);
        Ok(())
    }

    /// Change the computer's strength without interrupting the game.
    ///
    /// A reply already scheduled is played at the new strength.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.opponent.difficulty = difficulty;
        info!(?difficulty, "difficulty changed");
    }

    /// Ask the opponent policy what it would play for the side to move
    pub fn hint(&mut self) -> Option<Pos> {
        let state = self.controller.state();
        if state.is_over() || self.is_opponent_thinking() {
            return None;
        }
        self.hint = choose_move(state.board(), state.current_player(), Difficulty::Hard);
        self.hint
    }

    fn difficulty(&self) -> Difficulty {
        self.config.opponent.difficulty
    }

    fn reset(&mut self, now: Instant) {
        self.last_choice = None;
        self.advance();
        self.schedule_reply(now);
    }

    /// Record a transition: stale replies and hints no longer apply
    fn advance(&mut self) {
        self.generation += 1;
        self.opponent = OpponentState::Idle;
        self.hint = None;
    }

    fn schedule_reply(&mut self, now: Instant) {
        if !self.is_opponent_turn() {
            return;
        }
        let due = now + self.config.opponent.reply_delay();
        self.opponent = OpponentState::Waiting {
            due,
            generation: self.generation,
        };
        debug!(generation = self.generation, "computer reply scheduled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn vs_computer(human_first: bool) -> GameConfig {
        let mut config = GameConfig::default();
        config.opponent.human_first = human_first;
        config.opponent.reply_delay_ms = 200;
        config
    }

    fn later(now: Instant) -> Instant {
        now + Duration::from_millis(500)
    }

    #[test]
    fn test_hot_seat_has_no_computer() {
        let now = Instant::now();
        let mut session = GameSession::new(GameConfig::two_player(15), now).unwrap();
        assert_eq!(session.computer_stone(), None);

        session.submit_move(Pos::new(7, 7), now).unwrap();
        assert!(session.is_human_turn());
        assert!(!session.is_opponent_thinking());
        session.submit_move(Pos::new(7, 8), now).unwrap();
        assert_eq!(session.state().move_count(), 2);
    }

    #[test]
    fn test_computer_replies_after_delay() {
        let now = Instant::now();
        let mut session = GameSession::new(vs_computer(true), now).unwrap();
        session.submit_move(Pos::new(7, 7), now).unwrap();

        assert!(session.is_opponent_thinking());
        assert_eq!(session.poll(now), None, "reply not due yet");

        let reply = session.poll(later(now)).unwrap();
        assert_eq!(session.state().board().get(reply), Ok(Stone::White));
        assert!(session.is_human_turn());
        assert!(session.last_choice().is_some());
    }

    #[test]
    fn test_human_blocked_during_computer_turn() {
        let now = Instant::now();
        let mut session = GameSession::new(vs_computer(true), now).unwrap();
        session.submit_move(Pos::new(7, 7), now).unwrap();
        assert_eq!(session.submit_move(Pos::new(0, 0), now), Err(GameError::NotYourTurn));
        assert_eq!(session.state().move_count(), 1);
    }

    #[test]
    fn test_computer_opens_when_human_second() {
        let now = Instant::now();
        let mut session = GameSession::new(vs_computer(false), now).unwrap();
        assert_eq!(session.computer_stone(), Some(Stone::Black));
        assert!(session.is_opponent_thinking());

        assert_eq!(session.poll(later(now)), Some(Pos::new(7, 7)));
        assert_eq!(session.state().current_player(), Stone::White);
    }

    #[test]
    fn test_undo_cancels_pending_reply() {
        let now = Instant::now();
        let mut session = GameSession::new(vs_computer(true), now).unwrap();
        session.submit_move(Pos::new(7, 7), now).unwrap();
        assert!(session.is_opponent_thinking());

        assert_eq!(session.undo(now), Ok(1));
        assert!(!session.is_opponent_thinking());
        assert_eq!(session.poll(later(now)), None);
        assert!(session.state().board().is_board_empty());
    }

    #[test]
    fn test_restart_cancels_pending_reply() {
        let now = Instant::now();
        let mut session = GameSession::new(vs_computer(true), now).unwrap();
        session.submit_move(Pos::new(7, 7), now).unwrap();
        session.restart(now);

        assert_eq!(session.poll(later(now)), None);
        assert_eq!(session.state().move_count(), 0);
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let now = Instant::now();
        let mut session = GameSession::new(vs_computer(true), now).unwrap();
        session.submit_move(Pos::new(7, 7), now).unwrap();

        // A reply scheduled against an older state must not be applied
        session.opponent = OpponentState::Waiting {
            due: now,
            generation: session.generation() - 1,
        };
        assert_eq!(session.poll(later(now)), None);
        assert_eq!(session.state().move_count(), 1);
    }

    #[test]
    fn test_undo_against_computer_returns_to_human() {
        let now = Instant::now();
        let mut session = GameSession::new(vs_computer(true), now).unwrap();
        session.submit_move(Pos::new(7, 7), now).unwrap();
        session.poll(later(now)).unwrap();

        assert_eq!(session.undo(now), Ok(2));
        assert!(session.state().board().is_board_empty());
        assert_eq!(session.state().current_player(), Stone::Black);
        assert!(session.is_human_turn());
        assert!(!session.is_opponent_thinking());
    }

    #[test]
    fn test_redo_against_computer_replays_both() {
        let now = Instant::now();
        let mut session = GameSession::new(vs_computer(true), now).unwrap();
        session.submit_move(Pos::new(7, 7), now).unwrap();
        session.poll(later(now)).unwrap();
        let before = session.state().board().clone();

        session.undo(now).unwrap();
        assert_eq!(session.redo(now), Ok(2));
        assert_eq!(session.state().board(), &before);
        assert!(session.is_human_turn());
    }

    #[test]
    fn test_undo_with_no_moves() {
        let now = Instant::now();
        let mut session = GameSession::new(GameConfig::two_player(15), now).unwrap();
        assert_eq!(session.undo(now), Err(GameError::EmptyHistory));
        assert_eq!(session.redo(now), Err(GameError::EmptyHistory));
    }

    #[test]
    fn test_hint_is_legal_and_cleared_by_move() {
        let now = Instant::now();
        let mut session = GameSession::new(GameConfig::two_player(15), now).unwrap();
        session.submit_move(Pos::new(7, 7), now).unwrap();

        let hint = session.hint().unwrap();
        assert!(session.state().board().is_empty(hint));
        assert_eq!(session.suggested_move(), Some(hint));

        session.submit_move(hint, now).unwrap();
        assert_eq!(session.suggested_move(), None);
    }

    #[test]
    fn test_restart_with_new_config() {
        let now = Instant::now();
        let mut session = GameSession::new(GameConfig::two_player(15), now).unwrap();
        session.submit_move(Pos::new(7, 7), now).unwrap();

        session.restart_with(vs_computer(false), now).unwrap();
        assert_eq!(session.state().move_count(), 0);
        assert!(session.is_opponent_thinking());
    }

    #[test]
    fn test_rejects_out_of_range_board_size() {
        let now = Instant::now();
        for size in [0, 4, 26, 256] {
            assert_eq!(
                GameSession::new(GameConfig::two_player(size), now).unwrap_err(),
                GameError::InvalidBoardSize { size }
            );
        }

        let mut session = GameSession::new(GameConfig::two_player(9), now).unwrap();
        session.submit_move(Pos::new(4, 4), now).unwrap();
        assert_eq!(
            session.restart_with(GameConfig::two_player(0), now),
            Err(GameError::InvalidBoardSize { size: 0 })
        );
        assert_eq!(session.config().board_size, 9);
        assert_eq!(session.state().board().size(), 9);
        assert_eq!(session.state().move_count(), 1);
    }

    #[test]
    fn test_difficulty_change_keeps_game() {
        let now = Instant::now();
        let mut session = GameSession::new(vs_computer(true), now).unwrap();
        session.submit_move(Pos::new(7, 7), now).unwrap();
        session.poll(later(now)).unwrap();

        session.set_difficulty(Difficulty::Hard);
        assert_eq!(session.config().opponent.difficulty, Difficulty::Hard);
        assert_eq!(session.state().move_count(), 2);
        assert!(session.is_human_turn());
    }
}
