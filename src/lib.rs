//! Freestyle Gomoku: game engine and desktop board
//!
//! Two players alternate placing stones on a square board (15x15 by
//! default). The first to line up five or more stones horizontally,
//! vertically or diagonally wins; a full board without a five is a draw.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board grid, stones and coordinates
//! - [`history`]: Applied moves and the redo stack
//! - [`rules`]: Move legality, win and draw detection
//! - [`controller`]: Turn controller owning the game state
//! - [`eval`] and [`engine`]: The lightweight computer opponent
//! - [`session`]: Human/computer turn handling with a cancellable reply delay
//! - [`config`]: TOML configuration
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameStatus, Pos, Stone, TurnController};
//!
//! let mut game = TurnController::new();
//! for col in 3..7 {
//!     game.apply_move(Pos::new(7, col)).unwrap(); // Black
//!     game.apply_move(Pos::new(0, col)).unwrap(); // White
//! }
//! assert_eq!(game.apply_move(Pos::new(7, 7)), Ok(GameStatus::Won(Stone::Black)));
//!
//! game.undo().unwrap();
//! assert_eq!(game.state().status(), GameStatus::InProgress);
//! ```

pub mod board;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod eval;
pub mod history;
pub mod rules;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::{GameConfig, OpponentConfig};
pub use controller::{GameState, TurnController};
pub use engine::{choose_move, choose_move_with_stats, ChoiceKind, Difficulty, MoveChoice};
pub use error::{ConfigError, GameError};
pub use history::{Move, MoveHistory};
pub use rules::{GameStatus, WinResult};
pub use session::GameSession;
