//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe. It only
//! reads the [`GameSession`](crate::GameSession) and forwards clicks and
//! key presses to it.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
