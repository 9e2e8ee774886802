//! Move evaluation for the computer opponent
//!
//! - [`patterns`]: score table for line shapes
//! - [`heuristic`]: one-ply scoring of candidate moves

pub mod heuristic;
pub mod patterns;

pub use heuristic::{line_shape, score_move, LineShape, ScoreWeights};
pub use patterns::PatternScore;
