//! Pattern scores for Gomoku evaluation
//!
//! These constants define the scoring weights for the line shapes a
//! single move can create.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    // Winning patterns
    /// Five or more in a row - immediate win
    pub const FIVE: i32 = 1_000_000;

    // Strong attacking patterns
    /// Open four: _OOOO_ (unstoppable)
    pub const OPEN_FOUR: i32 = 100_000;
    /// Closed four: XOOOO_ or _OOOOX (one way to extend)
    pub const CLOSED_FOUR: i32 = 10_000;

    // Moderate threats
    /// Open three: _OOO_ (becomes open four if not blocked)
    pub const OPEN_THREE: i32 = 5_000;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i32 = 500;

    // Building patterns
    /// Open two: _OO_ (potential to grow)
    pub const OPEN_TWO: i32 = 200;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: i32 = 20;
    /// Lone stone with room on both sides
    pub const OPEN_ONE: i32 = 10;

    /// Two threats of open-three strength or better on different axes;
    /// the opponent can only answer one of them.
    pub const DOUBLE_THREAT: i32 = 50_000;
}

/// Score of a contiguous run of `len` stones with `open_ends` free ends.
///
/// A run blocked on both sides cannot grow into five and scores nothing
/// unless it is already five.
pub fn line_score(len: usize, open_ends: u8) -> i32 {
    match (len, open_ends) {
        (l, _) if l >= 5 => PatternScore::FIVE,
        (_, 0) => 0,
        (4, 2) => PatternScore::OPEN_FOUR,
        (4, _) => PatternScore::CLOSED_FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, _) => PatternScore::CLOSED_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        (2, _) => PatternScore::CLOSED_TWO,
        (_, 2) => PatternScore::OPEN_ONE,
        _ => 1,
    }
}

/// Whether a line shape forces an answer from the opponent
#[inline]
pub fn is_threat(len: usize, open_ends: u8) -> bool {
    line_score(len, open_ends) >= PatternScore::OPEN_THREE
}
