//! Move log with undo/redo support

use crate::board::{Pos, Stone};

/// A stone placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub stone: Stone,
    /// Zero-based index of this move in the applied sequence
    pub seq: usize,
}

impl Move {
    #[inline]
    pub fn new(pos: Pos, stone: Stone, seq: usize) -> Self {
        Self { pos, stone, seq }
    }
}

/// Applied moves in play order plus a stack of undone moves.
///
/// The redo stack holds only moves taken back since the last fresh move;
/// recording a fresh move discards it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    applied: Vec<Move>,
    redo: Vec<Move>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh move and drop the redo stack
    pub fn record(&mut self, mv: Move) {
        self.applied.push(mv);
        self.redo.clear();
    }

    /// Append a replayed move, keeping the rest of the redo stack
    pub fn restore(&mut self, mv: Move) {
        self.applied.push(mv);
    }

    /// Remove and return the most recent applied move
    pub fn pop_last(&mut self) -> Option<Move> {
        self.applied.pop()
    }

    pub fn push_redo(&mut self, mv: Move) {
        self.redo.push(mv);
    }

    pub fn pop_redo(&mut self) -> Option<Move> {
        self.redo.pop()
    }

    /// Most recent applied move, for highlighting
    pub fn last_move(&self) -> Option<&Move> {
        self.applied.last()
    }

    /// Applied moves in play order
    pub fn moves(&self) -> &[Move] {
        &self.applied
    }

    /// Undone moves, most recently undone last
    pub fn redo_moves(&self) -> &[Move] {
        &self.redo
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.applied.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.applied.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}
