//! Board grid storage

use super::{Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::GameError;

/// Square grid of intersections, each holding a [`Stone`].
///
/// The board is a plain container: it knows nothing about turns or
/// rules. Mutation is reserved to the crate so that every stone on the
/// board is backed by a recorded move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Create an empty board of the given dimension.
    ///
    /// Fails with [`GameError::InvalidBoardSize`] outside
    /// `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidBoardSize { size });
        }
        Ok(Self::empty(size))
    }

    /// Empty board of an already checked size
    pub(crate) fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the position lies on the board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    /// Get stone at position
    pub fn get(&self, pos: Pos) -> Result<Stone, GameError> {
        if !self.contains(pos) {
            return Err(GameError::OutOfBounds {
                row: pos.row as usize,
                col: pos.col as usize,
                size: self.size,
            });
        }
        Ok(self.cells[self.index(pos)])
    }

    /// Stone at an on-board position; `Empty` for anything outside
    #[inline]
    pub(crate) fn stone_at(&self, pos: Pos) -> Stone {
        if self.contains(pos) {
            self.cells[self.index(pos)]
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty (off-board positions are never empty)
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.contains(pos) && self.cells[self.index(pos)] == Stone::Empty
    }

    /// Overwrite a cell. Callers must have checked bounds.
    #[inline]
    pub(crate) fn set(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.contains(pos), "set outside board: {pos}");
        let idx = self.index(pos);
        self.cells[idx] = stone;
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    /// Check if board has no stones
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    /// Check if every intersection is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&s| s != Stone::Empty)
    }

    /// Central intersection (tengen)
    pub fn center(&self) -> Pos {
        let mid = (self.size / 2) as u8;
        Pos::new(mid, mid)
    }

    /// All intersections in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size as u8;
        (0..size).flat_map(move |row| (0..size).map(move |col| Pos::new(row, col)))
    }

    /// Check if any stone lies within `radius` of the position
    pub fn has_neighbor(&self, pos: Pos, radius: i32) -> bool {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some(p) = pos.offset(dr, dc, 1, self.size) {
                    if self.stone_at(p) != Stone::Empty {
                        return true;
                    }
                }
            }
        }
        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_BOARD_SIZE)
    }
}
