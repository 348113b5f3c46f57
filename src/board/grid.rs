//! Padded grid board with move history and candidate tracking

use std::ops::Deref;

use super::zobrist::{ZobristTable, DEFAULT_SEED};
use super::{BoardError, Pos, Stone};

/// Width of the border margin on each side of the logical board.
///
/// Directional scans may step one cell past the logical edge; the margin
/// guarantees they land on a [`Slot::Border`] cell instead of needing a
/// per-step bounds check.
pub(crate) const PADDING: usize = 4;

/// Chebyshev radius within which empty cells become move candidates.
const CANDIDATE_RADIUS: i32 = 2;

/// Contents of one padded-grid cell.
///
/// `Border` marks the margin; for line scanning it blocks a run end
/// exactly like an opponent stone does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    Border,
    Empty,
    Black,
    White,
}

impl Slot {
    #[inline]
    fn of(stone: Stone) -> Slot {
        match stone {
            Stone::Empty => Slot::Empty,
            Stone::Black => Slot::Black,
            Stone::White => Slot::White,
        }
    }

    /// True if this cell holds `stone`.
    #[inline]
    pub(crate) fn is(self, stone: Stone) -> bool {
        self != Slot::Border && self != Slot::Empty && Slot::of(stone) == self
    }

    /// True if this cell blocks a run of `stone`: off-board or opponent.
    #[inline]
    pub(crate) fn blocks(self, stone: Stone) -> bool {
        self == Slot::Border || self.is(stone.opponent())
    }
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    slot: Slot,
    candidate: bool,
}

/// Game board: a `size + 8` padded square grid of cells, the move
/// history, and the incrementally maintained Zobrist position key.
///
/// All coordinates at the public boundary are unpadded 0-based [`Pos`].
///
/// Candidate flags are monotonic for the lifetime of a board: once an
/// empty cell is flagged (because a stone landed within Chebyshev
/// distance 2 of it), the flag stays set even if that stone is later
/// undone. This staleness is deliberate — flags are cheap to maintain
/// and only ever widen the candidate set, never corrupt occupancy, win
/// detection, or scoring.
pub struct Board {
    size: usize,
    padded: usize,
    cells: Vec<Cell>,
    history: Vec<(Pos, Stone)>,
    zobrist: ZobristTable,
    key: u64,
}

impl Board {
    /// Create an empty board with the default Zobrist seed.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::with_seed(size, DEFAULT_SEED)
    }

    /// Create an empty board whose Zobrist constants derive from `seed`.
    #[must_use]
    pub fn with_seed(size: usize, seed: u64) -> Self {
        let padded = size + 2 * PADDING;
        let mut cells = vec![
            Cell {
                slot: Slot::Border,
                candidate: false,
            };
            padded * padded
        ];
        for row in 0..size {
            for col in 0..size {
                cells[(row + PADDING) * padded + col + PADDING].slot = Slot::Empty;
            }
        }
        Self {
            size,
            padded,
            cells,
            history: Vec::with_capacity(size * size),
            zobrist: ZobristTable::new(size, seed),
            key: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Center cell, the canonical fallback move.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Pos {
        Pos::new(self.size / 2, self.size / 2)
    }

    /// Padded-grid index for a logical position.
    #[inline]
    fn index(&self, pos: Pos) -> usize {
        (pos.row + PADDING) * self.padded + pos.col + PADDING
    }

    /// Cell state at logical coordinates, which may reach into the
    /// margin (down to `-PADDING`). Used by the line scanner.
    #[inline]
    pub(crate) fn slot(&self, row: i32, col: i32) -> Slot {
        debug_assert!(row >= -(PADDING as i32) && col >= -(PADDING as i32));
        let r = (row + PADDING as i32) as usize;
        let c = (col + PADDING as i32) as usize;
        debug_assert!(r < self.padded && c < self.padded);
        self.cells[r * self.padded + c].slot
    }

    /// Stone at a logical position.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Pos) -> Stone {
        debug_assert!(pos.row < self.size && pos.col < self.size);
        match self.cells[self.index(pos)].slot {
            Slot::Black => Stone::Black,
            Slot::White => Stone::White,
            _ => Stone::Empty,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Whether the cell has been flagged as a move candidate.
    #[inline]
    #[must_use]
    pub fn is_candidate(&self, pos: Pos) -> bool {
        self.cells[self.index(pos)].candidate
    }

    /// Total stones on board.
    #[inline]
    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn is_board_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Incremental Zobrist key of the current occupancy.
    ///
    /// Invariant: equals the XOR of the per-(cell, piece) constants for
    /// exactly the occupied cells, for any order of place/undo.
    #[inline]
    #[must_use]
    pub fn key(&self) -> u64 {
        self.key
    }

    /// Side-to-move constant for transposition-table addressing.
    #[inline]
    pub(crate) fn side_key(&self) -> u64 {
        self.zobrist.side()
    }

    /// Place a stone.
    ///
    /// Sets the piece, records it in the history, folds its constant
    /// into the position key, and flags every empty cell within
    /// Chebyshev distance 2 as a candidate.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] if the position is outside the
    /// logical board; [`BoardError::Occupied`] if the cell already
    /// holds a stone. Both indicate a caller bug.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<(), BoardError> {
        debug_assert_ne!(stone, Stone::Empty);
        if pos.row >= self.size || pos.col >= self.size {
            return Err(BoardError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.size,
            });
        }
        let idx = self.index(pos);
        if self.cells[idx].slot != Slot::Empty {
            return Err(BoardError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }

        self.cells[idx].slot = Slot::of(stone);
        self.history.push((pos, stone));
        self.key ^= self.zobrist.piece(pos, stone);
        self.flag_candidates(pos);
        Ok(())
    }

    /// Undo the most recent move. No-op on an empty history.
    ///
    /// Candidate flags are intentionally left as they are; see the type
    /// docs for the monotonic-flag contract.
    pub fn undo(&mut self) -> Option<(Pos, Stone)> {
        let (pos, stone) = self.history.pop()?;
        let idx = self.index(pos);
        self.cells[idx].slot = Slot::Empty;
        self.key ^= self.zobrist.piece(pos, stone);
        Some((pos, stone))
    }

    /// Flag empty cells around a newly placed stone as candidates.
    fn flag_candidates(&mut self, pos: Pos) {
        for dr in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
            for dc in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
                let r = pos.row as i32 + dr;
                let c = pos.col as i32 + dc;
                if r < 0 || c < 0 || r as usize >= self.size || c as usize >= self.size {
                    continue;
                }
                let idx = (r as usize + PADDING) * self.padded + c as usize + PADDING;
                if self.cells[idx].slot == Slot::Empty {
                    self.cells[idx].candidate = true;
                }
            }
        }
    }

    /// Collect every empty, candidate-flagged cell.
    #[must_use]
    pub fn candidate_positions(&self) -> Vec<Pos> {
        let mut out = Vec::with_capacity(64);
        for row in 0..self.size {
            for col in 0..self.size {
                let cell = self.cells[(row + PADDING) * self.padded + col + PADDING];
                if cell.slot == Slot::Empty && cell.candidate {
                    out.push(Pos::new(row, col));
                }
            }
        }
        out
    }

    /// Temporarily put `stone` on the empty cell at `pos` for the
    /// lifetime of the returned guard.
    ///
    /// The guard dereferences to the board for read access and restores
    /// the empty cell on every exit path when it drops. History, the
    /// position key, and candidate flags are untouched — this is the
    /// simulate-measure-retract probe used by move evaluation, not a
    /// real move.
    pub fn probe(&mut self, pos: Pos, stone: Stone) -> ProbeGuard<'_> {
        let idx = self.index(pos);
        debug_assert_eq!(self.cells[idx].slot, Slot::Empty);
        self.cells[idx].slot = Slot::of(stone);
        ProbeGuard { board: self, idx }
    }
}

/// RAII guard for a simulated placement; see [`Board::probe`].
pub struct ProbeGuard<'a> {
    board: &'a mut Board,
    idx: usize,
}

impl Deref for ProbeGuard<'_> {
    type Target = Board;

    #[inline]
    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for ProbeGuard<'_> {
    fn drop(&mut self) {
        self.board.cells[self.idx].slot = Slot::Empty;
    }
}
