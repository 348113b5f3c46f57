//! Board representation for five-in-a-row

pub mod grid;
pub mod zobrist;


// Re-exports
pub use grid::{Board, ProbeGuard};
pub use zobrist::ZobristTable;

/// Default board side length (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }
}

/// Position on the board, in unpadded 0-based coordinates.
///
/// The fixed padding margin used by [`Board`] internally never leaks
/// through this type: every public API speaks `Pos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Win-rule variants, immutable for the duration of a search.
///
/// - `exactly_five`: a run wins only if it is exactly 5 stones long;
///   overlines (6+) do not count.
/// - `no_blocked_wins`: a run with both ends blocked never counts as a
///   win, regardless of length, and blocked fours are scored lower.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleSet {
    pub exactly_five: bool,
    pub no_blocked_wins: bool,
}

/// Errors surfaced by [`Board::place`].
///
/// Both variants indicate a caller/state-synchronization bug rather than
/// a condition the engine can resolve, so they are reported instead of
/// being silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },
}
