//! Zobrist hashing for position identification
//!
//! Each (cell, piece) pair gets a random 64-bit constant; the position
//! key of a board is the XOR of the constants for every occupied cell.
//! XOR is its own inverse, so [`Board`](super::Board) can maintain the
//! key incrementally in O(1) per place/undo, and the key is independent
//! of the order in which stones were placed.
//!
//! The table is built from a caller-supplied seed so that every engine
//! instance is reproducible on its own without any shared global state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{Pos, Stone};

/// Seed used when the caller does not provide one.
pub const DEFAULT_SEED: u64 = 12345;

/// Per-instance table of Zobrist hash constants.
pub struct ZobristTable {
    size: usize,
    /// Two constants per logical cell: `[black, white]`, row-major.
    pieces: Vec<u64>,
    /// Constant folded into transposition-table keys when White is to
    /// move. Not part of the board's position key.
    side: u64,
}

impl ZobristTable {
    /// Build a table for a `size` x `size` board from a fixed seed.
    #[must_use]
    pub fn new(size: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let pieces = (0..size * size * 2).map(|_| rng.gen::<u64>()).collect();
        Self {
            size,
            pieces,
            side: rng.gen::<u64>(),
        }
    }

    /// Constant for `stone` sitting at `pos`.
    #[inline]
    #[must_use]
    pub fn piece(&self, pos: Pos, stone: Stone) -> u64 {
        debug_assert!(pos.row < self.size && pos.col < self.size);
        let offset = match stone {
            Stone::Black => 0,
            Stone::White => 1,
            Stone::Empty => return 0,
        };
        self.pieces[(pos.row * self.size + pos.col) * 2 + offset]
    }

    /// Side-to-move constant for transposition-table addressing.
    #[inline]
    #[must_use]
    pub fn side(&self) -> u64 {
        self.side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_table() {
        let a = ZobristTable::new(15, 42);
        let b = ZobristTable::new(15, 42);
        let pos = Pos::new(7, 7);
        assert_eq!(a.piece(pos, Stone::Black), b.piece(pos, Stone::Black));
        assert_eq!(a.piece(pos, Stone::White), b.piece(pos, Stone::White));
        assert_eq!(a.side(), b.side());
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = ZobristTable::new(15, 1);
        let b = ZobristTable::new(15, 2);
        let pos = Pos::new(0, 0);
        assert_ne!(a.piece(pos, Stone::Black), b.piece(pos, Stone::Black));
    }

    #[test]
    fn test_piece_constants_distinct() {
        let zt = ZobristTable::new(15, DEFAULT_SEED);
        let a = zt.piece(Pos::new(3, 4), Stone::Black);
        let b = zt.piece(Pos::new(3, 4), Stone::White);
        let c = zt.piece(Pos::new(4, 3), Stone::Black);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_empty_piece_is_zero() {
        let zt = ZobristTable::new(15, DEFAULT_SEED);
        assert_eq!(zt.piece(Pos::new(7, 7), Stone::Empty), 0);
    }
}
