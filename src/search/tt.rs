//! Transposition table for caching search results
//!
//! Search positions recur constantly under iterative deepening; the
//! table caches the result of searching a position at a given depth,
//! indexed by its Zobrist key (with the side-to-move constant folded
//! in). Direct-mapped with a depth-preferred replacement policy.

use crate::board::Pos;

/// How a stored score relates to the true value of the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Search completed inside the window
    Exact,
    /// Fail-high: true value >= stored score
    Lower,
    /// Fail-low: true value <= stored score
    Upper,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    key: u64,
    depth: i32,
    score: i32,
    bound: Bound,
    best_move: Option<Pos>,
}

/// Direct-mapped transposition table.
pub struct TranspositionTable {
    entries: Vec<Option<Entry>>,
    slots: usize,
}

impl TranspositionTable {
    /// Create a table of roughly `size_mb` megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entry_size = std::mem::size_of::<Option<Entry>>();
        let slots = ((size_mb * 1024 * 1024) / entry_size).max(1024);
        Self {
            entries: vec![None; slots],
            slots,
        }
    }

    /// Look up a usable score for the position.
    ///
    /// Returns `Some(score)` only when the entry was searched at least
    /// as deep as `depth` and its bound resolves the current window:
    /// exact scores always do, a lower bound only when it already fails
    /// high, an upper bound only when it fails low.
    #[must_use]
    pub fn probe(&self, key: u64, depth: i32, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.entries[(key as usize) % self.slots]?;
        if entry.key != key || entry.depth < depth {
            return None;
        }
        match entry.bound {
            Bound::Exact => Some(entry.score),
            Bound::Lower if entry.score >= beta => Some(entry.score),
            Bound::Upper if entry.score <= alpha => Some(entry.score),
            _ => None,
        }
    }

    /// Best move recorded for the position, for move ordering, even
    /// when the stored score is not usable.
    #[must_use]
    pub fn best_move(&self, key: u64) -> Option<Pos> {
        let entry = self.entries[(key as usize) % self.slots]?;
        if entry.key == key {
            entry.best_move
        } else {
            None
        }
    }

    /// Store a search result.
    ///
    /// Replaces the slot when it is empty, holds the same position, or
    /// holds a shallower search.
    pub fn store(&mut self, key: u64, depth: i32, score: i32, bound: Bound, best_move: Option<Pos>) {
        let idx = (key as usize) % self.slots;
        let replace = match &self.entries[idx] {
            None => true,
            Some(e) => e.key == key || e.depth <= depth,
        };
        if replace {
            self.entries[idx] = Some(Entry {
                key,
                depth,
                score,
                bound,
                best_move,
            });
        }
    }

    /// Drop every entry, e.g. between unrelated games.
    pub fn clear(&mut self) {
        self.entries.fill(None);
    }
}
