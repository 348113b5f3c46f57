//! Stateless move-provider facade
//!
//! `Engine` accepts a full position snapshot per call, rebuilds the
//! board internally, and runs the searcher on it. The caller carries
//! the game state; the engine only keeps what is worth keeping across
//! calls (the transposition table and the opening RNG), so consecutive
//! snapshots from the same game reuse earlier search effort.

use log::debug;
use thiserror::Error;

use crate::board::{Board, BoardError, Pos, RuleSet, Stone};
use crate::search::{SearchLimits, SearchResult, Searcher};

/// Errors from the engine facade.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("snapshot has {actual} cells, expected {expected}")]
    SnapshotSize { expected: usize, actual: usize },
    #[error("side to move must be black or white")]
    EmptySide,
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Move provider for one board size and rule set.
pub struct Engine {
    size: usize,
    rules: RuleSet,
    searcher: Searcher,
}

impl Engine {
    /// Engine with default rules and limits on a standard 15x15 board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::with_config(size, RuleSet::default(), SearchLimits::default())
    }

    #[must_use]
    pub fn with_config(size: usize, rules: RuleSet, limits: SearchLimits) -> Self {
        Self {
            size,
            rules,
            searcher: Searcher::with_limits(rules, limits),
        }
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Compute the best move for `to_move` given a row-major snapshot
    /// of the board, `size * size` cells long.
    ///
    /// The snapshot is never mutated; a fresh internal board is built
    /// per call, so a corrupt or partial snapshot cannot poison later
    /// calls.
    pub fn best_move(
        &mut self,
        snapshot: &[Stone],
        to_move: Stone,
    ) -> Result<SearchResult, EngineError> {
        if to_move == Stone::Empty {
            return Err(EngineError::EmptySide);
        }
        let expected = self.size * self.size;
        if snapshot.len() != expected {
            return Err(EngineError::SnapshotSize {
                expected,
                actual: snapshot.len(),
            });
        }

        let mut board = Board::with_seed(self.size, self.searcher.limits().seed);
        for (i, &stone) in snapshot.iter().enumerate() {
            if stone != Stone::Empty {
                board.place(Pos::new(i / self.size, i % self.size), stone)?;
            }
        }

        let result = self.searcher.search(&mut board, to_move);
        debug!(
            "best move ({}, {}) score {} depth {} nodes {} in {}ms",
            result.pos.row, result.pos.col, result.score, result.depth, result.nodes, result.time_ms
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::PatternScore;
    use std::time::Duration;

    fn quick_engine(size: usize) -> Engine {
        let limits = SearchLimits {
            budget: Duration::from_millis(300),
            ..SearchLimits::default()
        };
        Engine::with_config(size, RuleSet::default(), limits)
    }

    fn snapshot_with(size: usize, stones: &[(usize, usize, Stone)]) -> Vec<Stone> {
        let mut cells = vec![Stone::Empty; size * size];
        for &(row, col, stone) in stones {
            cells[row * size + col] = stone;
        }
        cells
    }

    #[test]
    fn test_empty_snapshot_plays_center() {
        let mut engine = quick_engine(15);
        let snapshot = vec![Stone::Empty; 15 * 15];
        let result = engine.best_move(&snapshot, Stone::Black).unwrap();
        assert_eq!(result.pos, Pos::new(7, 7));
    }

    #[test]
    fn test_wrong_snapshot_length() {
        let mut engine = quick_engine(15);
        let snapshot = vec![Stone::Empty; 19 * 19];
        let err = engine.best_move(&snapshot, Stone::Black).unwrap_err();
        assert!(matches!(
            err,
            EngineError::SnapshotSize {
                expected: 225,
                actual: 361
            }
        ));
    }

    #[test]
    fn test_empty_side_rejected() {
        let mut engine = quick_engine(15);
        let snapshot = vec![Stone::Empty; 15 * 15];
        let err = engine.best_move(&snapshot, Stone::Empty).unwrap_err();
        assert!(matches!(err, EngineError::EmptySide));
    }

    #[test]
    fn test_finishes_open_four_from_snapshot() {
        let mut engine = quick_engine(15);
        let snapshot = snapshot_with(
            15,
            &[
                (7, 3, Stone::Black),
                (7, 4, Stone::Black),
                (7, 5, Stone::Black),
                (7, 6, Stone::Black),
            ],
        );
        let result = engine.best_move(&snapshot, Stone::Black).unwrap();
        assert!(result.pos == Pos::new(7, 2) || result.pos == Pos::new(7, 7));
        assert!(result.score >= PatternScore::WIN);
    }

    #[test]
    fn test_snapshot_not_mutated() {
        let mut engine = quick_engine(15);
        let snapshot = snapshot_with(
            15,
            &[(7, 7, Stone::Black), (8, 8, Stone::White), (6, 6, Stone::Black)],
        );
        let before = snapshot.clone();
        engine.best_move(&snapshot, Stone::White).unwrap();
        assert_eq!(snapshot, before);
    }

    #[test]
    fn test_consecutive_calls_stay_consistent() {
        // Same engine across calls: the persistent table must not
        // change the forced-win answer
        let mut engine = quick_engine(15);
        let snapshot = snapshot_with(
            15,
            &[
                (7, 3, Stone::Black),
                (7, 4, Stone::Black),
                (7, 5, Stone::Black),
                (7, 6, Stone::Black),
            ],
        );
        let first = engine.best_move(&snapshot, Stone::Black).unwrap();
        let second = engine.best_move(&snapshot, Stone::Black).unwrap();
        assert_eq!(first.pos, second.pos);
        assert_eq!(first.score, second.score);
    }
}
