//! Gomoku move-search engine
//!
//! A heuristic five-in-a-row engine: iterative-deepening alpha-beta
//! search over a padded board with incremental Zobrist hashing and a
//! pattern-based line evaluation. Two rule switches cover the common
//! variants: exact-five (overlines do not win) and no-blocked-wins
//! (a five walled in on both ends does not win).
//!
//! # Architecture
//!
//! - [`board`]: Padded grid, move history, Zobrist keys, candidate tracking
//! - [`rules`]: Line scanning and win detection under the rule switches
//! - [`eval`]: Pattern scores and the positional heuristic
//! - [`search`]: Candidate generation, transposition table, alpha-beta
//! - [`engine`]: Snapshot-based facade integrating all components
//!
//! # Quick Start
//!
//! ```
//! use gomoku_search::{Engine, SearchLimits, RuleSet, Stone};
//! use std::time::Duration;
//!
//! let limits = SearchLimits {
//!     budget: Duration::from_millis(200),
//!     ..SearchLimits::default()
//! };
//! let mut engine = Engine::with_config(15, RuleSet::default(), limits);
//!
//! // The caller owns the game state and hands over a snapshot per move
//! let mut cells = vec![Stone::Empty; 15 * 15];
//! cells[7 * 15 + 7] = Stone::Black;
//!
//! let result = engine.best_move(&cells, Stone::White).unwrap();
//! println!("engine plays ({}, {})", result.pos.row, result.pos.col);
//! ```
//!
//! # Search
//!
//! Each call deepens from depth 4 in steps of two plies inside a
//! wall-clock budget. A depth's answer is used only if that depth ran
//! to completion; a forced win aborts deepening immediately. The
//! transposition table and the opening RNG persist across calls, so
//! feeding consecutive snapshots from one game reuses earlier effort.

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, Pos, RuleSet, Stone, DEFAULT_BOARD_SIZE};
pub use engine::{Engine, EngineError};
pub use search::{SearchLimits, SearchResult, SearchStats, Searcher};
