//! Search: candidate generation, transposition table, alpha-beta

pub mod alphabeta;
pub mod movegen;
pub mod tt;

// Re-exports
pub use alphabeta::{SearchLimits, SearchResult, SearchStats, Searcher};
pub use movegen::{generate, MAX_MOVES};
pub use tt::{Bound, TranspositionTable};
