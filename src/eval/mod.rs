//! Position evaluation and heuristics

pub mod heuristic;
pub mod patterns;

// Re-exports
pub use heuristic::{evaluate_move, evaluate_position};
pub use patterns::{score_pattern, PatternScore};
