//! Game rules: line scanning and rule-aware win detection

pub mod win;

// Re-exports
pub use win::{has_win, is_winning_line, scan, LineInfo, DIRECTIONS};
