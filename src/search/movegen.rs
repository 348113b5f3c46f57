//! Candidate move generation
//!
//! The board's candidate flags (empty cells within radius 2 of a stone)
//! bound the cells worth considering; this module ranks them and keeps
//! only the best few, which caps the branching factor of the search.

use crate::board::{Board, Pos, RuleSet, Stone};
use crate::eval::evaluate_move;

/// Breadth cap: at most this many candidates are returned.
pub const MAX_MOVES: usize = 20;

/// Weight applied to the blocking component of a candidate's score.
/// Denying the opponent a shape is worth slightly more than building
/// one, which biases move ordering toward defense.
const BLOCK_NUMER: i32 = 11;
const BLOCK_DENOM: i32 = 10;

/// Generate ranked candidate moves for `to_move`.
///
/// Every empty, candidate-flagged cell is scored as its offensive value
/// plus 1.1x the value the opponent would get from the same cell; the
/// list is sorted by that combined score and truncated to `max_moves`.
/// An empty board yields exactly the center.
#[must_use]
pub fn generate(board: &mut Board, to_move: Stone, max_moves: usize, rules: RuleSet) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![board.center()];
    }

    let mut scored: Vec<(Pos, i32)> = Vec::with_capacity(64);
    for pos in board.candidate_positions() {
        let own = evaluate_move(board, pos, to_move, rules);
        let block = evaluate_move(board, pos, to_move.opponent(), rules);
        let value = own + block * BLOCK_NUMER / BLOCK_DENOM;
        if value > 0 {
            scored.push((pos, value));
        }
    }

    scored.sort_unstable_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(max_moves);
    scored.into_iter().map(|(pos, _)| pos).collect()
}
