//! Line evaluation and win detection under the configured rule set
//!
//! A "line" is the maximal run of same-colored stones through a cell
//! along one axis, together with the state of its two ends. Whether a
//! run of 5+ actually wins depends on the active [`RuleSet`]: the
//! `exactly_five` variant rejects overlines, and `no_blocked_wins`
//! rejects runs walled in on both sides.

use crate::board::{Board, Pos, RuleSet, Stone};

/// The four scan axes: horizontal, vertical, both diagonals.
pub const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Result of scanning one axis through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInfo {
    /// Consecutive same-colored stones through the cell, including it.
    pub run: u32,
    /// Ends that are off-board or held by the opponent (0, 1, or 2).
    pub blocked_ends: u8,
}

/// Scan the axis `dir` through `pos` for `stone`, walking both the
/// direction and its opposite.
///
/// The walk needs no bounds checks: the board's border margin stops a
/// run like an opponent stone would, and counts as a blocked end.
#[must_use]
pub fn scan(board: &Board, pos: Pos, dir: (i32, i32), stone: Stone) -> LineInfo {
    let (dr, dc) = dir;
    let mut run = 1u32;
    let mut blocked_ends = 0u8;

    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;
    while board.slot(r, c).is(stone) {
        run += 1;
        r += dr;
        c += dc;
    }
    if board.slot(r, c).blocks(stone) {
        blocked_ends += 1;
    }

    r = pos.row as i32 - dr;
    c = pos.col as i32 - dc;
    while board.slot(r, c).is(stone) {
        run += 1;
        r -= dr;
        c -= dc;
    }
    if board.slot(r, c).blocks(stone) {
        blocked_ends += 1;
    }

    LineInfo { run, blocked_ends }
}

/// Whether a scanned line counts as a win under `rules`.
#[inline]
#[must_use]
pub fn is_winning_line(line: LineInfo, rules: RuleSet) -> bool {
    if rules.exactly_five {
        if line.run != 5 {
            return false;
        }
    } else if line.run < 5 {
        return false;
    }
    if rules.no_blocked_wins && line.blocked_ends >= 2 {
        return false;
    }
    true
}

/// Whether `stone` has a winning line anywhere on the board.
///
/// Scans every occupied cell along all four axes. A winning line is
/// rediscovered from each of its member cells; only the boolean result
/// is needed, so the first valid hit decides.
#[must_use]
pub fn has_win(board: &Board, stone: Stone, rules: RuleSet) -> bool {
    for row in 0..board.size() {
        for col in 0..board.size() {
            let pos = Pos::new(row, col);
            if board.get(pos) != stone {
                continue;
            }
            for dir in DIRECTIONS {
                if is_winning_line(scan(board, pos, dir, stone), rules) {
                    return true;
                }
            }
        }
    }
    false
}
