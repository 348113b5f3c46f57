//! Pattern scores for heuristic evaluation
//!
//! Each named shape maps (run length, blocked ends) to a fixed base
//! value; two of them shift under the rule variants. A blocked four is
//! worth half its normal value under `no_blocked_wins` (it can never
//! become a counted win), and a run longer than five under
//! `exactly_five` scores far below a genuine win.

use crate::board::RuleSet;
use crate::rules::{is_winning_line, LineInfo};

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// A valid winning line, and the search's win sentinel
    pub const WIN: i32 = 10_000;
    /// "Near-decisive" threshold for stopping iterative deepening early
    pub const NEAR_WIN: i32 = 9_000;

    /// Live four: _OOOO_ (two ways to complete)
    pub const LIVE_FOUR: i32 = 4_320;
    /// Blocked four: XOOOO_ (one way to complete)
    pub const BLOCKED_FOUR: i32 = 720;
    /// Blocked four under `no_blocked_wins`: half value, since a second
    /// block kills it outright
    pub const BLOCKED_FOUR_DEVALUED: i32 = 360;

    /// Live three: _OOO_
    pub const LIVE_THREE: i32 = 720;
    /// Blocked three: XOOO_
    pub const BLOCKED_THREE: i32 = 120;

    /// Live two: _OO_
    pub const LIVE_TWO: i32 = 120;
    /// Blocked two: XOO_
    pub const BLOCKED_TWO: i32 = 20;

    /// Live one
    pub const LIVE_ONE: i32 = 20;

    /// Overline (6+) under `exactly_five`: nearly worthless
    pub const OVERLINE: i32 = 50;

    // Shapes walled in on both ends can still matter as blocking
    // material, so they keep token values instead of zero.
    pub const DEAD_FOUR: i32 = 20;
    pub const DEAD_THREE: i32 = 10;
    pub const DEAD_TWO: i32 = 5;
    pub const DEAD_ONE: i32 = 5;
}

/// Score one scanned line under the active rules.
#[must_use]
pub fn score_pattern(line: LineInfo, rules: RuleSet) -> i32 {
    if is_winning_line(line, rules) {
        return PatternScore::WIN;
    }

    if line.run >= 5 {
        // A five-or-more that is_winning_line rejected: either an
        // overline under exactly_five, or a both-ends-blocked run
        // under no_blocked_wins.
        if rules.exactly_five && line.run > 5 {
            return PatternScore::OVERLINE;
        }
        if !rules.exactly_five {
            return PatternScore::WIN;
        }
        return 0;
    }

    match (line.run, line.blocked_ends) {
        (4, 0) => PatternScore::LIVE_FOUR,
        (4, 1) => {
            if rules.no_blocked_wins {
                PatternScore::BLOCKED_FOUR_DEVALUED
            } else {
                PatternScore::BLOCKED_FOUR
            }
        }
        (4, _) => PatternScore::DEAD_FOUR,
        (3, 0) => PatternScore::LIVE_THREE,
        (3, 1) => PatternScore::BLOCKED_THREE,
        (3, _) => PatternScore::DEAD_THREE,
        (2, 0) => PatternScore::LIVE_TWO,
        (2, 1) => PatternScore::BLOCKED_TWO,
        (2, _) => PatternScore::DEAD_TWO,
        (1, 0) => PatternScore::LIVE_ONE,
        (1, _) => PatternScore::DEAD_ONE,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(run: u32, blocked_ends: u8) -> LineInfo {
        LineInfo { run, blocked_ends }
    }

    #[test]
    fn test_score_hierarchy() {
        assert!(PatternScore::WIN > PatternScore::LIVE_FOUR);
        assert!(PatternScore::LIVE_FOUR > PatternScore::LIVE_THREE);
        assert!(PatternScore::LIVE_THREE >= PatternScore::BLOCKED_FOUR);
        assert!(PatternScore::BLOCKED_FOUR > PatternScore::BLOCKED_THREE);
        assert!(PatternScore::LIVE_TWO > PatternScore::BLOCKED_TWO);
        assert!(PatternScore::NEAR_WIN < PatternScore::WIN);
    }

    #[test]
    fn test_five_is_win() {
        let rules = RuleSet::default();
        assert_eq!(score_pattern(line(5, 0), rules), PatternScore::WIN);
        assert_eq!(score_pattern(line(5, 1), rules), PatternScore::WIN);
        assert_eq!(score_pattern(line(6, 0), rules), PatternScore::WIN);
    }

    #[test]
    fn test_overline_under_exactly_five() {
        let rules = RuleSet {
            exactly_five: true,
            ..RuleSet::default()
        };
        assert_eq!(score_pattern(line(5, 0), rules), PatternScore::WIN);
        assert_eq!(score_pattern(line(6, 0), rules), PatternScore::OVERLINE);
        assert_eq!(score_pattern(line(7, 1), rules), PatternScore::OVERLINE);
    }

    #[test]
    fn test_blocked_four_halved_under_no_blocked_wins() {
        let plain = RuleSet::default();
        let no_blocked = RuleSet {
            no_blocked_wins: true,
            ..RuleSet::default()
        };
        assert_eq!(score_pattern(line(4, 1), plain), PatternScore::BLOCKED_FOUR);
        assert_eq!(
            score_pattern(line(4, 1), no_blocked),
            PatternScore::BLOCKED_FOUR_DEVALUED
        );
        // Live four unaffected
        assert_eq!(
            score_pattern(line(4, 0), no_blocked),
            PatternScore::LIVE_FOUR
        );
    }

    #[test]
    fn test_dead_shapes_score_low() {
        let rules = RuleSet::default();
        assert_eq!(score_pattern(line(4, 2), rules), PatternScore::DEAD_FOUR);
        assert_eq!(score_pattern(line(3, 2), rules), PatternScore::DEAD_THREE);
        assert_eq!(score_pattern(line(2, 2), rules), PatternScore::DEAD_TWO);
        assert_eq!(score_pattern(line(1, 2), rules), PatternScore::DEAD_ONE);
    }

    #[test]
    fn test_small_shapes() {
        let rules = RuleSet::default();
        assert_eq!(score_pattern(line(3, 0), rules), PatternScore::LIVE_THREE);
        assert_eq!(score_pattern(line(3, 1), rules), PatternScore::BLOCKED_THREE);
        assert_eq!(score_pattern(line(2, 0), rules), PatternScore::LIVE_TWO);
        assert_eq!(score_pattern(line(1, 0), rules), PatternScore::LIVE_ONE);
    }
}
