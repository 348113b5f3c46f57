//! Probe-based move and position evaluation
//!
//! The heuristics never make real moves: a candidate empty cell is
//! probed via [`Board::probe`], which guarantees the cell is restored
//! when the guard drops, so evaluation leaves no net mutation.

use crate::board::{Board, Pos, RuleSet, Stone};
use crate::eval::patterns::{score_pattern, PatternScore};
use crate::rules::{has_win, scan, DIRECTIONS};

/// Heuristic value of placing `stone` at the empty cell `pos`: the sum
/// of the pattern scores of the four lines the stone would join.
#[must_use]
pub fn evaluate_move(board: &mut Board, pos: Pos, stone: Stone, rules: RuleSet) -> i32 {
    let probe = board.probe(pos, stone);
    DIRECTIONS
        .iter()
        .map(|&dir| score_pattern(scan(&probe, pos, dir, stone), rules))
        .sum()
}

/// Summed move values over the current candidate cells for one side.
fn candidate_total(board: &mut Board, stone: Stone, rules: RuleSet) -> i32 {
    let mut total = 0;
    for pos in board.candidate_positions() {
        let value = evaluate_move(board, pos, stone, rules);
        if value > 0 {
            total += value;
        }
    }
    total
}

/// Static evaluation from the perspective of `to_move`.
///
/// If the opponent already holds a valid winning line the position is
/// lost and scores the negative win sentinel. Otherwise the score is
/// the candidate-cell potential of the side to move, weighted 1.2x for
/// tempo, minus the opponent's.
#[must_use]
pub fn evaluate_position(board: &mut Board, to_move: Stone, rules: RuleSet) -> i32 {
    if has_win(board, to_move.opponent(), rules) {
        return -PatternScore::WIN;
    }

    let own = candidate_total(board, to_move, rules);
    let opp = candidate_total(board, to_move.opponent(), rules);
    own + own / 5 - opp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_move_leaves_board_unchanged() {
        let mut board = Board::new(15);
        board.place(Pos::new(7, 7), Stone::Black).unwrap();
        let key = board.key();

        let value = evaluate_move(&mut board, Pos::new(7, 8), Stone::Black, RuleSet::default());
        assert!(value > 0);
        assert_eq!(board.get(Pos::new(7, 8)), Stone::Empty);
        assert_eq!(board.key(), key);
        assert_eq!(board.stone_count(), 1);
    }

    #[test]
    fn test_completing_five_scores_win() {
        let mut board = Board::new(15);
        for col in 3..7 {
            board.place(Pos::new(7, col), Stone::Black).unwrap();
        }
        let value = evaluate_move(&mut board, Pos::new(7, 7), Stone::Black, RuleSet::default());
        assert!(value >= PatternScore::WIN);
    }

    #[test]
    fn test_extension_beats_isolated_move() {
        let mut board = Board::new(15);
        board.place(Pos::new(7, 7), Stone::Black).unwrap();
        board.place(Pos::new(7, 8), Stone::Black).unwrap();
        let rules = RuleSet::default();

        let extend = evaluate_move(&mut board, Pos::new(7, 9), Stone::Black, rules);
        let lonely = evaluate_move(&mut board, Pos::new(2, 2), Stone::Black, rules);
        assert!(extend > lonely);
    }

    #[test]
    fn test_lost_position_scores_sentinel() {
        let mut board = Board::new(15);
        for col in 3..8 {
            board.place(Pos::new(7, col), Stone::Black).unwrap();
        }
        let score = evaluate_position(&mut board, Stone::White, RuleSet::default());
        assert_eq!(score, -PatternScore::WIN);
    }

    #[test]
    fn test_tempo_favors_side_to_move() {
        // Mirror-symmetric position: the only asymmetry is the 1.2x
        // tempo multiplier, so whoever is to move is ahead.
        let mut board = Board::new(15);
        board.place(Pos::new(7, 6), Stone::Black).unwrap();
        board.place(Pos::new(7, 8), Stone::White).unwrap();
        let rules = RuleSet::default();

        assert!(evaluate_position(&mut board, Stone::Black, rules) > 0);
        assert!(evaluate_position(&mut board, Stone::White, rules) > 0);
    }

    #[test]
    fn test_rule_variant_changes_move_value() {
        let mut board = Board::new(15);
        // Black four with one end blocked: X B B B B _
        board.place(Pos::new(7, 2), Stone::White).unwrap();
        for col in 3..6 {
            board.place(Pos::new(7, col), Stone::Black).unwrap();
        }
        let plain = evaluate_move(&mut board, Pos::new(7, 6), Stone::Black, RuleSet::default());
        let devalued = evaluate_move(
            &mut board,
            Pos::new(7, 6),
            Stone::Black,
            RuleSet {
                no_blocked_wins: true,
                ..RuleSet::default()
            },
        );
        assert!(devalued < plain);
    }
}
