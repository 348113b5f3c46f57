//! Iterative-deepening negamax alpha-beta search
//!
//! The controller deepens in steps of two plies (each completed
//! iteration is a full ply-pair under the negamax sign convention)
//! inside a wall-clock budget, keeping the best move of the deepest
//! fully completed depth. Time control is cooperative: the recursion
//! polls the clock at a fixed node interval and unwinds early once the
//! budget is spent; it always leaves the board exactly as it found it.

use std::time::{Duration, Instant};

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::zobrist::DEFAULT_SEED;
use crate::board::{Board, Pos, RuleSet, Stone};
use crate::eval::{evaluate_position, PatternScore};
use crate::rules::has_win;
use crate::search::movegen::{generate, MAX_MOVES};
use crate::search::tt::{Bound, TranspositionTable};

/// Clock-poll interval, in nodes.
const TIME_CHECK_NODES: u64 = 1000;

/// Bounded retries for the randomized opening sampler.
const OPENING_ATTEMPTS: usize = 100;

/// Stone counts handled by the opening special cases instead of search.
const OPENING_STONES: usize = 2;

/// Fallback sentinel, just below the worst reachable value.
const NO_VALUE: i32 = -(PatternScore::WIN + 1);

/// Search tuning knobs and resource limits.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    /// First iterative-deepening depth
    pub min_depth: i32,
    /// Last iterative-deepening depth; also bounds the call stack
    pub max_depth: i32,
    /// Candidate breadth cap per node
    pub max_moves: usize,
    /// Wall-clock budget for one `search` call
    pub budget: Duration,
    /// Seed for the per-instance RNG (opening randomization)
    pub seed: u64,
    /// Transposition table size in megabytes
    pub tt_size_mb: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            min_depth: 4,
            max_depth: 20,
            max_moves: MAX_MOVES,
            budget: Duration::from_millis(5000),
            seed: DEFAULT_SEED,
            tt_size_mb: 16,
        }
    }
}

/// Per-call search counters, reset at the start of every `search`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Nodes visited by the recursion
    pub nodes: u64,
    /// Set once the wall-clock budget is exhausted
    pub stopped: bool,
}

/// Outcome of one `search` call. Always carries a legal move.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// The recommended move, in board coordinates
    pub pos: Pos,
    /// Value of the move from the searcher's perspective
    pub score: i32,
    /// Deepest fully completed iteration (0 if none completed)
    pub depth: i32,
    /// Nodes visited
    pub nodes: u64,
    /// Wall-clock time spent, in milliseconds
    pub time_ms: u64,
}

/// Single-threaded move searcher.
///
/// Owns the transposition table and the opening RNG; the board is
/// borrowed per call and returned in the state it came in (every
/// exploratory place is paired with an undo).
pub struct Searcher {
    rules: RuleSet,
    limits: SearchLimits,
    tt: TranspositionTable,
    rng: SmallRng,
    stats: SearchStats,
    start: Instant,
}

impl Searcher {
    /// Searcher with default limits.
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        Self::with_limits(rules, SearchLimits::default())
    }

    /// Searcher with custom limits.
    #[must_use]
    pub fn with_limits(rules: RuleSet, limits: SearchLimits) -> Self {
        Self {
            rules,
            limits,
            tt: TranspositionTable::new(limits.tt_size_mb),
            rng: SmallRng::seed_from_u64(limits.seed),
            stats: SearchStats::default(),
            start: Instant::now(),
        }
    }

    #[inline]
    #[must_use]
    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Counters from the most recent `search` call.
    #[inline]
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Find the best move for `to_move` on the current board.
    ///
    /// The board is mutated during exploration but every place is
    /// undone before returning; the chosen move is not applied. Always
    /// returns a legal, currently empty cell as long as one exists,
    /// even under a zero or already-expired budget.
    pub fn search(&mut self, board: &mut Board, to_move: Stone) -> SearchResult {
        debug_assert_ne!(to_move, Stone::Empty);
        self.stats = SearchStats::default();
        self.start = Instant::now();

        // First stone always goes to the center
        if board.is_board_empty() {
            return self.result(board.center(), 0, 0);
        }

        // Second and third stones: randomized near-center placement,
        // skipping the search entirely
        if board.stone_count() <= OPENING_STONES {
            if let Some(pos) = self.opening_move(board) {
                debug!("opening move at ({}, {})", pos.row, pos.col);
                return self.result(pos, 0, 0);
            }
        }

        let moves = generate(board, to_move, self.limits.max_moves, self.rules);
        if moves.is_empty() {
            let score = evaluate_position(board, to_move, self.rules);
            return self.result(board.center(), score, 0);
        }

        // Top-ranked candidate is the fallback if no depth completes
        let mut best = moves[0];
        let mut best_score = 0;
        let mut completed = 0;

        let mut depth = self.limits.min_depth;
        while depth <= self.limits.max_depth {
            let mut depth_best: Option<Pos> = None;
            let mut depth_value = NO_VALUE;

            for &mv in &moves {
                if self.stats.stopped {
                    break;
                }
                if board.place(mv, to_move).is_err() {
                    continue;
                }
                let value = -self.alpha_beta(
                    board,
                    to_move.opponent(),
                    depth - 1,
                    -PatternScore::WIN,
                    PatternScore::WIN,
                );
                board.undo();

                // A value computed after the stop flag went up is
                // untrustworthy; discard it
                if self.stats.stopped {
                    break;
                }
                if value > depth_value {
                    depth_value = value;
                    depth_best = Some(mv);
                }
                if depth_value >= PatternScore::WIN {
                    break;
                }
            }

            if depth_value >= PatternScore::WIN {
                // Forced win: take it even though this depth was cut short
                if let Some(mv) = depth_best {
                    best = mv;
                    best_score = depth_value;
                    completed = depth;
                }
                debug!("forced win found at depth {depth}");
                break;
            }

            if self.stats.stopped {
                // Keep the best move of the last depth that fully completed
                break;
            }

            if let Some(mv) = depth_best {
                best = mv;
                best_score = depth_value;
            }
            completed = depth;
            debug!(
                "depth {} done: best ({}, {}) score {} nodes {}",
                depth, best.row, best.col, best_score, self.stats.nodes
            );

            if best_score >= PatternScore::NEAR_WIN {
                break;
            }
            // Heuristic guard: don't start a depth that can't finish
            if self.start.elapsed() * 3 > self.limits.budget {
                break;
            }
            depth += 2;
        }

        self.result(best, best_score, completed)
    }

    fn result(&self, pos: Pos, score: i32, depth: i32) -> SearchResult {
        SearchResult {
            pos,
            score,
            depth,
            nodes: self.stats.nodes,
            time_ms: self.start.elapsed().as_millis() as u64,
        }
    }

    /// Randomized near-center placement for the first few replies.
    ///
    /// Bounded sampling: jitter of one cell around the center, plus a
    /// shared diagonal offset of up to two on the third stone so early
    /// games don't all collapse into the same symmetric shapes. Falls
    /// back to the normal search path if every attempt lands on an
    /// occupied or out-of-board cell.
    fn opening_move(&mut self, board: &Board) -> Option<Pos> {
        let size = board.size() as i32;
        let center = size / 2;
        let spread = board.stone_count() == OPENING_STONES;

        for _ in 0..OPENING_ATTEMPTS {
            let offset: i32 = if spread { self.rng.gen_range(-2..=2) } else { 0 };
            let row = center + self.rng.gen_range(-1..=1) + offset;
            let col = center + self.rng.gen_range(-1..=1) + offset;
            if row < 0 || col < 0 || row >= size || col >= size {
                continue;
            }
            let pos = Pos::new(row as usize, col as usize);
            if board.is_empty(pos) {
                return Some(pos);
            }
        }
        None
    }

    /// Key for transposition-table addressing: the board's occupancy
    /// key with the side-to-move constant folded in for White.
    #[inline]
    fn position_key(&self, board: &Board, to_move: Stone) -> u64 {
        match to_move {
            Stone::White => board.key() ^ board.side_key(),
            _ => board.key(),
        }
    }

    /// Recursive negamax with alpha-beta pruning.
    ///
    /// Returns the value of the position from `to_move`'s perspective,
    /// or the running `alpha` when the time budget expires mid-node
    /// (callers discard values computed after the stop flag is set).
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        to_move: Stone,
        depth: i32,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        // Cooperative time control: poll the clock at a fixed node
        // interval, never preemptively
        if self.stats.nodes % TIME_CHECK_NODES == 0 && self.start.elapsed() >= self.limits.budget {
            self.stats.stopped = true;
            return alpha;
        }
        if self.stats.stopped {
            return alpha;
        }

        if has_win(board, to_move.opponent(), self.rules) {
            return -PatternScore::WIN;
        }
        if depth <= 0 {
            return evaluate_position(board, to_move, self.rules);
        }

        let key = self.position_key(board, to_move);
        if let Some(score) = self.tt.probe(key, depth, alpha, beta) {
            return score;
        }

        let mut moves = generate(board, to_move, self.limits.max_moves, self.rules);
        if moves.is_empty() {
            return evaluate_position(board, to_move, self.rules);
        }

        // Try the table move first; it caused a cutoff here before
        if let Some(tt_move) = self.tt.best_move(key) {
            if let Some(i) = moves.iter().position(|&m| m == tt_move) {
                moves[..=i].rotate_right(1);
            }
        }

        let original_alpha = alpha;
        let mut best_value = NO_VALUE;
        let mut best_move: Option<Pos> = None;

        for &mv in &moves {
            if self.stats.stopped {
                break;
            }
            if board.place(mv, to_move).is_err() {
                continue;
            }
            let value = -self.alpha_beta(board, to_move.opponent(), depth - 1, -beta, -alpha);
            board.undo();

            if self.stats.stopped {
                break;
            }
            if value > best_value {
                best_value = value;
                best_move = Some(mv);
            }
            if value >= beta {
                // Fail high: remaining siblings can't matter
                self.tt.store(key, depth, value, Bound::Lower, best_move);
                return value;
            }
            if value > alpha {
                alpha = value;
            }
        }

        if !self.stats.stopped {
            let bound = if best_value <= original_alpha {
                Bound::Upper
            } else {
                Bound::Exact
            };
            self.tt.store(key, depth, best_value, bound, best_move);
        }

        best_value
    }
}
