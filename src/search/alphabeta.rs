use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::{GameState, Move, Phase, Seat};
use crate::search::apply::apply_move;
use crate::search::eval::{evaluate_state, EvalWeights, Score};
use crate::search::movegen::generate;

pub const DEFAULT_DEPTH: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub depth: u32,
    pub weights: EvalWeights,
    /// Root candidates are searched in parallel when > 1.
    pub threads: usize,
    /// Let Melisandre hand the next ply back to the same side.
    pub melisandre_extra_turn: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { depth: DEFAULT_DEPTH, weights: EvalWeights::default(), threads: 1, melisandre_extra_turn: false }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: Score,
    pub nodes: u64,
}

#[derive(Debug, Default)]
pub struct Searcher {
    params: SearchParams,
    pub(crate) nodes: u64,
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self { Self { params, nodes: 0 } }

    pub fn params(&self) -> &SearchParams { &self.params }

    pub fn nodes(&self) -> u64 { self.nodes }

    /// Searches `state` to the configured depth with `seat` to move in `phase`.
    pub fn search(&mut self, state: &GameState, phase: Phase, seat: Seat) -> SearchResult {
        self.nodes = 0;
        let depth = self.params.depth;
        let (score, best_move) = if self.params.threads > 1 && depth > 1 {
            self.search_parallel(state, phase, seat, depth)
        } else {
            self.alphabeta(state, phase, seat, depth, Score::NEG_INFINITY, Score::INFINITY)
        };
        debug!(
            "search depth={} phase={:?} seat={:?} nodes={} score={:.2} best={}",
            depth,
            phase,
            seat,
            self.nodes,
            score,
            best_move.map_or_else(|| "none".to_string(), |m| m.to_string())
        );
        SearchResult { best_move, score, nodes: self.nodes }
    }

    /// Minimax with alpha-beta pruning. Seat one maximizes, seat two minimizes.
    /// Ties keep the first candidate in generator order.
    pub fn alphabeta(
        &mut self,
        state: &GameState,
        phase: Phase,
        seat: Seat,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
    ) -> (Score, Option<Move>) {
        self.nodes += 1;
        if depth == 0 { return (self.evaluate(state), None); }
        let moves = generate(state, phase);
        if moves.is_empty() { return (self.evaluate(state), None); }

        let maximizing = seat.is_max();
        let mut best_score = if maximizing { Score::NEG_INFINITY } else { Score::INFINITY };
        let mut best_move = None;
        for mv in moves {
            let (child, next_phase, next_seat) = self.play(state, phase, seat, mv);
            let (score, _) = self.alphabeta(&child, next_phase, next_seat, depth - 1, alpha, beta);
            if maximizing {
                if score > best_score { best_score = score; best_move = Some(mv); }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score { best_score = score; best_move = Some(mv); }
                beta = beta.min(best_score);
            }
            if alpha >= beta { break; }
        }
        (best_score, best_move)
    }

    /// Root split: every root candidate gets its own searcher and a full window,
    /// so the reduction sees exact scores and picks the same move as the serial search.
    fn search_parallel(&mut self, state: &GameState, phase: Phase, seat: Seat, depth: u32) -> (Score, Option<Move>) {
        self.nodes += 1;
        let moves = generate(state, phase);
        if moves.is_empty() { return (self.evaluate(state), None); }

        let params = self.params;
        let results: Vec<(Move, Score, u64)> = moves
            .par_iter()
            .map(|&mv| {
                let mut w = Searcher::new(params);
                let (child, next_phase, next_seat) = w.play(state, phase, seat, mv);
                let (score, _) = w.alphabeta(&child, next_phase, next_seat, depth - 1, Score::NEG_INFINITY, Score::INFINITY);
                (mv, score, w.nodes)
            })
            .collect();

        let maximizing = seat.is_max();
        let mut best: Option<(Move, Score)> = None;
        for (mv, score, nodes) in results {
            trace!("root {mv} -> {score:.2} ({nodes} nodes)");
            self.nodes += nodes;
            let better = best.map_or(true, |(_, b)| if maximizing { score > b } else { score < b });
            if better { best = Some((mv, score)); }
        }
        match best {
            Some((mv, score)) => (score, Some(mv)),
            None => (self.evaluate(state), None),
        }
    }

    /// Clones the state, applies `mv` and works out who moves next and in which phase.
    pub fn play(&self, state: &GameState, phase: Phase, seat: Seat, mv: Move) -> (GameState, Phase, Seat) {
        let mut child = state.clone();
        let captured = apply_move(&mut child, seat, mv);
        match phase {
            Phase::ChooseCompanion => {
                let next = if self.params.melisandre_extra_turn && mv == Move::Melisandre { seat } else { seat.opponent() };
                (child, Phase::Normal, next)
            }
            Phase::Normal => {
                let exhausted = captured.map_or(false, |house| child.board.count_house(house) == 0);
                let next_phase = if exhausted && !child.companions.is_empty() { Phase::ChooseCompanion } else { Phase::Normal };
                (child, next_phase, seat.opponent())
            }
        }
    }

    fn evaluate(&self, state: &GameState) -> Score { evaluate_state(state, &self.params.weights) }
}

/// Engine entry point: the move `seat` should play in `phase`, or `None` if it has none.
pub fn get_move(state: &GameState, seat: Seat, phase: Phase, params: &SearchParams) -> Option<Move> {
    Searcher::new(*params).search(state, phase, seat).best_move
}
