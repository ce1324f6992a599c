//! Negamax, with and without alpha-beta pruning.
//!
//! Scores are from the point of view of the side to move at each node. Both
//! variants return the same root score and the same root candidate set for a
//! given depth; pruning only reduces the node count.

use std::sync::Arc;

use tracing::debug;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::terminal_score;
use crate::search::search_context::{SearchContext, SearchOutcome, SCORE_INFINITY};
use crate::search::threading::SharedSearchState;

/// Plain negamax over `root_moves`. `best_score` is from the root mover's
/// point of view. A depth of zero is treated as one.
pub fn negamax_search(
    game_state: &mut GameState,
    root_moves: &[Move],
    depth: u8,
    shared: Option<Arc<SharedSearchState>>,
) -> SearchOutcome {
    let depth = depth.max(1);
    let mut ctx = SearchContext::new(depth, shared);

    for mv in root_moves {
        make_move(game_state, mv);
        let score = -negamax(game_state, depth - 1, &mut ctx);
        unmake_move(game_state);
        if ctx.aborted() {
            break;
        }
        ctx.record_root(mv, score, true);
    }

    let outcome = ctx.into_outcome();
    debug!(
        depth,
        nodes = outcome.nodes,
        best = ?outcome.best_score,
        candidates = outcome.candidates.len(),
        "negamax search finished"
    );
    outcome
}

/// Negamax with an `(alpha, beta)` window.
///
/// At the root, alpha trails the best score found so far by one point, so a
/// later move that only ties is still searched to its exact score and joins
/// the candidate set.
pub fn negamax_alpha_beta_search(
    game_state: &mut GameState,
    root_moves: &[Move],
    depth: u8,
    shared: Option<Arc<SharedSearchState>>,
) -> SearchOutcome {
    let depth = depth.max(1);
    let mut ctx = SearchContext::new(depth, shared);
    let beta = SCORE_INFINITY;

    for mv in root_moves {
        let alpha = ctx.best_score().map_or(-SCORE_INFINITY, |best| best - 1);
        make_move(game_state, mv);
        let score = -negamax_alpha_beta(game_state, depth - 1, -beta, -alpha, &mut ctx);
        unmake_move(game_state);
        if ctx.aborted() {
            break;
        }
        // A fail-low score is an upper bound below the best; it never ties.
        ctx.record_root(mv, score, true);
    }

    let outcome = ctx.into_outcome();
    debug!(
        depth,
        nodes = outcome.nodes,
        best = ?outcome.best_score,
        candidates = outcome.candidates.len(),
        "alpha-beta search finished"
    );
    outcome
}

/// Leaf value for the side to move. Multiplying the white-positive terminal
/// score by the mover's sign already turns a mate against the mover into
/// `-CHECKMATE_SCORE`.
#[inline]
fn leaf_score(game_state: &GameState) -> i32 {
    game_state.side_to_move.sign() * terminal_score(game_state)
}

fn negamax(game_state: &mut GameState, depth: u8, ctx: &mut SearchContext) -> i32 {
    if !ctx.enter_node() {
        return 0;
    }

    let moves = legal_moves(game_state);
    if depth == 0 || moves.is_empty() || game_state.fifty_move_draw {
        return leaf_score(game_state);
    }

    let mut best = -SCORE_INFINITY;
    for mv in &moves {
        make_move(game_state, mv);
        let score = -negamax(game_state, depth - 1, ctx);
        unmake_move(game_state);
        if ctx.aborted() {
            return 0;
        }
        best = best.max(score);
    }
    best
}

fn negamax_alpha_beta(
    game_state: &mut GameState,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ctx: &mut SearchContext,
) -> i32 {
    if !ctx.enter_node() {
        return 0;
    }

    let moves = legal_moves(game_state);
    if depth == 0 || moves.is_empty() || game_state.fifty_move_draw {
        return leaf_score(game_state);
    }

    let mut best = -SCORE_INFINITY;
    for mv in &moves {
        make_move(game_state, mv);
        let score = -negamax_alpha_beta(game_state, depth - 1, -beta, -alpha, ctx);
        unmake_move(game_state);
        if ctx.aborted() {
            return 0;
        }
        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }
    best
}
