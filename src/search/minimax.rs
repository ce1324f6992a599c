//! Fixed-depth minimax. Light maximizes the white-positive score, Dark
//! minimizes it.

use std::sync::Arc;

use tracing::debug;

use crate::game_state::{chess_types::Color, game_state::GameState};
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::terminal_score;
use crate::search::search_context::{SearchContext, SearchOutcome};
use crate::search::threading::SharedSearchState;

/// Scores every root move `depth` plies deep and returns the best-scoring
/// set. `best_score` is white-positive. A depth of zero is treated as one.
pub fn minimax_search(
    game_state: &mut GameState,
    root_moves: &[Move],
    depth: u8,
    shared: Option<Arc<SharedSearchState>>,
) -> SearchOutcome {
    let depth = depth.max(1);
    let maximize = game_state.side_to_move == Color::Light;
    let mut ctx = SearchContext::new(depth, shared);

    for mv in root_moves {
        make_move(game_state, mv);
        let score = minimax(game_state, depth - 1, &mut ctx);
        unmake_move(game_state);
        if ctx.aborted() {
            break;
        }
        ctx.record_root(mv, score, maximize);
    }

    let outcome = ctx.into_outcome();
    debug!(
        depth,
        nodes = outcome.nodes,
        best = ?outcome.best_score,
        candidates = outcome.candidates.len(),
        "minimax search finished"
    );
    outcome
}

fn minimax(game_state: &mut GameState, depth: u8, ctx: &mut SearchContext) -> i32 {
    if !ctx.enter_node() {
        return 0;
    }

    let moves = legal_moves(game_state);
    if depth == 0 || moves.is_empty() || game_state.fifty_move_draw {
        return terminal_score(game_state);
    }

    let maximize = game_state.side_to_move == Color::Light;
    let mut best = if maximize { i32::MIN } else { i32::MAX };
    for mv in &moves {
        make_move(game_state, mv);
        let score = minimax(game_state, depth - 1, ctx);
        unmake_move(game_state);
        if ctx.aborted() {
            return 0;
        }
        best = if maximize { best.max(score) } else { best.min(score) };
    }
    best
}
