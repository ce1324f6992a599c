use std::thread;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::Move;

/// Leaf statistics. Everything but `nodes` describes the move that reached
/// the leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Counts leaf positions `depth` plies below `game_state`, playing moves in
/// place. The board is restored on return.
pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    perft_recurse(game_state, depth, &mut counts);
    counts
}

/// Same counts as [`perft`], with one thread per root move, each working on
/// its own copy of the board.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut root = game_state.clone();
    let root_moves = legal_moves(&mut root);

    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .into_iter()
            .map(|mv| {
                let mut local_state = root.clone();
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    visit(&mut local_state, &mv, depth, &mut local);
                    local
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            let local = handle.join().map_err(|_| ChessError::PerftWorkerPanicked)?;
            total.merge(local);
        }
        Ok(total)
    })
}

fn perft_recurse(game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    for mv in legal_moves(game_state) {
        visit(game_state, &mv, depth, counts);
    }
}

/// Plays `mv`, which sits `depth` plies above the leaves, and accounts for it.
fn visit(game_state: &mut GameState, mv: &Move, depth: u8, counts: &mut PerftCounts) {
    make_move(game_state, mv);
    if depth == 1 {
        counts.nodes += 1;
        if mv.is_capture() {
            counts.captures += 1;
        }
        if mv.is_en_passant {
            counts.en_passant += 1;
        }
        if mv.is_castling {
            counts.castles += 1;
        }
        if mv.is_promotion {
            counts.promotions += 1;
        }
        if in_check(game_state) {
            counts.checks += 1;
            if legal_moves(game_state).is_empty() {
                counts.checkmates += 1;
            }
        }
    } else {
        perft_recurse(game_state, depth - 1, counts);
    }
    unmake_move(game_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{CastleRights, Color};
    use crate::game_state::game_state::test_support::position_from_rows;

    fn kiwipete() -> GameState {
        position_from_rows(
            [
                "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p",
                "PPPBBPPP", "R...K..R",
            ],
            Color::Light,
            CastleRights::ALL,
        )
    }

    fn endgame_position() -> GameState {
        position_from_rows(
            [
                "........", "..p.....", "...p....", "KP.....r", ".R...p.k", "........",
                "....P.P.", "........",
            ],
            Color::Light,
            CastleRights::NONE,
        )
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let mut game = GameState::new_empty();
        assert_eq!(
            perft(&mut game, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn startpos_node_counts() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert_eq!(perft(&mut game, 1).nodes, 20);
        assert_eq!(perft(&mut game, 2).nodes, 400);

        let depth3 = perft(&mut game, 3);
        assert_eq!(depth3.nodes, 8_902);
        assert_eq!(depth3.captures, 34);
        assert_eq!(depth3.checks, 12);
        assert_eq!(depth3.checkmates, 0);

        assert_eq!(game, before);
    }

    #[test]
    fn kiwipete_exercises_castling_and_captures() {
        let mut game = kiwipete();
        let depth1 = perft(&mut game, 1);
        assert_eq!(depth1.nodes, 48);
        assert_eq!(depth1.captures, 8);
        assert_eq!(depth1.castles, 2);

        let depth2 = perft(&mut game, 2);
        assert_eq!(depth2.nodes, 2_039);
        assert_eq!(depth2.captures, 351);
        assert_eq!(depth2.en_passant, 1);
        assert_eq!(depth2.castles, 91);
        assert_eq!(depth2.checks, 3);
    }

    #[test]
    fn endgame_position_exercises_en_passant_and_checks() {
        let mut game = endgame_position();
        assert_eq!(perft(&mut game, 1).nodes, 14);
        assert_eq!(perft(&mut game, 2).nodes, 191);

        let depth3 = perft(&mut game, 3);
        assert_eq!(depth3.nodes, 2_812);
        assert_eq!(depth3.captures, 209);
        assert_eq!(depth3.en_passant, 2);
        assert_eq!(depth3.checks, 267);
    }

    #[test]
    fn threaded_perft_matches_single_thread() {
        let mut game = kiwipete();
        let single = perft(&mut game, 2);
        let threaded = perft_multi_threaded(&game, 2).expect("perft workers should finish");
        assert_eq!(single, threaded);
    }
}
