//! Game controller tying the rules engine to human input and engine workers.
//!
//! A `GameSession` owns the board and the current legal-move set. Every state
//! change goes through it: it validates human moves with the two-phase
//! resolve, runs engine turns on a `SearchWorker`, cancels a pending search
//! before undo, redo, or reset, and annotates the last played move for
//! notation.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::engines::engine_config::EngineConfig;
use crate::engines::engine_select::build_engine;
use crate::engines::engine_trait::engine_rng;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move, redo_move, undo_move};
use crate::move_generation::legal_move_checks::in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::{Move, ProvisionalMove};
use crate::search::threading::{SearchReply, SearchWorker};
use crate::utils::move_log::MoveLog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Engine(EngineConfig),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
}

pub struct GameSession {
    state: GameState,
    legal: Vec<Move>,
    players: [PlayerKind; 2],
    pending: Option<SearchWorker>,
    move_log: Option<MoveLog>,
    fallback_rng: StdRng,
    // Where the score sheet starts numbering.
    first_side: Color,
    first_fullmove: u16,
}

impl GameSession {
    /// New game from the standard starting position.
    pub fn new(light: PlayerKind, dark: PlayerKind) -> Self {
        Self::from_state(GameState::new_game(), light, dark)
    }

    /// Session continuing from an arbitrary position.
    pub fn from_state(mut state: GameState, light: PlayerKind, dark: PlayerKind) -> Self {
        state.refresh_fifty_move_flag();
        let mut session = Self {
            first_side: state.side_to_move,
            first_fullmove: state.fullmove_number,
            state,
            legal: Vec::new(),
            players: [light, dark],
            pending: None,
            move_log: None,
            fallback_rng: engine_rng(None),
        };
        session.refresh();
        session
    }

    pub fn with_move_log(mut self, log: MoveLog) -> Self {
        self.move_log = Some(log);
        self
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal
    }

    #[inline]
    pub fn player(&self, color: Color) -> PlayerKind {
        self.players[color.index()]
    }

    #[inline]
    pub fn is_engine_turn(&self) -> bool {
        matches!(self.player(self.state.side_to_move), PlayerKind::Engine(_))
    }

    /// True while an engine search is running.
    #[inline]
    pub fn is_thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// Nodes the pending search has visited so far.
    pub fn search_nodes(&self) -> Option<u64> {
        self.pending.as_ref().map(SearchWorker::nodes)
    }

    pub fn outcome(&self) -> GameOutcome {
        if self.state.checkmate {
            GameOutcome::Checkmate {
                winner: self.state.side_to_move.opposite(),
            }
        } else if self.state.stalemate {
            GameOutcome::Stalemate
        } else if self.state.fifty_move_draw {
            GameOutcome::FiftyMoveRule
        } else {
            GameOutcome::InProgress
        }
    }

    /// Plays a move given by its squares. `promotion` picks the promotion
    /// piece and is ignored for other moves; it defaults to a queen.
    pub fn play_human_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> ChessResult<Move> {
        if self.player(self.state.side_to_move) != PlayerKind::Human {
            return Err(ChessError::NotHumanTurn);
        }
        self.ensure_in_progress()?;

        let mut mv = ProvisionalMove::new(from, to).resolve(&self.legal)?;
        if let (true, Some(kind)) = (mv.is_promotion, promotion) {
            mv = mv.with_promotion_piece(kind)?;
        }
        Ok(self.commit(&mv))
    }

    /// Starts the engine for the side to move on a copy of the board.
    pub fn request_engine_move(&mut self) -> ChessResult<()> {
        if self.pending.is_some() {
            return Err(ChessError::SearchInProgress);
        }
        let PlayerKind::Engine(mut config) = self.player(self.state.side_to_move) else {
            return Err(ChessError::NotEngineTurn);
        };
        self.ensure_in_progress()?;

        // Vary seeded tie-breaks from ply to ply while staying reproducible.
        let ply = self.state.move_history.len() as u64;
        config.seed = config.seed.map(|seed| seed.wrapping_add(ply));

        let worker =
            SearchWorker::spawn(build_engine(&config), self.state.clone(), self.legal.clone())?;
        info!(
            side = %self.state.side_to_move,
            strategy = %config.strategy,
            depth = config.depth,
            "engine thinking"
        );
        self.pending = Some(worker);
        Ok(())
    }

    /// Non-blocking: applies the engine's move if it has arrived. Returns
    /// `Ok(None)` while the search runs or when none was requested.
    pub fn poll_engine(&mut self) -> ChessResult<Option<Move>> {
        let Some(worker) = &self.pending else {
            return Ok(None);
        };
        let polled = worker.poll();
        let reply = match polled {
            Ok(Some(reply)) => reply,
            Ok(None) => return Ok(None),
            Err(err) => {
                self.pending = None;
                return Err(err);
            }
        };
        let engine_name = self.take_pending_name();
        self.apply_reply(&engine_name, reply).map(Some)
    }

    /// Blocks until the pending search replies and applies its move.
    pub fn wait_engine(&mut self) -> ChessResult<Move> {
        let Some(worker) = self.pending.take() else {
            return Err(ChessError::NotEngineTurn);
        };
        let reply = worker.wait()?;
        let engine_name = worker.engine_name().to_owned();
        self.apply_reply(&engine_name, reply)
    }

    pub fn undo(&mut self) -> Option<Move> {
        self.cancel_search();
        let mv = undo_move(&mut self.state)?;
        self.refresh();
        info!(san = %mv.notation(), "move undone");
        Some(mv)
    }

    pub fn redo(&mut self) -> Option<Move> {
        self.cancel_search();
        redo_move(&mut self.state)?;
        self.refresh();
        let mv = self.state.move_history.last().cloned()?;
        info!(san = %mv.notation(), "move redone");
        Some(mv)
    }

    /// Back to the starting position; both players are kept.
    pub fn reset(&mut self) {
        self.cancel_search();
        self.state = GameState::new_game();
        self.first_side = Color::Light;
        self.first_fullmove = 1;
        self.refresh();
        info!("game reset");
    }

    /// Moves so far as `1. e4 e5 2. Nf3 ...`, or `12... Kd8 13. Ra2` when
    /// the session began with Black to move.
    pub fn score_sheet(&self) -> String {
        let mut entries = Vec::with_capacity(self.state.move_history.len());
        let mut number = self.first_fullmove;
        let mut side = self.first_side;
        for (idx, mv) in self.state.move_history.iter().enumerate() {
            match side {
                Color::Light => entries.push(format!("{number}. {}", mv.notation())),
                Color::Dark if idx == 0 => entries.push(format!("{number}... {}", mv.notation())),
                Color::Dark => entries.push(mv.notation()),
            }
            if side == Color::Dark {
                number += 1;
            }
            side = side.opposite();
        }
        entries.join(" ")
    }

    fn ensure_in_progress(&self) -> ChessResult<()> {
        match self.outcome() {
            GameOutcome::InProgress => Ok(()),
            outcome => Err(ChessError::GameOver(outcome)),
        }
    }

    fn take_pending_name(&mut self) -> String {
        self.pending
            .take()
            .map(|worker| worker.engine_name().to_owned())
            .unwrap_or_default()
    }

    fn cancel_search(&mut self) {
        if let Some(worker) = self.pending.take() {
            worker.cancel();
        }
    }

    fn apply_reply(&mut self, engine_name: &str, reply: SearchReply) -> ChessResult<Move> {
        let (mv, score, nodes) = match reply {
            SearchReply::Move {
                chosen,
                score,
                nodes,
            } if self.legal.contains(&chosen) => (chosen, score, nodes),
            SearchReply::Move { chosen, .. } => {
                warn!(
                    engine = engine_name,
                    mv = %chosen.long_algebraic(),
                    "engine move not legal here, playing a random move"
                );
                (self.fallback_move()?, None, 0)
            }
            SearchReply::NoLegalMove => {
                warn!(engine = engine_name, "engine reported no legal move, playing a random move");
                (self.fallback_move()?, None, 0)
            }
        };

        let played = self.commit(&mv);
        debug!(engine = engine_name, ?score, nodes, "engine move applied");
        if let Some(log) = &mut self.move_log {
            if let Err(err) = log.record(engine_name, &played, score, nodes) {
                warn!(%err, "could not write move log");
            }
        }
        Ok(played)
    }

    fn fallback_move(&mut self) -> ChessResult<Move> {
        self.legal
            .choose(&mut self.fallback_rng)
            .cloned()
            .ok_or(ChessError::GameOver(self.outcome()))
    }

    /// Applies `mv` and returns it as recorded, annotations included.
    fn commit(&mut self, mv: &Move) -> Move {
        let mover = self.state.side_to_move;
        apply_move(&mut self.state, mv);
        self.refresh();
        let played = self.state.move_history.last().cloned().unwrap_or_else(|| mv.clone());
        info!(side = %mover, san = %played.notation(), "move played");
        played
    }

    /// Recomputes legal moves and annotates the last played move.
    fn refresh(&mut self) {
        self.legal = legal_moves(&mut self.state);
        let checked = in_check(&self.state);
        let mate = self.state.checkmate;
        let draw = self.state.stalemate || self.state.fifty_move_draw;
        if let Some(last) = self.state.move_history.last_mut() {
            last.is_check = checked;
            last.is_checkmate = mate;
            last.is_stalemate = draw && !mate;
        }
    }
}
