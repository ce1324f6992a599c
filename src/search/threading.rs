//! Off-thread search.
//!
//! The interactive loop hands a `SearchWorker` a private copy of the board
//! and its legal moves; the worker runs one engine call on its own thread and
//! sends back exactly one `SearchReply`, or nothing at all when cancelled.
//! The stop flag is the only state shared with the running search.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

/// Shared cancellation + accounting state between a worker and its owner.
#[derive(Debug, Default)]
pub struct SharedSearchState {
    stop: AtomicBool,
    pub nodes_visited: AtomicU64,
}

impl SharedSearchState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    #[inline]
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn add_nodes(&self, n: u64) {
        self.nodes_visited.fetch_add(n, Ordering::Relaxed);
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes_visited.load(Ordering::Relaxed)
    }
}

/// The single message a worker sends.
#[derive(Debug, Clone)]
pub enum SearchReply {
    Move {
        chosen: Move,
        score: Option<i32>,
        nodes: u64,
    },
    /// The engine was given an empty move set.
    NoLegalMove,
}

pub struct SearchWorker {
    engine_name: String,
    receiver: Receiver<SearchReply>,
    shared: Arc<SharedSearchState>,
    handle: Option<JoinHandle<()>>,
}

impl SearchWorker {
    /// Starts `engine` on `snapshot`, which the worker owns from here on.
    pub fn spawn(
        mut engine: Box<dyn Engine>,
        mut snapshot: GameState,
        legal_moves: Vec<Move>,
    ) -> ChessResult<Self> {
        let shared = SharedSearchState::new();
        engine.attach_shared_state(Arc::clone(&shared));
        let engine_name = engine.name().to_owned();

        let (sender, receiver) = mpsc::channel();
        let stop = Arc::clone(&shared);
        let handle = thread::Builder::new()
            .name("search-worker".to_owned())
            .spawn(move || {
                let output = engine.choose_move(&mut snapshot, &legal_moves);
                if stop.should_stop() {
                    debug!(engine = engine.name(), "search cancelled, dropping result");
                    return;
                }
                let reply = match output.best_move {
                    Some(chosen) => SearchReply::Move {
                        chosen,
                        score: output.best_score,
                        nodes: output.nodes,
                    },
                    None => SearchReply::NoLegalMove,
                };
                // The owner may have gone away; nothing left to do then.
                let _ = sender.send(reply);
            })
            .map_err(ChessError::WorkerSpawn)?;

        debug!(engine = %engine_name, "search worker started");
        Ok(Self {
            engine_name,
            receiver,
            shared,
            handle: Some(handle),
        })
    }

    #[inline]
    pub fn engine_name(&self) -> &str {
        &self.engine_name
    }

    /// Nodes searched so far.
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.shared.nodes()
    }

    /// Non-blocking check for the reply.
    pub fn poll(&self) -> ChessResult<Option<SearchReply>> {
        match self.receiver.try_recv() {
            Ok(reply) => Ok(Some(reply)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                warn!(engine = %self.engine_name, "search worker exited without a reply");
                Err(ChessError::SearchWorkerDisconnected)
            }
        }
    }

    /// Blocks until the reply arrives.
    pub fn wait(&self) -> ChessResult<SearchReply> {
        self.receiver
            .recv()
            .map_err(|_| ChessError::SearchWorkerDisconnected)
    }

    /// Asks the search to stop and detaches the thread. No reply will be
    /// delivered afterwards.
    pub fn cancel(mut self) {
        self.shared.request_stop();
        self.handle.take();
        debug!(engine = %self.engine_name, "search worker cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_negamax::NegamaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::move_generation::legal_move_generator::legal_moves;

    #[test]
    fn shared_state_stop_and_node_accounting() {
        let state = SharedSearchState::new();
        assert!(!state.should_stop());
        state.request_stop();
        assert!(state.should_stop());

        state.add_nodes(10);
        state.add_nodes(5);
        assert_eq!(state.nodes(), 15);
    }

    #[test]
    fn worker_replies_once_with_a_legal_move() {
        let mut game = GameState::new_game();
        let legal = legal_moves(&mut game);
        let worker =
            SearchWorker::spawn(Box::new(RandomEngine::new(Some(7))), game, legal.clone())
                .expect("worker thread should start");

        match worker.wait().expect("worker should reply") {
            SearchReply::Move { chosen, .. } => assert!(legal.contains(&chosen)),
            SearchReply::NoLegalMove => panic!("start position has moves"),
        }
        // The sender is dropped after the single reply.
        assert!(worker.wait().is_err());
    }

    #[test]
    fn empty_move_set_yields_no_legal_move() {
        let worker = SearchWorker::spawn(
            Box::new(RandomEngine::new(Some(1))),
            GameState::new_game(),
            Vec::new(),
        )
        .expect("worker thread should start");
        assert!(matches!(worker.wait(), Ok(SearchReply::NoLegalMove)));
    }

    #[test]
    fn worker_node_count_matches_the_reply() {
        let mut game = GameState::new_game();
        let legal = legal_moves(&mut game);
        let engine = Box::new(NegamaxEngine::new(2, true, Some(3)));
        let worker = SearchWorker::spawn(engine, game, legal).expect("worker thread should start");

        match worker.wait().expect("worker should reply") {
            SearchReply::Move { nodes, .. } => {
                assert!(nodes > 0);
                assert_eq!(worker.nodes(), nodes);
            }
            SearchReply::NoLegalMove => panic!("start position has moves"),
        }
    }
}
