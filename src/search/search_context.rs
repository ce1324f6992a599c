//! Per-search bookkeeping threaded through the recursion.

use std::sync::Arc;

use crate::moves::chess_move::Move;
use crate::search::threading::SharedSearchState;

/// Bound larger than any reachable score.
pub const SCORE_INFINITY: i32 = 1_000_000;

/// Result of one root search.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Every root move that reached `best_score`, in generation order.
    pub candidates: Vec<Move>,
    pub best_score: Option<i32>,
    pub nodes: u64,
    /// Set when the search was stopped early; the other fields are partial.
    pub aborted: bool,
}

#[derive(Debug)]
pub struct SearchContext {
    pub root_depth: u8,
    best_score: Option<i32>,
    candidates: Vec<Move>,
    nodes: u64,
    shared: Option<Arc<SharedSearchState>>,
    aborted: bool,
}

impl SearchContext {
    pub fn new(root_depth: u8, shared: Option<Arc<SharedSearchState>>) -> Self {
        Self {
            root_depth,
            best_score: None,
            candidates: Vec::new(),
            nodes: 0,
            shared,
            aborted: false,
        }
    }

    /// Counts a node. Returns `false` once a stop has been requested; the
    /// caller should unwind without trusting its score.
    #[inline]
    pub fn enter_node(&mut self) -> bool {
        if self.aborted {
            return false;
        }
        self.nodes += 1;
        if let Some(shared) = &self.shared {
            shared.add_nodes(1);
            if shared.should_stop() {
                self.aborted = true;
                return false;
            }
        }
        true
    }

    #[inline]
    pub fn aborted(&self) -> bool {
        self.aborted
    }

    #[inline]
    pub fn best_score(&self) -> Option<i32> {
        self.best_score
    }

    /// Folds a scored root move into the candidate set: a strictly better
    /// score replaces the set, an equal one joins it. `maximize` picks the
    /// direction of "better".
    pub fn record_root(&mut self, mv: &Move, score: i32, maximize: bool) {
        match self.best_score {
            Some(best) if score == best => self.candidates.push(mv.clone()),
            Some(best) if (score > best) != maximize => {}
            _ => {
                self.best_score = Some(score);
                self.candidates.clear();
                self.candidates.push(mv.clone());
            }
        }
    }

    pub fn into_outcome(self) -> SearchOutcome {
        SearchOutcome {
            candidates: self.candidates,
            best_score: self.best_score,
            nodes: self.nodes,
            aborted: self.aborted,
        }
    }
}
