//! Search module implementing alpha-beta minimax.
//!
//! Features:
//! - Fail-hard alpha-beta over [`State`] nodes, White maximising
//! - Material balance at the depth bound, win/loss sentinels at terminal nodes
//! - Best child recorded on every expanded node, giving the principal line
//! - Unpruned [`minimax`] reference
//! - Parallel root search sharing one alpha/beta window ([`smp`])

mod constants;
mod log;
mod node;
pub mod smp;

use std::sync::Arc;
use std::time::Instant;

use super::{Color, Move, StateError};

pub use constants::{BLACK_WINS, MAX_BOUND, MIN_BOUND, WHITE_WINS};
pub use self::log::{SearchInfo, SearchLogger, StdoutLogger};
pub use node::State;

/// Statistics tracked during search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

impl SearchStats {
    pub fn merge(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

/// Result of a search at the root
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Backed-up evaluation of the root
    pub score: f64,
    /// The turn leading to the chosen child
    pub best_move: Option<Move>,
    /// Moves along the chosen children
    pub principal_line: Vec<Move>,
    pub stats: SearchStats,
}

/// Configuration for a root search
#[derive(Clone)]
pub struct SearchConfig {
    /// Depth bound in plies
    pub depth: i32,
    /// Number of worker threads (1 = sequential)
    pub threads: usize,
    /// Optional receiver for the search summary
    pub logger: Option<Arc<dyn SearchLogger + Send + Sync>>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 6,
            threads: 1,
            logger: None,
        }
    }
}

impl SearchConfig {
    /// Create config with specified depth
    #[must_use]
    pub fn with_depth(depth: i32) -> Self {
        SearchConfig {
            depth,
            ..Default::default()
        }
    }

    /// Set the depth bound
    #[must_use]
    pub fn depth(mut self, depth: i32) -> Self {
        self.depth = depth;
        self
    }

    /// Set thread count
    #[must_use]
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    /// Set logger
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn SearchLogger + Send + Sync>) -> Self {
        self.logger = Some(logger);
        self
    }
}

/// Per-search bookkeeping
#[derive(Default)]
pub(crate) struct SearchContext {
    pub(crate) stats: SearchStats,
}

impl SearchContext {
    pub(crate) fn alpha_beta(
        &mut self,
        state: &mut State,
        depth: i32,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.stats.nodes += 1;
        if depth <= 0 {
            return state.balance();
        }

        state.clear_next_move();
        // One successor walk decides both terminality and the children.
        let children = state.children();
        if children.is_empty() {
            return state.balance();
        }

        match state.turn() {
            Color::White => {
                for mut child in children {
                    let value = self.alpha_beta(&mut child, depth - 1, alpha, beta);
                    if value > alpha {
                        alpha = value;
                        state.set_next_move(child);
                    }
                    if alpha >= beta {
                        self.stats.cutoffs += 1;
                        return beta;
                    }
                }
                alpha
            }
            Color::Black => {
                for mut child in children {
                    let value = self.alpha_beta(&mut child, depth - 1, alpha, beta);
                    if value < beta {
                        beta = value;
                        state.set_next_move(child);
                    }
                    if alpha >= beta {
                        self.stats.cutoffs += 1;
                        return alpha;
                    }
                }
                beta
            }
        }
    }
}

/// Alpha-beta minimax from `state` down to `depth` plies.
///
/// White maximises and Black minimises. Every expanded node records the child
/// that last improved its bound as its `next_move`. Use [`MIN_BOUND`] and
/// [`MAX_BOUND`] for a full-window search.
pub fn alpha_beta(state: &mut State, depth: i32, alpha: f64, beta: f64) -> f64 {
    SearchContext::default().alpha_beta(state, depth, alpha, beta)
}

/// Unpruned minimax over the same tree `alpha_beta` searches.
#[must_use]
pub fn minimax(state: &State, depth: i32) -> f64 {
    if depth <= 0 {
        return state.balance();
    }
    let children = state.children();
    if children.is_empty() {
        return state.balance();
    }
    let values = children.into_iter().map(|child| minimax(&child, depth - 1));
    match state.turn() {
        Color::White => values.fold(f64::NEG_INFINITY, f64::max),
        Color::Black => values.fold(f64::INFINITY, f64::min),
    }
}

/// Full-window sequential search from `state`.
///
/// Fails on a terminal state. After a successful call `state.next_move()`
/// holds the chosen child.
pub fn search(state: &mut State, depth: i32) -> Result<SearchResult, StateError> {
    search_with_config(state, &SearchConfig::with_depth(depth))
}

/// Search according to `config`, in parallel if it asks for more than one thread.
pub fn search_with_config(
    state: &mut State,
    config: &SearchConfig,
) -> Result<SearchResult, StateError> {
    if state.is_terminal() {
        return Err(StateError::Terminal);
    }

    state.clear_next_move();
    let start = Instant::now();
    let (score, stats) = if config.threads > 1 {
        smp::search_root(state, config.depth, config.threads)
    } else {
        let mut ctx = SearchContext::default();
        let score = ctx.alpha_beta(state, config.depth, MIN_BOUND, MAX_BOUND);
        (score, ctx.stats)
    };

    let result = SearchResult {
        score,
        best_move: state
            .next_move()
            .ok()
            .and_then(|child| child.last_move().cloned()),
        principal_line: state.principal_line(),
        stats,
    };
    report(config, &result, start.elapsed().as_millis());
    Ok(result)
}

/// Search `state` to `depth` and return the chosen move.
pub fn find_best_move(state: &mut State, depth: i32) -> Result<Move, StateError> {
    let result = search(state, depth)?;
    result.best_move.ok_or(StateError::NotSearched)
}

fn report(config: &SearchConfig, result: &SearchResult, time_ms: u128) {
    let pv = result
        .principal_line
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    engine_log!(
        debug,
        "depth {} score {} nodes {} cutoffs {} pv {}",
        config.depth,
        result.score,
        result.stats.nodes,
        result.stats.cutoffs,
        pv
    );

    if let Some(logger) = &config.logger {
        logger.info(&SearchInfo {
            depth: config.depth,
            score: result.score,
            nodes: result.stats.nodes,
            cutoffs: result.stats.cutoffs,
            time_ms,
            pv,
        });
    }
}
