//! Parallel root search.
//!
//! The root's children are handed out one at a time to scoped worker threads.
//! Workers share the root's alpha/beta window: each child is searched with
//! the window current when it is picked up, and its value is folded back in
//! under the lock. A child searched against a stale window can only return a
//! bound that fails to improve the newer one, so the root value equals the
//! sequential search value; the chosen child may differ among equal scores.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use parking_lot::Mutex;

use super::{
    search_with_config, Color, SearchConfig, SearchContext, SearchResult, SearchStats, State,
    StateError, MAX_BOUND, MIN_BOUND,
};

/// Search thread stack size (32 MB to handle deep recursion)
const SEARCH_STACK_SIZE: usize = 32 * 1024 * 1024;

/// Root window shared by all workers
struct SharedWindow {
    alpha: f64,
    beta: f64,
    best: Option<usize>,
}

impl SharedWindow {
    /// Fold a child's value into the window. Returns true if it became the best child.
    fn update(&mut self, idx: usize, value: f64, turn: Color) -> bool {
        let improves = match turn {
            Color::White => value > self.alpha,
            Color::Black => value < self.beta,
        };
        if improves {
            match turn {
                Color::White => self.alpha = value,
                Color::Black => self.beta = value,
            }
            self.best = Some(idx);
        }
        improves
    }

    fn score(&self, turn: Color) -> f64 {
        match turn {
            Color::White => self.alpha,
            Color::Black => self.beta,
        }
    }
}

/// Full-window search of `state` split over `threads` workers.
///
/// Fails on a terminal state. On success `state.next_move()` holds the
/// chosen child, as with the sequential search.
pub fn parallel_search(
    state: &mut State,
    depth: i32,
    threads: usize,
) -> Result<SearchResult, StateError> {
    search_with_config(state, &SearchConfig::with_depth(depth).threads(threads))
}

/// Searches the root's children in parallel and records the best one.
pub(super) fn search_root(state: &mut State, depth: i32, threads: usize) -> (f64, SearchStats) {
    search_root_with_stack(state, depth, threads, SEARCH_STACK_SIZE)
}

/// Root search with workers of `stack_size` bytes.
///
/// If no worker could be started the root is searched on the calling thread.
fn search_root_with_stack(
    state: &mut State,
    depth: i32,
    threads: usize,
    stack_size: usize,
) -> (f64, SearchStats) {
    if depth <= 0 || state.is_terminal() {
        return (state.balance(), SearchStats { nodes: 1, cutoffs: 0 });
    }

    let turn = state.turn();
    let children: Vec<Mutex<State>> = state.children().into_iter().map(Mutex::new).collect();
    let window = Mutex::new(SharedWindow {
        alpha: MIN_BOUND,
        beta: MAX_BOUND,
        best: None,
    });
    let next_child = AtomicUsize::new(0);
    let mut started = 0;
    let totals = Mutex::new(SearchStats { nodes: 1, cutoffs: 0 });
    let workers = threads.clamp(1, children.len().max(1));

    let (children_ref, window_ref, next_ref, totals_ref) = (&children, &window, &next_child, &totals);
    thread::scope(|scope| {
        for worker_id in 0..workers {
            let spawned = thread::Builder::new()
                .name(format!("search-{worker_id}"))
                .stack_size(stack_size)
                .spawn_scoped(scope, move || {
                    let mut ctx = SearchContext::default();
                    loop {
                        let idx = next_ref.fetch_add(1, Ordering::Relaxed);
                        let Some(slot) = children_ref.get(idx) else {
                            break;
                        };
                        let (alpha, beta) = {
                            let w = window_ref.lock();
                            (w.alpha, w.beta)
                        };
                        let value = ctx.alpha_beta(&mut slot.lock(), depth - 1, alpha, beta);
                        if window_ref.lock().update(idx, value, turn) {
                            engine_log!(trace, "worker {worker_id}: child {idx} improves to {value}");
                        }
                    }
                    totals_ref.lock().merge(ctx.stats);
                });
            match spawned {
                Ok(_) => started += 1,
                Err(err) => {
                    engine_log!(warn, "failed to spawn search worker {worker_id}: {err}");
                }
            }
        }
    });

    if started == 0 {
        engine_log!(warn, "no search worker started, searching on the calling thread");
        let mut ctx = SearchContext::default();
        let score = ctx.alpha_beta(state, depth, MIN_BOUND, MAX_BOUND);
        return (score, ctx.stats);
    }

    let window = window.into_inner();
    let score = window.score(turn);
    if let Some(best) = window.best {
        if let Some(child) = children.into_iter().nth(best) {
            state.set_next_move(child.into_inner());
        }
    }
    (score, totals.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_matches_sequential_from_start() {
        let mut sequential = State::start();
        let expected = crate::board::search(&mut sequential, 4).unwrap();

        let mut parallel = State::start();
        let result = parallel_search(&mut parallel, 4, 4).unwrap();

        assert_eq!(result.score, expected.score);
        assert!(result.best_move.is_some());
        assert!(parallel.next_move().is_ok());
    }

    #[test]
    fn test_unspawnable_workers_fall_back_to_calling_thread() {
        let mut sequential = State::start();
        let expected = crate::board::search(&mut sequential, 3).unwrap();

        // No thread can be given a stack this large.
        let mut state = State::start();
        let (score, stats) = search_root_with_stack(&mut state, 3, 4, usize::MAX / 4);
        assert_eq!(score, expected.score);
        assert!(stats.nodes > 1);
        assert!(state.next_move().is_ok());
    }

    #[test]
    fn test_window_update_per_side() {
        let mut window = SharedWindow {
            alpha: MIN_BOUND,
            beta: MAX_BOUND,
            best: None,
        };
        assert!(window.update(0, 1.0, Color::White));
        assert!(!window.update(1, 0.5, Color::White));
        assert!(window.update(2, -2.0, Color::Black));
        assert_eq!(window.best, Some(2));
        assert_eq!(window.score(Color::White), 1.0);
        assert_eq!(window.score(Color::Black), -2.0);
    }
}
