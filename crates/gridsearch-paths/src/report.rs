use std::time::{Duration, Instant};

use gridsearch_core::Position;

use crate::Algorithm;

/// Outcome of a single search, with the exploration trace for replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Whether `end` was reached.
    pub found: bool,
    /// Wall-clock time spent inside the search.
    pub time_taken: Duration,
    /// Number of expansions; always equal to `visited.len()`.
    pub nodes_expanded: usize,
    /// Start-to-end path, both inclusive. Empty if not found.
    pub path: Vec<Position>,
    /// Expanded positions in expansion order.
    pub visited: Vec<Position>,
}

impl SearchResult {
    /// Number of positions on the path (edges + 1), 0 if not found.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }
}

/// Per-invocation recorder for expansion order and elapsed time.
pub(crate) struct Trace {
    algorithm: Algorithm,
    started: Instant,
    visited: Vec<Position>,
}

impl Trace {
    pub(crate) fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            started: Instant::now(),
            visited: Vec::new(),
        }
    }

    /// Record the expansion of `p`.
    #[inline]
    pub(crate) fn expand(&mut self, p: Position) {
        self.visited.push(p);
    }

    pub(crate) fn found(self, path: Vec<Position>) -> SearchResult {
        self.finish(true, path)
    }

    pub(crate) fn exhausted(self) -> SearchResult {
        self.finish(false, Vec::new())
    }

    fn finish(self, found: bool, path: Vec<Position>) -> SearchResult {
        let time_taken = self.started.elapsed();
        log::debug!(
            "{}: found={} expanded={} path_len={} in {:?}",
            self.algorithm,
            found,
            self.visited.len(),
            path.len(),
            time_taken,
        );
        SearchResult {
            found,
            time_taken,
            nodes_expanded: self.visited.len(),
            path,
            visited: self.visited,
        }
    }
}
