//! Bidirectional breadth-first search.
//!
//! Two BFS trees grow in lockstep, one rooted at the start and one at the
//! end, each expanding a single node per round. The search stops as soon as
//! one side enqueues a cell the other side has already discovered; that cell
//! is the meeting point and is not necessarily expanded by either side.

use std::collections::VecDeque;

use gridsearch_core::{Grid, Position};

use crate::neighbors::Neighbors;
use crate::report::{SearchResult, Trace};
use crate::state::{stitch, Links};
use crate::Algorithm;

/// One half of the bidirectional search.
struct Side<'g> {
    queue: VecDeque<Position>,
    links: Links<'g>,
}

impl<'g> Side<'g> {
    fn new(grid: &'g Grid, root: Position) -> Self {
        let mut links = Links::new(grid);
        links.set_root(root);
        Self {
            queue: VecDeque::from([root]),
            links,
        }
    }

    /// Expand one node. Returns the meeting point if a newly enqueued
    /// neighbor is already known to `other`.
    fn step(
        &mut self,
        grid: &Grid,
        other: &Links<'_>,
        trace: &mut Trace,
        nb: &mut Neighbors,
    ) -> Option<Position> {
        let cur = self.queue.pop_front()?;
        trace.expand(cur);

        for &n in nb.cardinal(cur, |p| grid.is_open(p)) {
            if self.links.is_seen(n) {
                continue;
            }
            self.links.link(n, cur);
            self.queue.push_back(n);
            if other.is_seen(n) {
                return Some(n);
            }
        }
        None
    }
}

/// Bidirectional BFS from `start` to `end`.
///
/// `visited` interleaves expansions from both sides. Because the meeting
/// check runs at enqueue time, `nodes_expanded` can be one lower than a
/// variant that only stops once the meeting cell is dequeued.
pub fn bidirectional_bfs(grid: &Grid, start: Position, end: Position) -> SearchResult {
    let mut trace = Trace::new(Algorithm::BidirectionalBfs);
    if !grid.contains(start) || !grid.contains(end) {
        return trace.exhausted();
    }
    // The enqueue-time check can never fire when both roots coincide.
    if start == end {
        trace.expand(start);
        return trace.found(vec![start]);
    }

    let mut forward = Side::new(grid, start);
    let mut backward = Side::new(grid, end);
    let mut nb = Neighbors::new();

    while !forward.queue.is_empty() && !backward.queue.is_empty() {
        if let Some(meet) = forward.step(grid, &backward.links, &mut trace, &mut nb) {
            log::trace!("bidirectional BFS met at {meet} (forward side)");
            return trace.found(stitch(&forward.links, &backward.links, meet));
        }
        if let Some(meet) = backward.step(grid, &forward.links, &mut trace, &mut nb) {
            log::trace!("bidirectional BFS met at {meet} (backward side)");
            return trace.found(stitch(&forward.links, &backward.links, meet));
        }
    }

    trace.exhausted()
}
