use std::collections::VecDeque;

use gridsearch_core::{Grid, Position};

use crate::neighbors::Neighbors;
use crate::report::{SearchResult, Trace};
use crate::state::Links;
use crate::Algorithm;

/// Breadth-first search from `start` to `end`.
///
/// Nodes are marked when enqueued and the search returns as soon as `end`
/// is dequeued, so the returned path has the fewest possible edges.
pub fn bfs(grid: &Grid, start: Position, end: Position) -> SearchResult {
    let mut trace = Trace::new(Algorithm::Bfs);
    if !grid.contains(start) {
        return trace.exhausted();
    }

    let mut links = Links::new(grid);
    let mut queue: VecDeque<Position> = VecDeque::new();
    let mut nb = Neighbors::new();

    links.set_root(start);
    queue.push_back(start);

    while let Some(cur) = queue.pop_front() {
        trace.expand(cur);
        if cur == end {
            return trace.found(links.path_to(cur));
        }

        for &n in nb.cardinal(cur, |p| grid.is_open(p)) {
            if links.is_seen(n) {
                continue;
            }
            links.link(n, cur);
            queue.push_back(n);
        }
    }

    trace.exhausted()
}
