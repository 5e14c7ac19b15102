use gridsearch_core::{Grid, Position};

use crate::neighbors::Neighbors;
use crate::report::{SearchResult, Trace};
use crate::state::Links;
use crate::Algorithm;

/// Depth-first search from `start` to `end`.
///
/// Neighbors are marked and linked when pushed, not when popped, so every
/// cell enters the stack at most once. The path is whatever the stack order
/// reaches first and is not necessarily shortest.
pub fn dfs(grid: &Grid, start: Position, end: Position) -> SearchResult {
    let mut trace = Trace::new(Algorithm::Dfs);
    if !grid.contains(start) {
        return trace.exhausted();
    }

    let mut links = Links::new(grid);
    let mut stack: Vec<Position> = vec![start];
    let mut nb = Neighbors::new();
    links.set_root(start);

    while let Some(cur) = stack.pop() {
        trace.expand(cur);
        if cur == end {
            return trace.found(links.path_to(cur));
        }

        for &n in nb.cardinal(cur, |p| grid.is_open(p)) {
            if links.is_seen(n) {
                continue;
            }
            links.link(n, cur);
            stack.push(n);
        }
    }

    trace.exhausted()
}
