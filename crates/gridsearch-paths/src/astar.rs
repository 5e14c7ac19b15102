use std::collections::BinaryHeap;

use gridsearch_core::{Grid, Position};

use crate::distance::manhattan;
use crate::neighbors::Neighbors;
use crate::report::{SearchResult, Trace};
use crate::state::{Links, OpenEntry, Scores};
use crate::Algorithm;

/// Compute the shortest path from `start` to `end` using A*.
///
/// The open list is ordered by `(g + h, g, position)` with the Manhattan
/// distance to `end` as `h`; since it never overestimates on a 4-connected
/// unit-cost grid the first time `end` is closed its path is optimal.
/// The priority is recomputed at every push and never stored.
pub fn astar(grid: &Grid, start: Position, end: Position) -> SearchResult {
    let mut trace = Trace::new(Algorithm::AStar);
    if !grid.contains(start) {
        return trace.exhausted();
    }

    let mut links = Links::new(grid);
    let mut scores = Scores::new(grid);
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut nb = Neighbors::new();

    links.set_root(start);
    scores.set_g(start, 0);
    open.push(OpenEntry {
        f: manhattan(start, end),
        g: 0,
        pos: start,
    });

    while let Some(OpenEntry { g: current_g, pos: cur, .. }) = open.pop() {
        // Skip stale entries.
        if scores.is_closed(cur) {
            continue;
        }
        scores.close(cur);
        trace.expand(cur);

        if cur == end {
            return trace.found(links.path_to(cur));
        }

        for &n in nb.cardinal(cur, |p| grid.is_open(p)) {
            if scores.is_closed(n) {
                continue;
            }
            let tentative_g = current_g + 1;
            if tentative_g >= scores.g(n) {
                continue;
            }
            scores.set_g(n, tentative_g);
            links.link(n, cur);
            open.push(OpenEntry {
                f: tentative_g + manhattan(n, end),
                g: tentative_g,
                pos: n,
            });
        }
    }

    trace.exhausted()
}
