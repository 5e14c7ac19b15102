use std::collections::BinaryHeap;

use gridsearch_core::{Grid, Position};

use crate::neighbors::Neighbors;
use crate::report::{SearchResult, Trace};
use crate::state::{Links, OpenEntry, Scores};
use crate::Algorithm;

/// Dijkstra search from `start` to `end` with unit edge costs.
///
/// The open list keeps stale duplicates: a relaxed node is pushed again and
/// older entries are skipped when popped after the node has been closed.
/// Ties on distance pop in row-major position order.
pub fn dijkstra(grid: &Grid, start: Position, end: Position) -> SearchResult {
    let mut trace = Trace::new(Algorithm::Dijkstra);
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
        f: 0,
        g: 0,
        pos: start,
    });

    while let Some(OpenEntry { g: dist, pos: cur, .. }) = open.pop() {
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
            let candidate = dist + 1;
            if candidate >= scores.g(n) {
                continue;
            }
            scores.set_g(n, candidate);
            links.link(n, cur);
            open.push(OpenEntry {
                f: candidate,
                g: candidate,
                pos: n,
            });
        }
    }

    trace.exhausted()
}
