//! Shared helpers for the search tests.

use std::collections::VecDeque;

use gridsearch_core::{Grid, Position};

use crate::SearchResult;

pub(crate) const OPEN_3X3: &str = "\
...
...
...
";

/// Start region {(0,0), (0,1), (1,0)} is cut off from end region
/// {(1,2), (2,1), (2,2)}.
pub(crate) const SPLIT_3X3: &str = "\
..#
.#.
#..
";

pub(crate) fn pos(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

pub(crate) fn grid(s: &str) -> Grid {
    Grid::parse(s).unwrap()
}

/// Check the structural invariants of a found path.
pub(crate) fn assert_valid_path(grid: &Grid, start: Position, end: Position, r: &SearchResult) {
    assert!(r.found);
    assert_eq!(r.path.first(), Some(&start));
    assert_eq!(r.path.last(), Some(&end));
    for p in &r.path {
        assert!(grid.is_open(*p), "{p} on path is not open");
    }
    for w in r.path.windows(2) {
        assert!(w[0].is_adjacent(w[1]), "{} -> {} is not a unit move", w[0], w[1]);
    }
    assert_eq!(r.nodes_expanded, r.visited.len());
}

/// Independent flood fill: number of edges from `start` to every cell,
/// `None` where unreachable.
pub(crate) fn flood_distances(grid: &Grid, start: Position) -> Vec<Option<usize>> {
    let mut dist = vec![None; grid.len()];
    let Some(si) = grid.index(start) else {
        return dist;
    };
    dist[si] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(p) = queue.pop_front() {
        let d = grid.index(p).and_then(|i| dist[i]).unwrap_or(0);
        for n in p.neighbors_4() {
            if !grid.is_open(n) {
                continue;
            }
            let ni = grid.index(n).unwrap();
            if dist[ni].is_none() {
                dist[ni] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

/// All open cells reachable from `start`, sorted.
pub(crate) fn reachable(grid: &Grid, start: Position) -> Vec<Position> {
    flood_distances(grid, start)
        .iter()
        .enumerate()
        .filter(|(_, d)| d.is_some())
        .map(|(i, _)| grid.position(i))
        .collect()
}
