use std::fmt;
use std::str::FromStr;

use gridsearch_core::{Grid, Position};

use crate::report::SearchResult;
use crate::{astar, bfs, bidirectional_bfs, dfs, dijkstra};

/// The five search strategies, selectable by their display names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[cfg_attr(feature = "serde", serde(rename = "BFS"))]
    Bfs,
    #[cfg_attr(feature = "serde", serde(rename = "DFS"))]
    Dfs,
    #[cfg_attr(feature = "serde", serde(rename = "Dijkstra"))]
    Dijkstra,
    #[cfg_attr(feature = "serde", serde(rename = "A*"))]
    AStar,
    #[cfg_attr(feature = "serde", serde(rename = "Bidirectional BFS"))]
    BidirectionalBfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::BidirectionalBfs,
    ];

    /// Display name, also accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
            Algorithm::BidirectionalBfs => "Bidirectional BFS",
        }
    }

    /// Whether a found path always has the minimum number of edges.
    pub const fn is_shortest(self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }

    /// Run this strategy on `grid`.
    ///
    /// `start` and `end` are expected to be open cells of `grid`; an
    /// out-of-bounds start yields an empty, not-found result.
    pub fn search(self, grid: &Grid, start: Position, end: Position) -> SearchResult {
        match self {
            Algorithm::Bfs => bfs(grid, start, end),
            Algorithm::Dfs => dfs(grid, start, end),
            Algorithm::Dijkstra => dijkstra(grid, start, end),
            Algorithm::AStar => astar(grid, start, end),
            Algorithm::BidirectionalBfs => bidirectional_bfs(grid, start, end),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by [`Algorithm::from_str`] for an unrecognized name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm: {}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_uses_display_names() {
        let json = serde_json::to_string(&Algorithm::AStar).unwrap();
        assert_eq!(json, r#""A*""#);
        let back: Algorithm = serde_json::from_str(r#""Bidirectional BFS""#).unwrap();
        assert_eq!(back, Algorithm::BidirectionalBfs);
    }
}
