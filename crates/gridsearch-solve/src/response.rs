use gridsearch_paths::SearchResult;
use serde::{Deserialize, Serialize};

/// Summary numbers shown next to the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub solved: bool,
    /// Search time in seconds.
    pub time: f64,
    pub nodes_expanded: usize,
    /// Number of positions on the path, 0 if unsolved.
    pub path_length: usize,
}

/// Wire form of a [`SearchResult`]. Positions are `[row, col]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResponse {
    pub stats: Stats,
    pub path: Vec<(i32, i32)>,
    pub visited: Vec<(i32, i32)>,
}

impl From<&SearchResult> for SolveResponse {
    fn from(r: &SearchResult) -> Self {
        Self {
            stats: Stats {
                solved: r.found,
                time: r.time_taken.as_secs_f64(),
                nodes_expanded: r.nodes_expanded,
                path_length: r.path_len(),
            },
            path: r.path.iter().map(|&p| p.into()).collect(),
            visited: r.visited.iter().map(|&p| p.into()).collect(),
        }
    }
}

impl From<SearchResult> for SolveResponse {
    fn from(r: SearchResult) -> Self {
        Self::from(&r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsearch_core::Position;
    use std::time::Duration;

    #[test]
    fn serializes_camel_case_stats_and_pairs() {
        let r = SearchResult {
            found: true,
            time_taken: Duration::from_millis(250),
            nodes_expanded: 2,
            path: vec![Position::new(0, 0), Position::new(0, 1)],
            visited: vec![Position::new(0, 0), Position::new(0, 1)],
        };
        let json = serde_json::to_value(SolveResponse::from(&r)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "stats": {
                    "solved": true,
                    "time": 0.25,
                    "nodesExpanded": 2,
                    "pathLength": 2
                },
                "path": [[0, 0], [0, 1]],
                "visited": [[0, 0], [0, 1]]
            })
        );
    }

    #[test]
    fn unsolved_has_zero_path_length() {
        let r = SearchResult {
            found: false,
            time_taken: Duration::ZERO,
            nodes_expanded: 1,
            path: Vec::new(),
            visited: vec![Position::new(3, 4)],
        };
        let resp = SolveResponse::from(r);
        assert!(!resp.stats.solved);
        assert_eq!(resp.stats.path_length, 0);
        assert_eq!(resp.visited, vec![(3, 4)]);
    }
}
