//! Request handling for grid search, independent of any transport.
//!
//! A client sends a [`SolveRequest`] naming one of the algorithms in
//! [`gridsearch_paths::Algorithm`]. [`solve`] validates it, runs the search
//! and returns the [`SolveResponse`] to serialize back:
//!
//! ```json
//! {"stats": {"solved": true, "time": 0.0001, "nodesExpanded": 9, "pathLength": 5},
//!  "path": [[0,0],[0,1],[0,2],[1,2],[2,2]],
//!  "visited": [[0,0],[0,1],[1,0],...]}
//! ```
//!
//! Malformed requests are rejected with a [`RequestError`] before any search
//! runs; a search itself never fails.

mod error;
mod request;
mod response;
pub mod walls;

pub use error::RequestError;
pub use request::{Problem, SolveRequest};
pub use response::{SolveResponse, Stats};
pub use walls::{WallConfig, WallGen};

/// Validate `req`, run the requested search and shape the response.
pub fn solve(req: &SolveRequest) -> Result<SolveResponse, RequestError> {
    let problem = req.validate()?;
    log::debug!(
        "solving {}x{} grid with {} from {} to {}",
        problem.grid.rows(),
        problem.grid.cols(),
        problem.algorithm,
        problem.start,
        problem.end
    );
    Ok(SolveResponse::from(problem.run()))
}

/// [`solve`] for a JSON request body, returning a JSON response body.
pub fn solve_json(body: &str) -> Result<String, RequestError> {
    let req = SolveRequest::from_json(body)?;
    let resp = solve(&req)?;
    Ok(serde_json::to_string(&resp)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsearch_core::Position;
    use gridsearch_paths::Algorithm;

    fn open_request(algorithm: Algorithm) -> SolveRequest {
        SolveRequest {
            algorithm: algorithm.name().to_string(),
            rows: 3,
            cols: 3,
            start: Position::new(0, 0),
            end: Position::new(2, 2),
            grid: vec![vec![0; 3]; 3],
        }
    }

    #[test]
    fn solve_dispatches_by_name() {
        for a in Algorithm::ALL {
            let resp = solve(&open_request(a)).unwrap();
            assert!(resp.stats.solved, "{a}");
            assert_eq!(resp.path.first(), Some(&(0, 0)));
            assert_eq!(resp.path.last(), Some(&(2, 2)));
            assert_eq!(resp.stats.path_length, resp.path.len());
            assert_eq!(resp.stats.nodes_expanded, resp.visited.len());
            if a.is_shortest() {
                assert_eq!(resp.stats.path_length, 5, "{a}");
            }
        }
    }

    #[test]
    fn bfs_response_matches_reference_trace() {
        let resp = solve(&open_request(Algorithm::Bfs)).unwrap();
        assert_eq!(resp.path, vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);
        assert_eq!(resp.stats.nodes_expanded, 9);
    }

    #[test]
    fn solve_json_round_trip() {
        let body = r#"{"algorithm":"Dijkstra","rows":1,"cols":3,
            "start":{"row":0,"col":0},"end":{"row":0,"col":2},"grid":[[0,0,0]]}"#;
        let out = solve_json(body).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["stats"]["solved"], true);
        assert_eq!(v["stats"]["pathLength"], 3);
        assert_eq!(v["path"], serde_json::json!([[0, 0], [0, 1], [0, 2]]));
    }

    #[test]
    fn solve_json_reports_validation_errors() {
        let body = r#"{"algorithm":"BFS","rows":1,"cols":2,
            "start":{"row":0,"col":0},"end":{"row":0,"col":1},"grid":[[0,1]]}"#;
        let err = solve_json(body).unwrap_err();
        assert_eq!(err, RequestError::EndIsWall(Position::new(0, 1)));
        assert_eq!(err.to_string(), "end position (0, 1) is a wall");
    }

    #[test]
    fn unreachable_end_is_not_an_error() {
        let mut req = open_request(Algorithm::AStar);
        req.grid = vec![vec![0, 0, 1], vec![0, 1, 0], vec![1, 0, 0]];
        let resp = solve(&req).unwrap();
        assert!(!resp.stats.solved);
        assert!(resp.path.is_empty());
        assert_eq!(resp.visited.len(), 3);
    }
}
