use gridsearch_core::{Grid, Position};
use gridsearch_paths::{Algorithm, SearchResult};
use serde::{Deserialize, Serialize};

use crate::error::RequestError;

/// A search request as sent by a client.
///
/// `grid` holds `rows` rows of `cols` cells, `0` for open and `1` for wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub algorithm: String,
    pub rows: i32,
    pub cols: i32,
    pub start: Position,
    pub end: Position,
    pub grid: Vec<Vec<u8>>,
}

/// A validated request: every search precondition holds.
#[derive(Debug, Clone)]
pub struct Problem {
    pub algorithm: Algorithm,
    pub grid: Grid,
    pub start: Position,
    pub end: Position,
}

impl SolveRequest {
    /// Parse a request from a JSON document.
    pub fn from_json(s: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Check the request and build the grid.
    ///
    /// Checks run in order: algorithm name, dimensions, grid shape, cell
    /// values, start and end bounds, start and end walls. The first failure
    /// is returned.
    pub fn validate(&self) -> Result<Problem, RequestError> {
        let algorithm: Algorithm = self.algorithm.parse()?;

        if self.rows <= 0 || self.cols <= 0 {
            return Err(RequestError::BadDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.grid.len() != self.rows as usize
            || self.grid.iter().any(|row| row.len() != self.cols as usize)
        {
            return Err(RequestError::ShapeMismatch {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let grid = Grid::from_rows(&self.grid)?;

        if !grid.contains(self.start) {
            return Err(RequestError::StartOutOfBounds(self.start));
        }
        if !grid.contains(self.end) {
            return Err(RequestError::EndOutOfBounds(self.end));
        }
        if !grid.is_open(self.start) {
            return Err(RequestError::StartIsWall(self.start));
        }
        if !grid.is_open(self.end) {
            return Err(RequestError::EndIsWall(self.end));
        }

        Ok(Problem {
            algorithm,
            grid,
            start: self.start,
            end: self.end,
        })
    }
}

impl Problem {
    /// Run the selected search.
    pub fn run(&self) -> SearchResult {
        self.algorithm.search(&self.grid, self.start, self.end)
    }
}
