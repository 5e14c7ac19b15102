use std::fmt;

use gridsearch_core::{GridError, Position};
use gridsearch_paths::UnknownAlgorithm;

/// Reasons a [`SolveRequest`](crate::SolveRequest) is rejected before any
/// search runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// `rows` or `cols` is not positive.
    BadDimensions { rows: i32, cols: i32 },
    /// The grid does not have `rows` rows of `cols` cells.
    ShapeMismatch { rows: i32, cols: i32 },
    /// The grid matrix itself is malformed.
    Grid(GridError),
    StartOutOfBounds(Position),
    EndOutOfBounds(Position),
    StartIsWall(Position),
    EndIsWall(Position),
    UnknownAlgorithm(UnknownAlgorithm),
    /// The request body is not valid JSON for a `SolveRequest`.
    Json(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadDimensions { rows, cols } => {
                write!(f, "rows and cols must be positive, got {rows}x{cols}")
            }
            Self::ShapeMismatch { rows, cols } => write!(
                f,
                "grid dimensions do not match specified rows and cols ({rows}x{cols})"
            ),
            Self::Grid(e) => write!(f, "{e}"),
            Self::StartOutOfBounds(p) => write!(f, "start position {p} out of bounds"),
            Self::EndOutOfBounds(p) => write!(f, "end position {p} out of bounds"),
            Self::StartIsWall(p) => write!(f, "start position {p} is a wall"),
            Self::EndIsWall(p) => write!(f, "end position {p} is a wall"),
            Self::UnknownAlgorithm(e) => write!(f, "{e}"),
            Self::Json(msg) => write!(f, "invalid request: {msg}"),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::UnknownAlgorithm(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for RequestError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<UnknownAlgorithm> for RequestError {
    fn from(e: UnknownAlgorithm) -> Self {
        Self::UnknownAlgorithm(e)
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
