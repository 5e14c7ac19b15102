//! **gridsearch-core** — occupancy grid and geometry types.
//!
//! This crate provides the types shared across the *gridsearch* workspace:
//! [`Position`] and [`Direction`] for coordinates and unit moves, and the
//! read-only [`Grid`] that every search borrows.

pub mod geom;
pub mod grid;

pub use geom::{Direction, Position};
pub use grid::{Grid, GridError, Tile};
