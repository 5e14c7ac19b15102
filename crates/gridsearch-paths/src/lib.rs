//! Search algorithms for occupancy grids, with exploration traces.
//!
//! Every strategy has the same shape, `fn(&Grid, start, end) -> SearchResult`,
//! and moves in the four cardinal directions with unit cost, trying east,
//! south, west and north in that order:
//!
//! - **BFS** FIFO frontier, shortest path ([`bfs`])
//! - **DFS** LIFO frontier, any path ([`dfs`])
//! - **Dijkstra** distance-ordered frontier ([`dijkstra`])
//! - **A\*** frontier ordered by distance plus Manhattan estimate ([`astar`])
//! - **Bidirectional BFS** two frontiers meeting in the middle
//!   ([`bidirectional_bfs`])
//!
//! [`Algorithm`] selects one of them at runtime.
//!
//! All search state is allocated per call. The grid is only borrowed, so any
//! number of searches may run on the same grid from different threads.
//! A search never fails: an unreachable goal is reported through
//! [`SearchResult::found`].

mod algorithm;
mod astar;
mod bfs;
mod bibfs;
mod dfs;
mod dijkstra;
mod distance;
mod neighbors;
mod report;
mod state;

#[cfg(test)]
mod fixtures;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use astar::astar;
pub use bfs::bfs;
pub use bibfs::bidirectional_bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use distance::manhattan;
pub use neighbors::Neighbors;
pub use report::SearchResult;
pub use state::UNREACHABLE;
