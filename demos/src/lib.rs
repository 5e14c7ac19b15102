//! Shared pieces of the `gridsearch` command-line demo: ASCII rendering of a
//! search trace, a summary line and logger setup.

use gridsearch_core::{Grid, Position, Tile};
use gridsearch_paths::{Algorithm, SearchResult};
use log::LevelFilter;

pub const WALL: char = '#';
pub const OPEN: char = '.';
pub const VISITED: char = 'o';
pub const PATH: char = '*';
pub const START: char = 'S';
pub const END: char = 'E';

/// Draw `grid` with the expanded cells and the path of `result` overlaid.
pub fn render(grid: &Grid, result: &SearchResult, start: Position, end: Position) -> String {
    let mut canvas: Vec<char> = grid
        .iter()
        .map(|(_, t)| match t {
            Tile::Open => OPEN,
            Tile::Wall => WALL,
        })
        .collect();

    let mut paint = |p: Position, ch: char| {
        if let Some(i) = grid.index(p) {
            canvas[i] = ch;
        }
    };
    for &p in &result.visited {
        paint(p, VISITED);
    }
    for &p in &result.path {
        paint(p, PATH);
    }
    paint(start, START);
    paint(end, END);

    let cols = grid.cols().max(1) as usize;
    let mut out = String::with_capacity(canvas.len() + canvas.len() / cols);
    for row in canvas.chunks(cols) {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// One-line summary of a search, e.g. for comparing algorithms.
pub fn summary(algorithm: Algorithm, result: &SearchResult) -> String {
    format!(
        "{:<18} solved={:<5} expanded={:<6} path={:<5} time={:.3}ms",
        algorithm.name(),
        result.found,
        result.nodes_expanded,
        result.path_len(),
        result.time_taken.as_secs_f64() * 1000.0
    )
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Map a `-v` count to a level filter: warnings by default, then debug, then
/// trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install `env_logger` at the level selected by `-v`. `RUST_LOG`, when set,
/// refines it per module. Fails if a logger is already installed.
pub fn init_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .try_init()?;
    log::debug!("log level {}", log::max_level());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsearch_paths::bfs;

    #[test]
    fn render_overlays_trace() {
        let grid = Grid::parse(
            "\
...
.#.
...
",
        )
        .unwrap();
        let start = Position::new(0, 0);
        let end = Position::new(0, 2);
        let r = bfs(&grid, start, end);
        assert_eq!(render(&grid, &r, start, end), "S*E\no#.\n...\n");
    }

    #[test]
    fn summary_names_algorithm() {
        let grid = Grid::new(1, 2);
        let r = bfs(&grid, Position::new(0, 0), Position::new(0, 1));
        let line = summary(Algorithm::Bfs, &r);
        assert!(line.starts_with("BFS"));
        assert!(line.contains("solved=true"));
        assert!(line.contains("path=2"));
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Debug);
        assert_eq!(level_for(5), LevelFilter::Trace);
    }

    #[test]
    fn logger_installs_once() {
        assert!(init_logging(0).is_ok());
        assert!(init_logging(2).is_err());
    }
}
