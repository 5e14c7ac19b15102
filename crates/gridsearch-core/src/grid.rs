//! The [`Grid`] type — a rectangular occupancy grid of [`Tile`]s.
//!
//! A `Grid` owns its cells in a flat row-major buffer and has no interior
//! mutability, so a single grid can be borrowed by any number of concurrent
//! searches.

use std::fmt;

use crate::geom::Position;

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// State of a single grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Open,
    Wall,
}

impl Tile {
    /// Decode the wire representation (`0` open, `1` wall).
    #[inline]
    pub const fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Tile::Open),
            1 => Some(Tile::Wall),
            _ => None,
        }
    }

    /// ASCII representation used by [`Grid::parse`] and `Display`.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Tile::Open => '.',
            Tile::Wall => '#',
        }
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors that can occur when building a grid from external data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has zero rows or zero columns.
    Empty,
    /// Row `row` has `len` cells where `expected` were required.
    Ragged { row: usize, len: usize, expected: usize },
    /// A numeric cell value other than 0 or 1.
    InvalidCell { pos: Position, value: u8 },
    /// A character other than `.` or `#` in an ASCII grid.
    InvalidChar { pos: Position, ch: char },
    /// More rows or columns than a [`Position`] coordinate can address.
    TooLarge { rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no rows or no columns"),
            Self::Ragged { row, len, expected } => {
                write!(f, "grid: row {row} has {len} cells, expected {expected}")
            }
            Self::InvalidCell { pos, value } => {
                write!(f, "grid: invalid cell value {value} at {pos}")
            }
            Self::InvalidChar { pos, ch } => {
                write!(f, "grid: invalid character '{ch}' at {pos}")
            }
            Self::TooLarge { rows, cols } => {
                write!(f, "grid: {rows}x{cols} exceeds {} cells per side", i32::MAX)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Checked conversion of buffer dimensions to coordinate range.
fn dimensions(rows: usize, cols: usize) -> Result<(i32, i32), GridError> {
    match (i32::try_from(rows), i32::try_from(cols)) {
        (Ok(r), Ok(c)) => Ok((r, c)),
        _ => Err(GridError::TooLarge { rows, cols }),
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular `rows × cols` occupancy grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Tile>,
    rows: i32,
    cols: i32,
}

impl Grid {
    /// Create an all-open grid. Negative dimensions are clamped to zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Self {
            tiles: vec![Tile::Open; (rows as usize) * (cols as usize)],
            rows,
            cols,
        }
    }

    /// Build a grid from rows of `0` (open) / `1` (wall) values.
    ///
    /// Every row must have the length of the first one.
    pub fn from_rows<R: AsRef<[u8]>>(data: &[R]) -> Result<Self, GridError> {
        let expected = data.first().map_or(0, |r| r.as_ref().len());
        if expected == 0 {
            return Err(GridError::Empty);
        }
        let (rows, cols) = dimensions(data.len(), expected)?;
        let mut tiles = Vec::with_capacity(data.len() * expected);
        for ((i, row), r) in data.iter().enumerate().zip(0..rows) {
            let row = row.as_ref();
            if row.len() != expected {
                return Err(GridError::Ragged {
                    row: i,
                    len: row.len(),
                    expected,
                });
            }
            for (&value, c) in row.iter().zip(0..cols) {
                let tile = Tile::from_u8(value).ok_or(GridError::InvalidCell {
                    pos: Position::new(r, c),
                    value,
                })?;
                tiles.push(tile);
            }
        }
        Ok(Self { tiles, rows, cols })
    }

    /// Parse an ASCII grid: `.` is open, `#` is a wall, one line per row.
    /// Blank lines and surrounding whitespace are ignored.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let expected = lines.first().map_or(0, |l| l.chars().count());
        if expected == 0 {
            return Err(GridError::Empty);
        }
        let (rows, cols) = dimensions(lines.len(), expected)?;
        let mut tiles = Vec::with_capacity(lines.len() * expected);
        for ((i, line), r) in lines.iter().enumerate().zip(0..rows) {
            let len = line.chars().count();
            if len != expected {
                return Err(GridError::Ragged { row: i, len, expected });
            }
            for (ch, c) in line.chars().zip(0..cols) {
                let tile = match ch {
                    '.' => Tile::Open,
                    '#' => Tile::Wall,
                    _ => {
                        return Err(GridError::InvalidChar {
                            pos: Position::new(r, c),
                            ch,
                        });
                    }
                };
                tiles.push(tile);
            }
        }
        Ok(Self { tiles, rows, cols })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `p` lies inside `[0, rows) × [0, cols)`.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.rows && p.col < self.cols
    }

    /// Convert a `Position` to a flat row-major index. `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Position) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.row as usize) * (self.cols as usize) + p.col as usize)
    }

    /// Convert a flat index back to a `Position`.
    #[inline]
    pub fn position(&self, idx: usize) -> Position {
        let cols = self.cols as usize;
        Position::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// The tile at `p`, or `None` if `p` is out of bounds.
    #[inline]
    pub fn at(&self, p: Position) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn is_open(&self, p: Position) -> bool {
        self.at(p) == Some(Tile::Open)
    }

    /// Set the tile at `p`. No-op if `p` is outside bounds.
    pub fn set(&mut self, p: Position, tile: Tile) {
        if let Some(i) = self.index(p) {
            self.tiles[i] = tile;
        }
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.tiles.iter().filter(|&&t| t == Tile::Open).count()
    }

    /// Row-major iterator over `(Position, Tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, &t)| (self.position(i), t))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.cols.max(1) as usize) {
            for t in row {
                write!(f, "{}", t.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_new_is_open() {
        let g = Grid::new(3, 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.len(), 12);
        assert_eq!(g.open_count(), 12);
        assert!(g.is_open(Position::new(2, 3)));
    }

    #[test]
    fn is_open_checks_bounds_and_walls() {
        let mut g = Grid::new(2, 2);
        g.set(Position::new(1, 0), Tile::Wall);
        assert!(g.is_open(Position::new(0, 0)));
        assert!(!g.is_open(Position::new(1, 0)));
        assert!(!g.is_open(Position::new(-1, 0)));
        assert!(!g.is_open(Position::new(0, 2)));
        assert!(!g.is_open(Position::new(2, 0)));
        // out of bounds set is a no-op
        g.set(Position::new(5, 5), Tile::Wall);
        assert_eq!(g.open_count(), 3);
    }

    #[test]
    fn index_round_trips() {
        let g = Grid::new(3, 5);
        for (i, (p, _)) in g.iter().enumerate() {
            assert_eq!(g.index(p), Some(i));
            assert_eq!(g.position(i), p);
        }
        assert_eq!(g.index(Position::new(3, 0)), None);
    }

    #[test]
    fn from_rows_reads_walls() {
        let g = Grid::from_rows(&[vec![0u8, 1], vec![0, 0]]).unwrap();
        assert_eq!(g.at(Position::new(0, 1)), Some(Tile::Wall));
        assert_eq!(g.at(Position::new(1, 1)), Some(Tile::Open));
        assert_eq!(g.at(Position::new(2, 1)), None);
    }

    #[test]
    fn from_rows_rejects_ragged_and_bad_values() {
        assert_eq!(
            Grid::from_rows(&[vec![0u8, 0], vec![0]]),
            Err(GridError::Ragged {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(
            Grid::from_rows(&[vec![0u8, 2]]),
            Err(GridError::InvalidCell {
                pos: Position::new(0, 1),
                value: 2
            })
        );
        let empty: [Vec<u8>; 0] = [];
        assert_eq!(Grid::from_rows(&empty), Err(GridError::Empty));
    }

    #[test]
    fn parse_and_display_round_trip() {
        let src = "\
..#
.#.
#..
";
        let g = Grid::parse(src).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.open_count(), 6);
        assert_eq!(g.to_string(), src);
    }

    #[test]
    fn parse_rejects_unknown_char() {
        let err = Grid::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidChar {
                pos: Position::new(1, 1),
                ch: 'x'
            }
        );
        assert_eq!(err.to_string(), "grid: invalid character 'x' at (1, 1)");
    }

    #[test]
    fn dimensions_beyond_i32_are_rejected() {
        let wide = i32::MAX as usize + 1;
        assert_eq!(dimensions(3, 4), Ok((3, 4)));
        assert_eq!(
            dimensions(1, wide),
            Err(GridError::TooLarge { rows: 1, cols: wide })
        );
        assert_eq!(
            dimensions(wide, 1),
            Err(GridError::TooLarge { rows: wide, cols: 1 })
        );
        assert_eq!(dimensions(i32::MAX as usize, 1), Ok((i32::MAX, 1)));
    }

    #[test]
    fn grid_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Grid>();
    }
}
