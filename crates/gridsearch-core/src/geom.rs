//! Geometry primitives: [`Position`] and [`Direction`].
//!
//! Coordinates are `(row, col)`: rows grow downwards, columns grow to the
//! right. Positions may be constructed outside any grid; bounds are only
//! checked by [`Grid`](crate::Grid).

use std::fmt;
use std::hash::{Hash, Hasher};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A cell coordinate on a grid. Two positions are the same node iff their
/// coordinates match.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The position one step away in direction `d`.
    #[inline]
    pub const fn step(self, d: Direction) -> Self {
        let (drow, dcol) = d.offset();
        self.shift(drow, dcol)
    }

    /// The four cardinal neighbours in [`Direction::ALL`] order
    /// (east, south, west, north). Bounds are not checked.
    #[inline]
    pub const fn neighbors_4(self) -> [Position; 4] {
        [
            self.step(Direction::East),
            self.step(Direction::South),
            self.step(Direction::West),
            self.step(Direction::North),
        ]
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Position) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

// --- trait impls for Position ---

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.col.hash(state);
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major order: row first, then column.
impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Position> for (i32, i32) {
    #[inline]
    fn from(p: Position) -> Self {
        (p.row, p.col)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four unit moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    /// Expansion order used by every search. Changing it changes tie-breaks
    /// and therefore every recorded exploration trace.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// `(drow, dcol)` for this direction.
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::North => (-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_and_step() {
        let a = Position::new(1, 2);
        assert_eq!(a.shift(-1, 1), Position::new(0, 3));
        assert_eq!(a.step(Direction::North), Position::new(0, 2));
        assert_eq!(a.step(Direction::East), Position::new(1, 3));
    }

    #[test]
    fn neighbors_follow_east_south_west_north() {
        let p = Position::new(5, 5);
        assert_eq!(
            p.neighbors_4(),
            [
                Position::new(5, 6),
                Position::new(6, 5),
                Position::new(5, 4),
                Position::new(4, 5),
            ]
        );
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 1),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0),
            ]
        );
    }

    #[test]
    fn adjacency() {
        let p = Position::new(2, 2);
        for n in p.neighbors_4() {
            assert!(p.is_adjacent(n));
        }
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Position::new(3, 3)));
    }

    #[test]
    fn display_and_tuple_conversions() {
        let p = Position::from((3, 7));
        assert_eq!(p.to_string(), "(3, 7)");
        assert_eq!(<(i32, i32)>::from(p), (3, 7));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn position_serializes_as_row_col() {
        let p = Position::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"row":3,"col":7}"#);
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
