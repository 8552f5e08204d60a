use std::fmt;
use std::ops::Add;

use glam::I64Vec2;

use crate::direction::Direction;
use crate::error::Result;
use crate::parse;

/// A zero-based `(row, col)` cell position. Rows grow downward, columns rightward.
///
/// The derived ordering is row-major, the same order the grid scans in.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Coord {
    pub row: i64,
    pub col: i64,
}

impl Coord {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// As a vector with `x = col` and `y = row`.
    pub const fn as_vec(self) -> I64Vec2 {
        I64Vec2::new(self.col, self.row)
    }

    /// One step in `direction`, or `None` if either component would overflow.
    pub fn checked_add(self, direction: Direction) -> Option<Coord> {
        let (row, col) = direction.offset();
        Some(Coord::new(
            self.row.checked_add(row)?,
            self.col.checked_add(col)?,
        ))
    }
}

impl From<(i64, i64)> for Coord {
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}

impl From<I64Vec2> for Coord {
    fn from(v: I64Vec2) -> Self {
        Self::new(v.y, v.x)
    }
}

impl From<Coord> for I64Vec2 {
    fn from(c: Coord) -> Self {
        c.as_vec()
    }
}

/// Unchecked step; the result may lie outside any grid. Overflows at the `i64`
/// limits, see [`Coord::checked_add`].
impl Add<Direction> for Coord {
    type Output = Coord;

    fn add(self, direction: Direction) -> Coord {
        Coord::from(self.as_vec() + direction.vector())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

pub fn manhattan_distance(a: Coord, b: Coord) -> i64 {
    (a.as_vec() - b.as_vec()).abs().element_sum()
}

/// Largest per-axis difference, i.e. king moves on a chessboard.
pub fn chebyshev_distance(a: Coord, b: Coord) -> i64 {
    (a.as_vec() - b.as_vec()).abs().max_element()
}

/// Canonical `"row,col"` key, the inverse of [`parse_coord_key`].
pub fn coord_key(coord: Coord) -> String {
    coord.to_string()
}

/// Parses a key produced by [`coord_key`].
///
/// Both components must be integers (an optional leading `-` is allowed and
/// surrounding whitespace is ignored). Anything else is
/// [`GridError::MalformedKey`](crate::GridError::MalformedKey).
pub fn parse_coord_key(key: &str) -> Result<Coord> {
    parse::coord_key(key)
}
