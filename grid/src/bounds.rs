//! Bounds helpers that only need the grid's dimensions, not its cells.
//!
//! [`in_bounds`] is the one place that decides whether a position lies inside a
//! `rows x cols` area; [`Grid`](crate::Grid) delegates to it as well.

use crate::coord::Coord;
use crate::direction::Direction;

/// True iff `0 <= row < rows` and `0 <= col < cols`.
pub fn in_bounds(row: i64, col: i64, rows: usize, cols: usize) -> bool {
    usize::try_from(row).is_ok_and(|r| r < rows) && usize::try_from(col).is_ok_and(|c| c < cols)
}

/// In-bounds neighbors of `(row, col)`, in [`CARDINAL`](crate::CARDINAL) or
/// [`ALL`](crate::ALL) order.
pub fn neighbors(
    row: i64,
    col: i64,
    rows: usize,
    cols: usize,
    include_diagonals: bool,
) -> Vec<Coord> {
    let origin = Coord::new(row, col);
    Direction::set(include_diagonals)
        .iter()
        .filter_map(|&direction| origin.checked_add(direction))
        .filter(|c| in_bounds(c.row, c.col, rows, cols))
        .collect()
}
