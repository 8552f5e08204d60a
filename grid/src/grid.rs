use std::fmt;
use std::str::FromStr;

use itertools::{iproduct, Itertools};

use crate::bounds;
use crate::coord::Coord;
use crate::direction::Direction;
use crate::error::{GridError, Result};
use crate::parse;

/// A rectangular, row-major grid of cells.
///
/// The shape is fixed at construction. Cell contents can be changed through
/// [`Grid::set`] and [`Grid::get_mut`]. Nothing here panics on an out-of-bounds
/// position: reads give `None` and writes are dropped.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl Grid<char> {
    /// One cell per character, one row per line.
    ///
    /// The width comes from the first line; any later line of a different length is
    /// rejected with [`GridError::Ragged`]. No lines at all gives a `0 x 0` grid.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_rows(
            lines
                .into_iter()
                .map(|line| line.as_ref().chars().collect())
                .enumerate()
                .collect(),
        )
    }

    /// Parses raw puzzle text. Blank lines (including a trailing newline) are skipped
    /// and both LF and CRLF line endings are accepted. [`GridError::Ragged`] reports
    /// the zero-based line of the input, blank lines included.
    pub fn parse(input: &str) -> Result<Self> {
        Self::from_rows(parse::char_rows(input)?)
    }
}

impl FromStr for Grid<char> {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<T> Grid<T> {
    /// `rows` pairs each row with the input line it came from, for error reporting.
    fn from_rows(rows: Vec<(usize, Vec<T>)>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|(_, r)| r.len()).unwrap_or(0);

        if let Some((row, found)) = rows
            .iter()
            .map(|(line, r)| (*line, r.len()))
            .find(|&(_, len)| len != width)
        {
            return Err(GridError::Ragged {
                row,
                expected: width,
                found,
            });
        }

        tracing::debug!(rows = height, cols = width, "built grid");
        Ok(Self {
            rows: height,
            cols: width,
            cells: rows.into_iter().flat_map(|(_, r)| r).collect(),
        })
    }

    /// Every cell starts as its own clone of `value`.
    pub fn create(rows: usize, cols: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    /// Builds each cell from its coordinate, in row-major order.
    pub fn from_fn(rows: usize, cols: usize, f: impl FnMut(Coord) -> T) -> Self {
        Self {
            rows,
            cols,
            cells: coords(rows, cols).map(f).collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        bounds::in_bounds(row, col, self.rows, self.cols)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.in_bounds(coord.row, coord.col)
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        // in bounds, so both components are non-negative and fit in usize
        self.contains(coord)
            .then(|| coord.row as usize * self.cols + coord.col as usize)
    }

    pub fn get(&self, row: i64, col: i64) -> Option<&T> {
        self.get_coord(Coord::new(row, col))
    }

    pub fn get_coord(&self, coord: Coord) -> Option<&T> {
        self.index_of(coord).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, row: i64, col: i64) -> Option<&mut T> {
        self.get_coord_mut(Coord::new(row, col))
    }

    pub fn get_coord_mut(&mut self, coord: Coord) -> Option<&mut T> {
        self.index_of(coord).map(|i| &mut self.cells[i])
    }

    /// Writes the cell, or does nothing if `(row, col)` is outside the grid.
    pub fn set(&mut self, row: i64, col: i64, value: T) {
        self.set_coord(Coord::new(row, col), value);
    }

    pub fn set_coord(&mut self, coord: Coord, value: T) {
        match self.get_coord_mut(coord) {
            Some(cell) => *cell = value,
            None => tracing::trace!(%coord, "ignoring out-of-bounds write"),
        }
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Rows as slices, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| &self.cells[r * self.cols..(r + 1) * self.cols])
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        coords(self.rows, self.cols)
    }

    /// `(coord, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        self.coords().zip(self.cells.iter())
    }

    /// In-bounds neighbors with their values, in [`CARDINAL`](crate::CARDINAL) or
    /// [`ALL`](crate::ALL) order.
    pub fn neighbors(&self, coord: Coord, include_diagonals: bool) -> Vec<(Coord, &T)> {
        Direction::set(include_diagonals)
            .iter()
            .filter_map(|&direction| {
                let next = coord.checked_add(direction)?;
                self.get_coord(next).map(|value| (next, value))
            })
            .collect()
    }

    pub fn neighbor_coords(&self, coord: Coord, include_diagonals: bool) -> Vec<Coord> {
        self.neighbors(coord, include_diagonals)
            .into_iter()
            .map(|(c, _)| c)
            .collect()
    }

    /// One step in `direction`, or `None` if that leaves the grid.
    pub fn step(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        coord
            .checked_add(direction)
            .filter(|&next| self.contains(next))
    }

    pub fn find_all(&self, mut predicate: impl FnMut(&T, Coord) -> bool) -> Vec<Coord> {
        self.iter()
            .filter(|&(coord, value)| predicate(value, coord))
            .map(|(coord, _)| coord)
            .collect()
    }

    /// First match in row-major order. Stops scanning at the match.
    pub fn find(&self, mut predicate: impl FnMut(&T, Coord) -> bool) -> Option<Coord> {
        self.iter()
            .find(|&(coord, value)| predicate(value, coord))
            .map(|(coord, _)| coord)
    }

    pub fn for_each(&self, mut f: impl FnMut(&T, Coord)) {
        self.iter().for_each(|(coord, value)| f(value, coord));
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T, Coord) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.iter().map(|(coord, value)| f(value, coord)).collect(),
        }
    }

    /// Like `Display`, but with a custom per-cell rendering. The text is also
    /// logged at debug level.
    pub fn render_with(&self, f: impl Fn(&T) -> String) -> String {
        let text = self
            .iter_rows()
            .map(|row| row.iter().map(&f).join(""))
            .join("\n");
        tracing::debug!("\n{text}");
        text
    }
}

fn coords(rows: usize, cols: usize) -> impl Iterator<Item = Coord> {
    iproduct!(0..rows, 0..cols).map(|(row, col)| Coord::new(row as i64, col as i64))
}

/// Rows joined by `\n`, no separator between cells.
impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.iter_rows().map(|row| row.iter().join("")).join("\n")
        )
    }
}
