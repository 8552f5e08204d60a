use glam::I64Vec2;
use strum::{Display, EnumIter, EnumString};

/// One of the eight compass unit steps. Rows grow downward, so `North` is `-1` row.
///
/// Parses from and prints as the short compass name (`"N"`, `"NE"`, ...).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    #[strum(to_string = "N")]
    North,
    #[strum(to_string = "NE")]
    NorthEast,
    #[strum(to_string = "E")]
    East,
    #[strum(to_string = "SE")]
    SouthEast,
    #[strum(to_string = "S")]
    South,
    #[strum(to_string = "SW")]
    SouthWest,
    #[strum(to_string = "W")]
    West,
    #[strum(to_string = "NW")]
    NorthWest,
}

/// The four axis-aligned steps, in N, S, E, W order.
pub const CARDINAL: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

/// All eight steps, clockwise from N.
pub const ALL: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

impl Direction {
    /// `(row, col)` delta of a single step.
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// The step as a vector with `x = col` and `y = row`.
    pub const fn vector(self) -> I64Vec2 {
        let (row, col) = self.offset();
        I64Vec2::new(col, row)
    }

    /// True for the four steps that change both row and column.
    pub const fn is_diagonal(self) -> bool {
        let (row, col) = self.offset();
        row != 0 && col != 0
    }

    /// The neighbor set used by the neighbor queries: [`ALL`] with diagonals,
    /// [`CARDINAL`] without.
    pub fn set(include_diagonals: bool) -> &'static [Direction] {
        if include_diagonals {
            &ALL
        } else {
            &CARDINAL
        }
    }
}
