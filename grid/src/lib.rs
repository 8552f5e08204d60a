//! Bounds-checked 2D grids for puzzle inputs.
//!
//! Out-of-bounds reads give `None` and out-of-bounds writes are ignored, so code
//! walking the edge of a map doesn't need any special cases. The only fallible
//! operations are building a grid from text and parsing coordinate keys.

pub mod bounds;
pub mod coord;
pub mod direction;
pub mod error;
pub mod grid;
mod parse;

pub use bounds::{in_bounds, neighbors};
pub use coord::{chebyshev_distance, coord_key, manhattan_distance, parse_coord_key, Coord};
pub use direction::{Direction, ALL, CARDINAL};
pub use error::{GridError, Result};
pub use grid::Grid;

#[cfg(test)]
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}
