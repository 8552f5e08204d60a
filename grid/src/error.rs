use miette::Diagnostic;
use thiserror::Error;

pub type Result<T, E = GridError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum GridError {
    /// A row whose length differs from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    #[diagnostic(
        code(aoc_grid::ragged),
        help("every line of a grid must have the same number of characters")
    )]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("failed to parse grid: {message}")]
    #[diagnostic(code(aoc_grid::parse))]
    Parse { message: String },

    #[error("malformed coordinate key {key:?}: {message}")]
    #[diagnostic(
        code(aoc_grid::malformed_key),
        help("coordinate keys look like \"row,col\", e.g. \"10,20\"")
    )]
    MalformedKey { key: String, message: String },
}
