use chumsky::prelude::*;
use itertools::Itertools;

use crate::coord::Coord;
use crate::error::{GridError, Result};

/// One `(line index, cells)` pair per line. Empty lines are dropped, which also
/// takes care of the trailing newline at EOF; the index still counts them.
fn rows_parser<'a>(
) -> impl Parser<'a, &'a str, Vec<(usize, Vec<char>)>, extra::Err<Rich<'a, char>>> {
    none_of("\r\n")
        .repeated()
        .collect::<Vec<char>>()
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
        .map(|rows| {
            rows.into_iter()
                .enumerate()
                .filter(|(_, r)| !r.is_empty())
                .collect()
        })
}

fn coord_key_parser<'a>() -> impl Parser<'a, &'a str, Coord, extra::Err<Rich<'a, char>>> {
    let int = just('-')
        .or_not()
        .then(text::int(10))
        .to_slice()
        .try_map(|digits: &str, span| {
            digits
                .parse::<i64>()
                .map_err(|e| Rich::custom(span, e))
        })
        .padded();

    int.clone()
        .then_ignore(just(','))
        .then(int)
        .map(|(row, col)| Coord::new(row, col))
}

fn render_errors(errors: Vec<Rich<'_, char>>) -> String {
    errors.iter().map(ToString::to_string).join("; ")
}

#[tracing::instrument(skip(input), fields(len = input.len()))]
pub(crate) fn char_rows(input: &str) -> Result<Vec<(usize, Vec<char>)>> {
    rows_parser()
        .parse(input)
        .into_result()
        .map_err(|e| GridError::Parse {
            message: render_errors(e),
        })
}

pub(crate) fn coord_key(key: &str) -> Result<Coord> {
    coord_key_parser()
        .parse(key)
        .into_result()
        .map_err(|e| GridError::MalformedKey {
            key: key.to_string(),
            message: render_errors(e),
        })
}
