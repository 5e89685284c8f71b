use std::fmt;
use sweeper_core::{Coord, Coord2};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Row => "row",
            Self::Col => "col",
        })
    }
}

/// Rejected input line. The message is shown to the player as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Enter two numbers; e.g.: 1 2")]
    WrongArity,
    #[error("Expected a number, got {0}")]
    NotANumber(String),
    #[error("Negative number: {0}")]
    Negative(i64),
    #[error("Out of bounds. Largest {axis} coord is {largest}")]
    OutOfBounds { axis: Axis, largest: Coord },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    ToggleFlag(Coord2),
}

/// Parses `row col` (reveal) or `f row col` (toggle flag) against a board of the given bounds.
///
/// The `f` prefix only counts on a three-token line, so `f 1` is a reveal with a non-numeric row. Tokens are
/// checked left to right and the first problem found is reported.
pub fn parse_line(line: &str, bounds: Coord2) -> Result<Command, InputError> {
    let words: Vec<&str> = line.split_whitespace().collect();

    let (flag, row, col) = match words.as_slice() {
        &["f" | "F", row, col] => (true, row, col),
        &[row, col] => (false, row, col),
        _ => return Err(InputError::WrongArity),
    };
    let coords = (
        parse_coord(row, Axis::Row, bounds.0)?,
        parse_coord(col, Axis::Col, bounds.1)?,
    );

    Ok(if flag {
        Command::ToggleFlag(coords)
    } else {
        Command::Reveal(coords)
    })
}

fn parse_coord(word: &str, axis: Axis, limit: Coord) -> Result<Coord, InputError> {
    let n: i64 = word
        .parse()
        .map_err(|_| InputError::NotANumber(word.to_owned()))?;
    if n < 0 {
        return Err(InputError::Negative(n));
    }

    match Coord::try_from(n) {
        Ok(coord) if coord < limit => Ok(coord),
        _ => Err(InputError::OutOfBounds {
            axis,
            largest: limit.saturating_sub(1),
        }),
    }
}
