//! Parsing layout text into a seat grid.

use crate::seat::Seat;
use roost_grid::Grid;
use std::fmt;

/// Errors detected while parsing layout text.
///
/// Parsing fails fast: the grid is only constructed once every line has
/// been checked, so downstream code never sees a partially valid layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input contains no non-blank lines.
    EmptyLayout,
    /// A line's width differs from the first line's.
    RaggedLine {
        /// 1-based position of the line among the non-blank lines.
        line: usize,
        /// Width of the first line.
        expected: usize,
        /// Width of the offending line.
        got: usize,
    },
    /// A character outside the `.`/`L`/`#` alphabet.
    UnknownSymbol {
        /// 1-based position of the line among the non-blank lines.
        line: usize,
        /// 1-based column of the offending character.
        column: usize,
        /// The offending character.
        symbol: char,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLayout => write!(f, "layout contains no rows"),
            Self::RaggedLine {
                line,
                expected,
                got,
            } => {
                write!(f, "line {line} has width {got}, expected {expected}")
            }
            Self::UnknownSymbol {
                line,
                column,
                symbol,
            } => {
                write!(f, "line {line}, column {column}: unknown symbol {symbol:?}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse layout text into a grid of [`Seat`] cells.
///
/// Each non-blank line becomes one grid row; blank lines are skipped.
/// All lines must share the first line's width, and every character must
/// be one of `.` (floor), `L` (empty seat), `#` (occupied seat). The
/// resulting grid has one row per non-blank line and the first line's
/// width as its column count, with each cell equal to the symbol parsed
/// at its position.
pub fn parse_layout(input: &str) -> Result<Grid<Seat>, ParseError> {
    let mut rows: Vec<Vec<Seat>> = Vec::new();
    let mut expected = 0;
    for (line_idx, line) in input.lines().filter(|line| !line.is_empty()).enumerate() {
        let width = line.chars().count();
        if line_idx == 0 {
            expected = width;
        } else if width != expected {
            return Err(ParseError::RaggedLine {
                line: line_idx + 1,
                expected,
                got: width,
            });
        }
        let mut row = Vec::with_capacity(width);
        for (col_idx, symbol) in line.chars().enumerate() {
            let seat = Seat::from_symbol(symbol).ok_or(ParseError::UnknownSymbol {
                line: line_idx + 1,
                column: col_idx + 1,
                symbol,
            })?;
            row.push(seat);
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(ParseError::EmptyLayout);
    }
    Ok(Grid::from_rows(rows).expect("rows validated during parsing"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dimensions_and_cells() {
        let g = parse_layout("L.#\n#L.\n").unwrap();
        assert_eq!((g.rows(), g.cols()), (2, 3));
        assert_eq!(*g.get(0, 0).unwrap(), Seat::Empty);
        assert_eq!(*g.get(0, 1).unwrap(), Seat::Floor);
        assert_eq!(*g.get(0, 2).unwrap(), Seat::Occupied);
        assert_eq!(*g.get(1, 0).unwrap(), Seat::Occupied);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let g = parse_layout("\nLL\n\nLL\n\n").unwrap();
        assert_eq!((g.rows(), g.cols()), (2, 2));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(parse_layout(""), Err(ParseError::EmptyLayout));
        assert_eq!(parse_layout("\n\n"), Err(ParseError::EmptyLayout));
    }

    #[test]
    fn ragged_lines_are_rejected_with_position() {
        assert_eq!(
            parse_layout("LLL\nLL\n"),
            Err(ParseError::RaggedLine {
                line: 2,
                expected: 3,
                got: 2,
            })
        );
    }

    #[test]
    fn unknown_symbols_are_rejected_with_position() {
        assert_eq!(
            parse_layout("LL\nLx\n"),
            Err(ParseError::UnknownSymbol {
                line: 2,
                column: 2,
                symbol: 'x',
            })
        );
    }

    #[test]
    fn parse_and_render_agree() {
        let text = "L.LL\n#..#\nLLLL\n";
        assert_eq!(parse_layout(text).unwrap().to_string(), text);
    }
}
