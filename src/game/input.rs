use std::str::FromStr;

use super::error::{Error, GameResult};

/// Read one line from stdin with the trailing newline removed.
///
/// Returns `None` once stdin is exhausted (or unreadable); callers treat
/// that like the end command so a closed stream still exits cleanly.
pub(super) fn read_line() -> Option<String> {
    let mut buf = String::new();
    match std::io::stdin().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            if buf.ends_with('\n') {
                buf.pop();
                if buf.ends_with('\r') {
                    buf.pop();
                }
            }
            Some(buf)
        }
    }
}

/// Board dimensions as entered at the dimension prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl FromStr for Dimensions {
    type Err = Error;

    /// Parses `ROWSxCOLUMNS`: digits, an `x` or `X` separator, digits,
    /// with optional whitespace around the separator. The caller trims the
    /// line before handing it over. Range checking belongs to the board;
    /// a numeral too large for `usize` maps straight to the range error.
    fn from_str(s: &str) -> GameResult<Self> {
        let (rows, columns) = s.split_once(['x', 'X']).ok_or(Error::InvalidInput)?;
        let rows = rows.trim_end();
        let columns = columns.trim_start();
        if rows.is_empty()
            || columns.is_empty()
            || !rows.bytes().all(|b| b.is_ascii_digit())
            || !columns.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(Error::InvalidInput);
        }
        let rows = rows.parse().map_err(|_| Error::InvalidRows)?;
        let columns = columns.parse().map_err(|_| Error::InvalidColumns)?;
        Ok(Self { rows, columns })
    }
}

/// Parse the number-of-games prompt.
///
/// The line must consist of the digits 1 through 9, one or more of them.
// TODO the accepted pattern rejects any count containing a zero ("10") while
// "11" passes; decide whether zeros after the first digit should be allowed.
pub(super) fn parse_game_total(s: &str) -> GameResult<usize> {
    if s.is_empty() || !s.bytes().all(|b| matches!(b, b'1'..=b'9')) {
        return Err(Error::InvalidInput);
    }
    s.parse().map_err(|_| Error::InvalidInput)
}

/// A line entered at the turn prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TurnInput {
    /// One indexed column number.
    Col(usize),
    /// Abort the whole match.
    End,
}

impl FromStr for TurnInput {
    type Err = Error;

    /// Case-insensitive `end`, or a bare run of digits. The line is not
    /// trimmed, so stray whitespace rejects it.
    fn from_str(s: &str) -> GameResult<Self> {
        let s = s.to_lowercase();
        if s == "end" {
            return Ok(Self::End);
        }
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::IncorrectColumn);
        }
        s.parse().map(Self::Col).map_err(|_| Error::IncorrectColumn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_accept_the_rows_x_columns_pattern() {
        let dims = "6x7".parse::<Dimensions>().unwrap();
        assert_eq!(dims, Dimensions { rows: 6, columns: 7 });
        assert_eq!(
            "6 X 7".parse::<Dimensions>().unwrap(),
            Dimensions { rows: 6, columns: 7 }
        );
        assert_eq!(
            "9x5".parse::<Dimensions>().unwrap(),
            Dimensions { rows: 9, columns: 5 }
        );
    }

    #[test]
    fn dimensions_reject_malformed_lines() {
        for line in ["", "6", "x7", "6x", "6 7", "ax7", "6xb", "6x7x8", "6.5x7"] {
            assert_eq!(
                line.parse::<Dimensions>().unwrap_err(),
                Error::InvalidInput,
                "line {line:?}"
            );
        }
    }

    #[test]
    fn dimensions_do_not_range_check() {
        // out of range values parse fine, the board rejects them later
        assert_eq!(
            "4x7".parse::<Dimensions>().unwrap(),
            Dimensions { rows: 4, columns: 7 }
        );
    }

    #[test]
    fn oversized_dimension_numerals_map_to_the_range_errors() {
        let huge = "99999999999999999999";
        assert_eq!(
            format!("{huge}x7").parse::<Dimensions>().unwrap_err(),
            Error::InvalidRows
        );
        assert_eq!(
            format!("6x{huge}").parse::<Dimensions>().unwrap_err(),
            Error::InvalidColumns
        );
    }

    #[test]
    fn game_total_accepts_digits_one_through_nine() {
        assert_eq!(parse_game_total("1").unwrap(), 1);
        assert_eq!(parse_game_total("9").unwrap(), 9);
        assert_eq!(parse_game_total("11").unwrap(), 11);
    }

    #[test]
    fn game_total_rejects_zeros_and_junk() {
        for line in ["0", "10", "20", "abc", "", "1 ", " 1", "-1", "1.5"] {
            assert_eq!(
                parse_game_total(line).unwrap_err(),
                Error::InvalidInput,
                "line {line:?}"
            );
        }
    }

    #[test]
    fn turn_input_parses_end_case_insensitively() {
        assert_eq!("end".parse::<TurnInput>().unwrap(), TurnInput::End);
        assert_eq!("END".parse::<TurnInput>().unwrap(), TurnInput::End);
        assert_eq!("eNd".parse::<TurnInput>().unwrap(), TurnInput::End);
    }

    #[test]
    fn turn_input_parses_bare_numbers() {
        assert_eq!("3".parse::<TurnInput>().unwrap(), TurnInput::Col(3));
        // leading zeros are digits too
        assert_eq!("007".parse::<TurnInput>().unwrap(), TurnInput::Col(7));
        // zero parses, the range check rejects it afterwards
        assert_eq!("0".parse::<TurnInput>().unwrap(), TurnInput::Col(0));
    }

    #[test]
    fn turn_input_rejects_everything_else() {
        for line in ["", " 3", "3 ", "end ", "-1", "1a", "one"] {
            assert_eq!(
                line.parse::<TurnInput>().unwrap_err(),
                Error::IncorrectColumn,
                "line {line:?}"
            );
        }
    }
}
