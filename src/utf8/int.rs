use super::substring::substring;
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;

/// Parser that matches an unsigned run of numeric characters as an `i64`
///
/// The run is every leading character for which `char::is_numeric` holds. It
/// fails with [`ParseError::NotANumber`] when the run is empty or does not
/// convert to an `i64` (overflow, or numerals other than ASCII digits), and in
/// that case consumes nothing.
pub struct IntParser;

impl<'code> Parser<'code> for IntParser {
    type Output = i64;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let remaining = cursor.remaining();
        let mut lookahead = *cursor;
        let digits = substring(char::is_numeric).parse(&mut lookahead)?;

        let value = digits.parse::<i64>().map_err(|_| ParseError::NotANumber {
            digits,
            remaining,
        })?;

        *cursor = lookahead;
        Ok(value)
    }
}

/// Convenience function to create an IntParser
pub fn int() -> IntParser {
    IntParser
}
