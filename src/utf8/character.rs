use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;

/// Parser that consumes and returns a single character
pub struct CharParser;

impl<'code> Parser<'code> for CharParser {
    type Output = char;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let ch = cursor.peek().ok_or(ParseError::EmptyInput)?;
        cursor.advance(ch.len_utf8());
        Ok(ch)
    }
}

/// Convenience function to create a CharParser
pub fn char() -> CharParser {
    CharParser
}
