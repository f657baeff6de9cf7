use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser that consumes the longest run of characters matching a predicate
///
/// The run may be empty, so this parser never fails. Combine it with
/// [`filter`](crate::filter::filter) when at least one character is required.
pub struct Substring<F> {
    predicate: F,
}

impl<F> Substring<F> {
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<'code, F> Parser<'code> for Substring<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let remaining = cursor.remaining();
        let end = remaining
            .char_indices()
            .find(|&(_, ch)| !(self.predicate)(ch))
            .map_or(remaining.len(), |(index, _)| index);

        cursor.advance(end);
        Ok(&remaining[..end])
    }
}

/// Convenience function to create a Substring parser
pub fn substring<F>(predicate: F) -> Substring<F>
where
    F: Fn(char) -> bool,
{
    Substring::new(predicate)
}
