use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that consumes an exact string and yields nothing
pub struct RemovingLiteral {
    expected: Cow<'static, str>,
}

impl RemovingLiteral {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for RemovingLiteral {
    type Output = ();

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let remaining = cursor.remaining();
        if !remaining.starts_with(self.expected.as_ref()) {
            return Err(ParseError::LiteralNotFound {
                expected: self.expected.clone(),
                remaining,
            });
        }

        cursor.advance(self.expected.len());
        Ok(())
    }
}

/// Convenience function to create a RemovingLiteral parser
pub fn removing_literal(expected: impl Into<Cow<'static, str>>) -> RemovingLiteral {
    RemovingLiteral::new(expected)
}
