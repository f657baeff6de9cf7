use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that always succeeds without consuming input and returns a clone of its value
pub struct Always<T> {
    value: T,
}

impl<T> Always<T> {
    pub fn new(value: T) -> Self {
        Always { value }
    }
}

impl<'code, T> Parser<'code> for Always<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, _cursor: &mut Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(self.value.clone())
    }
}

/// Convenience function to create an Always parser
pub fn always<T: Clone>(value: T) -> Always<T> {
    Always::new(value)
}

/// Parser that always fails with [`ParseError::Never`] without consuming input
pub struct Never<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Never<T> {
    pub fn new() -> Self {
        Never {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Never<T> {
    fn default() -> Self {
        Never::new()
    }
}

impl<'code, T> Parser<'code> for Never<T> {
    type Output = T;

    fn parse(&self, _cursor: &mut Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Err(ParseError::Never)
    }
}

/// Convenience function to create a Never parser
pub fn never<T>() -> Never<T> {
    Never::new()
}
