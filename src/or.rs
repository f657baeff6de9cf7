use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both parsers start from the same cursor. If both fail the result is
/// [`ParseError::UnexpectedEnd`] holding both failures.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let start = *cursor;
        let first = match self.parser1.parse(cursor) {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        log::trace!("or: first alternative failed: {}", first);

        *cursor = start;
        match self.parser2.parse(cursor) {
            Ok(value) => Ok(value),
            Err(second) => {
                *cursor = start;
                Err(exhausted(start, vec![first, second]))
            }
        }
    }
}

/// Ordered choice over any number of parsers of the same type
///
/// Usually built over [`BoxedParser`](crate::BoxedParser)s so that
/// alternatives of different concrete types can share one list.
pub struct Choice<P> {
    alternatives: Vec<P>,
}

impl<P> Choice<P> {
    /// The list is never empty: `first` is always tried
    pub fn new(first: P, rest: impl IntoIterator<Item = P>) -> Self {
        let mut alternatives = vec![first];
        alternatives.extend(rest);
        Choice { alternatives }
    }
}

impl<'code, P> Parser<'code> for Choice<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let start = *cursor;
        let mut attempts = Vec::with_capacity(self.alternatives.len());

        for (index, alternative) in self.alternatives.iter().enumerate() {
            *cursor = start;
            match alternative.parse(cursor) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    log::trace!("choice: alternative {} failed: {}", index, err);
                    attempts.push(err);
                }
            }
        }

        *cursor = start;
        Err(exhausted(start, attempts))
    }
}

/// Build the error for a choice whose alternatives all failed
///
/// A nested choice that failed at the same position is spliced in, so
/// `a.or(b).or(c)` reports three attempts rather than two.
fn exhausted<'code>(start: Cursor<'code>, attempts: Vec<ParseError<'code>>) -> ParseError<'code> {
    let remaining = start.remaining();
    let mut flat = Vec::with_capacity(attempts.len());

    for attempt in attempts {
        match attempt {
            ParseError::UnexpectedEnd {
                remaining: nested,
                attempts: inner,
            } if nested.len() == remaining.len() => flat.extend(inner),
            other => flat.push(other),
        }
    }

    ParseError::UnexpectedEnd {
        remaining,
        attempts: flat,
    }
}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}

/// Convenience function to create a Choice parser
pub fn choice<'code, P>(first: P, rest: impl IntoIterator<Item = P>) -> Choice<P>
where
    P: Parser<'code>,
{
    Choice::new(first, rest)
}

/// Extension trait to add .or() and .or_any() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }

    /// Try `self`, then each of `others` in order
    fn or_any<I>(self, others: I) -> Choice<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        Choice::new(self, others)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}
