use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// The pair is one unit: if the second parser fails, whatever the first one
/// consumed is given back before the error is returned.
///
/// Example:
/// ```
/// use parsilite::parser::Parser;
/// use parsilite::utf8::{int, removing_literal};
/// use parsilite::zip::ZipExt;
///
/// let ((), age) = removing_literal("age: ").zip(int()).run("age: 90").unwrap().0;
/// assert_eq!(age, 90);
/// ```
pub struct Zip<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Zip<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Zip { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Zip<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let start = *cursor;
        let result1 = self.parser1.parse(cursor)?;
        match self.parser2.parse(cursor) {
            Ok(result2) => Ok((result1, result2)),
            Err(err) => {
                log::trace!(
                    "zip: second parser failed, rolling back {} bytes",
                    cursor.position().saturating_sub(start.position())
                );
                *cursor = start;
                Err(err)
            }
        }
    }
}

/// Three parsers in sequence, with a flat tuple as output
///
/// Built as `zip(a, zip(b, c))`, so a failure anywhere after `a` rolls back
/// to before `a`.
pub struct Zip3<P1, P2, P3> {
    inner: Zip<P1, Zip<P2, P3>>,
}

impl<P1, P2, P3> Zip3<P1, P2, P3> {
    pub fn new(parser1: P1, parser2: P2, parser3: P3) -> Self {
        Zip3 {
            inner: Zip::new(parser1, Zip::new(parser2, parser3)),
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Zip3<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    type Output = (P1::Output, P2::Output, P3::Output);

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (a, (b, c)) = self.inner.parse(cursor)?;
        Ok((a, b, c))
    }
}

/// Convenience function to create a Zip parser
pub fn zip<'code, P1, P2>(parser1: P1, parser2: P2) -> Zip<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Zip::new(parser1, parser2)
}

/// Convenience function to create a Zip3 parser
pub fn zip3<'code, P1, P2, P3>(parser1: P1, parser2: P2, parser3: P3) -> Zip3<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    Zip3::new(parser1, parser2, parser3)
}

/// Extension trait to add .zip() method support for parsers
pub trait ZipExt<'code>: Parser<'code> + Sized {
    fn zip<P>(self, other: P) -> Zip<Self, P>
    where
        P: Parser<'code>,
    {
        Zip::new(self, other)
    }
}

/// Implement ZipExt for all parsers
impl<'code, P> ZipExt<'code> for P where P: Parser<'code> {}
