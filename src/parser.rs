use crate::cursor::Cursor;
use crate::error::ParseResult;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse at the given cursor
    ///
    /// On success the cursor is advanced past the matched input. On failure
    /// the cursor should be left where it was; combinators document where
    /// they deviate from this.
    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<'code, Self::Output>;

    /// Parse `input` from its start, returning the value and the unconsumed rest
    ///
    /// Trailing input is not an error here; callers decide what to do with it.
    fn run(&self, input: &'code str) -> ParseResult<'code, (Self::Output, &'code str)> {
        let mut cursor = Cursor::new(input);
        let output = self.parse(&mut cursor)?;
        log::trace!(
            "run: consumed {} of {} bytes",
            cursor.position(),
            input.len()
        );
        Ok((output, cursor.remaining()))
    }
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// A type-erased parser, for storing grammars and mixing alternatives
pub type BoxedParser<'code, O> = Box<dyn Parser<'code, Output = O> + 'code>;

/// A type-erased parser that can be shared across threads
pub type SyncBoxedParser<'code, O> = Box<dyn Parser<'code, Output = O> + Send + Sync + 'code>;

/// Extension trait to add .boxed() and .boxed_sync() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        Box::new(self)
    }

    fn boxed_sync(self) -> SyncBoxedParser<'code, Self::Output>
    where
        Self: Send + Sync,
    {
        Box::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}

/// Parser backed by a plain function or closure
pub struct FromFn<F> {
    function: F,
}

impl<'code, F, O> Parser<'code> for FromFn<F>
where
    F: Fn(&mut Cursor<'code>) -> ParseResult<'code, O>,
{
    type Output = O;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (self.function)(cursor)
    }
}

/// Turn a function over the cursor into a parser
///
/// The function takes on the parser contract: advance on success, leave the
/// cursor alone on failure.
pub fn from_fn<'code, F, O>(function: F) -> FromFn<F>
where
    F: Fn(&mut Cursor<'code>) -> ParseResult<'code, O>,
{
    FromFn { function }
}
