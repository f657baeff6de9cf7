use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::parser::{BoxedExt, BoxedParser};
    use crate::utf8::{int, removing_literal};
    use crate::zip::zip3;

    /// nested := int | "(" nested ")"
    fn nested<'code>() -> BoxedParser<'code, i64> {
        int()
            .or(zip3(removing_literal("("), lazy(nested), removing_literal(")")).map(|((), n, ())| n))
            .boxed()
    }

    #[test]
    fn test_lazy_basic() {
        let parser = lazy(|| removing_literal("a"));
        let mut cursor = Cursor::new("aaaa");

        assert!(parser.parse(&mut cursor).is_ok());
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_lazy_recursion() {
        assert_eq!(nested().run("7").unwrap(), (7, ""));
        assert_eq!(nested().run("((42))x").unwrap(), (42, "x"));
        assert!(nested().run("((42)").is_err());
    }
}
