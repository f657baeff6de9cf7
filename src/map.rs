use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;
use std::fmt::Display;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let value = self.parser.parse(cursor)?;
        Ok((self.mapper)(value))
    }
}

/// Like [`Map`], but the mapping function may reject the value
///
/// A rejection fails the parser with [`ParseError::Custom`]. The cursor is not
/// rolled back: the inner parser did match its input, only the conversion
/// failed.
pub struct TryMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> TryMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        TryMap { parser, mapper }
    }
}

impl<'code, P, F, U, E> Parser<'code> for TryMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Result<U, E>,
    E: Display,
{
    type Output = U;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let value = self.parser.parse(cursor)?;
        (self.mapper)(value).map_err(|err| ParseError::Custom {
            message: err.to_string().into(),
            remaining: cursor.remaining(),
        })
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() and .try_map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn try_map<F, U, E>(self, mapper: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, E>,
        E: Display,
    {
        TryMap::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::or::OrExt;
    use crate::utf8::{char, int, removing_literal, substring};

    #[derive(Debug, PartialEq)]
    enum Token {
        Letter(char),
        Number(i64),
    }

    #[test]
    fn test_map_char_to_enum() {
        let parser = char().map(Token::Letter);

        let (token, rest) = parser.run("X1").unwrap();
        assert_eq!(token, Token::Letter('X'));
        assert_eq!(rest, "1");
    }

    #[test]
    fn test_map_integer_to_string() {
        let parser = int().map(|num| format!("Number: {}", num));

        let (result, rest) = parser.run("123").unwrap();
        assert_eq!(result, "Number: 123");
        assert_eq!(rest, "");
    }

    #[test]
    fn test_map_chaining() {
        let parser = int()
            .map(|n| n * 2)
            .map(|n| n + 1)
            .map(|n| format!("Value: {}", n));

        let (result, _) = parser.run("5").unwrap();
        assert_eq!(result, "Value: 11");
    }

    #[test]
    fn test_map_with_or_common_enum() {
        let parser = int().map(Token::Number).or(char().map(Token::Letter));

        let (token, _) = parser.run("42").unwrap();
        assert_eq!(token, Token::Number(42));

        let (token, _) = parser.run("z").unwrap();
        assert_eq!(token, Token::Letter('z'));
    }

    #[test]
    fn test_map_preserves_errors() {
        let parser = removing_literal("A").map(|()| 'A');

        let err = parser.run("xyz").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LiteralNotFound);
    }

    #[test]
    fn test_function_syntax() {
        let parser = map(char(), |ch| ch.to_ascii_uppercase());

        let (ch, _) = parser.run("q").unwrap();
        assert_eq!(ch, 'Q');
    }

    #[test]
    fn test_try_map_success() {
        let parser = substring(|c| c.is_ascii_hexdigit())
            .try_map(|digits| i64::from_str_radix(digits, 16));

        let (value, rest) = parser.run("ff;").unwrap();
        assert_eq!(value, 255);
        assert_eq!(rest, ";");
    }

    #[test]
    fn test_try_map_failure_keeps_consumption() {
        let parser = int().try_map(|n| u8::try_from(n));
        let mut cursor = Cursor::new("300 left");

        let err = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Custom);
        assert_eq!(err.remaining(), Some(" left"));
        // The digits were matched, so they stay consumed
        assert_eq!(cursor.remaining(), " left");
    }
}
