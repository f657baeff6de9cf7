use super::literal::removing_literal;
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::Parser;

/// Parser for `true`/`True` and `false`/`False`
///
/// On failure the error is [`UnexpectedEnd`](crate::ParseError::UnexpectedEnd)
/// with one [`LiteralNotFound`](crate::ParseError::LiteralNotFound) attempt per spelling, in the order
/// `true`, `True`, `false`, `False`.
pub fn boolean<'code>() -> impl Parser<'code, Output = bool> {
    let true_bool = removing_literal("true")
        .or(removing_literal("True"))
        .map(|_| true);
    let false_bool = removing_literal("false")
        .or(removing_literal("False"))
        .map(|_| false);

    true_bool.or(false_bool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::error::{ErrorKind, ParseError};

    #[test]
    fn test_true_spellings() {
        assert_eq!(boolean().run("true").unwrap(), (true, ""));
        assert_eq!(boolean().run("True").unwrap(), (true, ""));
    }

    #[test]
    fn test_false_spellings() {
        assert_eq!(boolean().run("false").unwrap(), (false, ""));
        assert_eq!(boolean().run("False").unwrap(), (false, ""));
    }

    #[test]
    fn test_trailing_input() {
        assert_eq!(boolean().run("true, false").unwrap(), (true, ", false"));
    }

    #[test]
    fn test_other_casing_rejected() {
        assert!(boolean().run("TRUE").is_err());
        assert!(boolean().run("fAlse").is_err());
    }

    #[test]
    fn test_not_a_boolean() {
        let mut cursor = Cursor::new("maybe");

        let err = boolean().parse(&mut cursor).unwrap_err();
        assert_eq!(cursor.position(), 0);
        match &err {
            ParseError::UnexpectedEnd {
                remaining,
                attempts,
            } => {
                assert_eq!(*remaining, "maybe");
                let expected: Vec<_> = attempts
                    .iter()
                    .map(|attempt| match attempt {
                        ParseError::LiteralNotFound { expected, .. } => expected.as_ref(),
                        other => panic!("expected LiteralNotFound, got {:?}", other),
                    })
                    .collect();
                assert_eq!(expected, ["true", "True", "false", "False"]);
            }
            other => panic!("expected UnexpectedEnd, got {:?}", other),
        }
        assert_eq!(err.likely_error().kind(), ErrorKind::LiteralNotFound);
    }
}
