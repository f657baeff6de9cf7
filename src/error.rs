use std::borrow::Cow;
use thiserror::Error;

/// Result of running a parser
pub type ParseResult<'code, T> = Result<T, ParseError<'code>>;

/// Why a parser failed
///
/// Variants borrow the input they failed on, so an error can be inspected
/// without any position bookkeeping: the remaining input is the location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError<'code> {
    /// Produced by `never()`
    #[error("parser never succeeds")]
    Never,

    /// Every alternative of an `or`/`choice` failed
    ///
    /// `attempts` holds each alternative's failure in the order they were tried.
    #[error("no alternative matched at {remaining:?} ({} attempts)", .attempts.len())]
    UnexpectedEnd {
        remaining: &'code str,
        attempts: Vec<ParseError<'code>>,
    },

    /// The integer parser found no digits, or digits that do not fit an `i64`
    #[error("expected a number, found {digits:?} at {remaining:?}")]
    NotANumber {
        digits: &'code str,
        remaining: &'code str,
    },

    #[error("expected {expected:?}, found {remaining:?}")]
    LiteralNotFound {
        expected: Cow<'static, str>,
        remaining: &'code str,
    },

    /// The character parser was called at end of input
    #[error("unexpected end of input")]
    EmptyInput,

    /// Failure reported by `try_map` or `filter`
    #[error("{message} at {remaining:?}")]
    Custom {
        message: Cow<'static, str>,
        remaining: &'code str,
    },
}

/// Fieldless tag for each [`ParseError`] variant
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Never,
    UnexpectedEnd,
    NotANumber,
    LiteralNotFound,
    EmptyInput,
    Custom,
}

impl<'code> ParseError<'code> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Never => ErrorKind::Never,
            ParseError::UnexpectedEnd { .. } => ErrorKind::UnexpectedEnd,
            ParseError::NotANumber { .. } => ErrorKind::NotANumber,
            ParseError::LiteralNotFound { .. } => ErrorKind::LiteralNotFound,
            ParseError::EmptyInput => ErrorKind::EmptyInput,
            ParseError::Custom { .. } => ErrorKind::Custom,
        }
    }

    /// The unconsumed input at the point of failure, if the error records it
    pub fn remaining(&self) -> Option<&'code str> {
        match self {
            ParseError::Never => None,
            ParseError::EmptyInput => Some(""),
            ParseError::UnexpectedEnd { remaining, .. }
            | ParseError::NotANumber { remaining, .. }
            | ParseError::LiteralNotFound { remaining, .. }
            | ParseError::Custom { remaining, .. } => Some(remaining),
        }
    }

    /// Flatten nested alternatives and return the failure that got furthest
    /// into the input
    ///
    /// Ties go to the alternative tried last. Errors that are not
    /// `UnexpectedEnd` return themselves.
    pub fn likely_error(&self) -> &ParseError<'code> {
        match self {
            ParseError::UnexpectedEnd { attempts, .. } => attempts
                .iter()
                .map(ParseError::likely_error)
                .fold(None, |best: Option<&ParseError<'code>>, candidate| match best {
                    Some(best) if progress(best) > progress(candidate) => Some(best),
                    _ => Some(candidate),
                })
                .unwrap_or(self),
            _ => self,
        }
    }
}

/// Errors without a recorded location rank behind everything else
fn progress(error: &ParseError<'_>) -> isize {
    match error.remaining() {
        Some(remaining) => -(remaining.len() as isize),
        None => isize::MIN,
    }
}
