use crate::error::ParseFailure;
use crate::span::Span;
use crate::stream::Stream;

/// Result of running a parser
///
/// `NoMatch` deliberately carries no stream: a parser that did not match can
/// never hand back a partially consumed cursor, so whoever called it retries
/// from the stream it already holds.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<'code, I, O, E> {
    /// The parser applied; `remaining` is never behind the input cursor
    Matched { value: O, remaining: Stream<'code, I> },
    /// The parser does not apply here
    NoMatch,
    /// The parser recognised a hard failure at `span`
    Errored { error: E, span: Span },
}

impl<'code, I, O, E> Outcome<'code, I, O, E> {
    pub fn is_matched(&self) -> bool {
        matches!(self, Outcome::Matched { .. })
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, Outcome::NoMatch)
    }

    pub fn is_errored(&self) -> bool {
        matches!(self, Outcome::Errored { .. })
    }

    /// Transform a matched value, passing the other variants through
    pub fn map<U>(self, f: impl FnOnce(O) -> U) -> Outcome<'code, I, U, E> {
        match self {
            Outcome::Matched { value, remaining } => Outcome::Matched {
                value: f(value),
                remaining,
            },
            Outcome::NoMatch => Outcome::NoMatch,
            Outcome::Errored { error, span } => Outcome::Errored { error, span },
        }
    }

    /// Continue from a match, passing the other variants through
    pub fn and_then<U>(
        self,
        f: impl FnOnce(O, Stream<'code, I>) -> Outcome<'code, I, U, E>,
    ) -> Outcome<'code, I, U, E> {
        match self {
            Outcome::Matched { value, remaining } => f(value, remaining),
            Outcome::NoMatch => Outcome::NoMatch,
            Outcome::Errored { error, span } => Outcome::Errored { error, span },
        }
    }

    /// The matched value and remaining stream, if the parser matched
    pub fn into_matched(self) -> Option<(O, Stream<'code, I>)> {
        match self {
            Outcome::Matched { value, remaining } => Some((value, remaining)),
            _ => None,
        }
    }

    /// Convert into a `Result` for callers that only care about success
    pub fn into_result(self) -> Result<(O, Stream<'code, I>), ParseFailure<E>> {
        match self {
            Outcome::Matched { value, remaining } => Ok((value, remaining)),
            Outcome::NoMatch => Err(ParseFailure::NoMatch),
            Outcome::Errored { error, span } => Err(ParseFailure::Errored { error, span }),
        }
    }
}
