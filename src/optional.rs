use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;

/// Parser combinator that makes a parser optional
///
/// Always matches unless the inner parser errors. A miss yields `None` and
/// hands back the input stream untouched.
pub struct OrNot<P> {
    parser: P,
}

impl<P> OrNot<P> {
    pub fn new(parser: P) -> Self {
        OrNot { parser }
    }
}

impl<'code, P> Parser<'code> for OrNot<P>
where
    P: Parser<'code>,
{
    type Item = P::Item;
    type Output = Option<P::Output>;
    type Error = P::Error;

    fn parse(
        &self,
        stream: Stream<'code, Self::Item>,
    ) -> Outcome<'code, Self::Item, Self::Output, Self::Error> {
        match self.parser.parse(stream) {
            Outcome::NoMatch => Outcome::Matched {
                value: None,
                remaining: stream,
            },
            outcome => outcome.map(Some),
        }
    }
}

/// Parser combinator that substitutes a default value when the parser does not match
pub struct OrElse<P, O> {
    parser: P,
    default: O,
}

impl<P, O> OrElse<P, O> {
    pub fn new(parser: P, default: O) -> Self {
        OrElse { parser, default }
    }
}

impl<'code, P, O> Parser<'code> for OrElse<P, O>
where
    P: Parser<'code, Output = O>,
    O: Clone,
{
    type Item = P::Item;
    type Output = O;
    type Error = P::Error;

    fn parse(
        &self,
        stream: Stream<'code, Self::Item>,
    ) -> Outcome<'code, Self::Item, Self::Output, Self::Error> {
        match self.parser.parse(stream) {
            Outcome::NoMatch => Outcome::Matched {
                value: self.default.clone(),
                remaining: stream,
            },
            outcome => outcome,
        }
    }
}

/// Extension trait to add optional-match methods to parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn or_not(self) -> OrNot<Self> {
        OrNot::new(self)
    }

    fn or_else(self, default: Self::Output) -> OrElse<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        OrElse::new(self, default)
    }
}

/// Implement OptionalExt for all parsers
impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use crate::primitive::{filter, just};
    use crate::testing::{chars, parse};

    #[test]
    fn test_or_not_present() {
        let input = chars("-5");
        let parser = just('-').or_not();

        let (sign, remaining) = parse(&parser, &input).into_matched().unwrap();
        assert_eq!(sign, Some('-'));
        assert_eq!(remaining.position(), 1);
    }

    #[test]
    fn test_or_not_absent_returns_input_stream() {
        let input = chars("5");
        let stream = input.stream();
        let parser = just('-').or_not();

        let outcome: Outcome<'_, char, Option<char>, &'static str> = parser.parse(stream);
        assert_eq!(
            outcome,
            Outcome::Matched {
                value: None,
                remaining: stream
            }
        );
    }

    #[test]
    fn test_or_not_discards_partial_progress() {
        // 'a' is consumed before 'b' fails; none of it may leak out
        let input = chars("ac");
        let parser = just('a').then(just('b')).or_not();

        let (value, remaining) = parse(&parser, &input).into_matched().unwrap();
        assert_eq!(value, None);
        assert_eq!(remaining.position(), 0);
    }

    #[test]
    fn test_or_not_propagates_error() {
        let input = chars("ac");
        let parser = just('a').then(just('b').require("expected b")).or_not();

        assert!(parse(&parser, &input).is_errored());
    }

    #[test]
    fn test_or_not_sequenced() {
        let input = chars("-7");
        let parser = just('-')
            .or_not()
            .then(filter(|c: &char| c.is_ascii_digit()));

        let ((sign, digit), _) = parse(&parser, &input).into_matched().unwrap();
        assert_eq!((sign, digit), (Some('-'), '7'));

        let input = chars("7");
        let ((sign, digit), _) = parse(&parser, &input).into_matched().unwrap();
        assert_eq!((sign, digit), (None, '7'));
    }

    #[test]
    fn test_or_else_default() {
        let input = chars("x");
        let parser = just('+').or_else('?');

        let (value, remaining) = parse(&parser, &input).into_matched().unwrap();
        assert_eq!(value, '?');
        assert_eq!(remaining.position(), 0);
    }

    #[test]
    fn test_or_else_present() {
        let input = chars("+");
        let parser = just('+').or_else('?');

        let (value, remaining) = parse(&parser, &input).into_matched().unwrap();
        assert_eq!(value, '+');
        assert!(remaining.is_at_end());
    }

    #[test]
    fn test_or_else_on_empty_input() {
        let input = chars("");
        let parser = filter(|c: &char| c.is_ascii_digit()).or_else('0');

        let (value, _) = parse(&parser, &input).into_matched().unwrap();
        assert_eq!(value, '0');
    }
}
