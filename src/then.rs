use crate::map::Map;
use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.then()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`.
///
/// If the first parser matches and the second does not, the whole sequence is
/// `NoMatch`. Nothing needs undoing: `NoMatch` carries no stream, so the caller
/// resumes from the stream it passed in.
pub struct Then<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Then { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Item = P1::Item, Error = P1::Error>,
{
    type Item = P1::Item;
    type Output = (P1::Output, P2::Output);
    type Error = P1::Error;

    fn parse(
        &self,
        stream: Stream<'code, Self::Item>,
    ) -> Outcome<'code, Self::Item, Self::Output, Self::Error> {
        self.parser1.parse(stream).and_then(|first, remaining| {
            self.parser2
                .parse(remaining)
                .map(|second| (first, second))
        })
    }
}

/// Sequence two parsers, keeping only the second value
pub struct IgnoreThen<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> IgnoreThen<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        IgnoreThen { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for IgnoreThen<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Item = P1::Item, Error = P1::Error>,
{
    type Item = P1::Item;
    type Output = P2::Output;
    type Error = P1::Error;

    fn parse(
        &self,
        stream: Stream<'code, Self::Item>,
    ) -> Outcome<'code, Self::Item, Self::Output, Self::Error> {
        self.parser1
            .parse(stream)
            .and_then(|_, remaining| self.parser2.parse(remaining))
    }
}

/// Sequence two parsers, keeping only the first value
pub struct ThenIgnore<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> ThenIgnore<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        ThenIgnore { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for ThenIgnore<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Item = P1::Item, Error = P1::Error>,
{
    type Item = P1::Item;
    type Output = P1::Output;
    type Error = P1::Error;

    fn parse(
        &self,
        stream: Stream<'code, Self::Item>,
    ) -> Outcome<'code, Self::Item, Self::Output, Self::Error> {
        self.parser1.parse(stream).and_then(|first, remaining| {
            self.parser2.parse(remaining).map(|_| first)
        })
    }
}

/// Convenience function to create a Then parser
pub fn then<'code, P1, P2>(parser1: P1, parser2: P2) -> Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Item = P1::Item, Error = P1::Error>,
{
    Then::new(parser1, parser2)
}

/// Prepends a value to the list that follows it
pub type Chain<O> = fn((O, Vec<O>)) -> Vec<O>;

/// Extension trait to add sequencing methods to parsers
pub trait ThenExt<'code>: Parser<'code> + Sized {
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'code, Item = Self::Item, Error = Self::Error>,
    {
        Then::new(self, other)
    }

    fn ignore_then<P>(self, other: P) -> IgnoreThen<Self, P>
    where
        P: Parser<'code, Item = Self::Item, Error = Self::Error>,
    {
        IgnoreThen::new(self, other)
    }

    fn then_ignore<P>(self, other: P) -> ThenIgnore<Self, P>
    where
        P: Parser<'code, Item = Self::Item, Error = Self::Error>,
    {
        ThenIgnore::new(self, other)
    }

    /// Sequence with a parser producing a list, and prepend this value to it
    fn then_chain<P>(self, other: P) -> Map<Then<Self, P>, Chain<Self::Output>>
    where
        P: Parser<'code, Item = Self::Item, Output = Vec<Self::Output>, Error = Self::Error>,
    {
        let chain: Chain<Self::Output> = |(first, rest)| {
            let mut values = Vec::with_capacity(rest.len() + 1);
            values.push(first);
            values.extend(rest);
            values
        };
        Map::new(Then::new(self, other), chain)
    }
}

/// Implement ThenExt for all parsers
impl<'code, P> ThenExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use crate::primitive::{filter, just, one_of};
    use crate::span::Span;
    use crate::testing::{chars, parse};

    #[test]
    fn test_then_both_succeed() {
        let input = chars("ab");
        let parser = just('a').then(just('b'));

        let ((a, b), remaining) = parse(&parser, &input).into_matched().unwrap();
        assert_eq!(a, 'a');
        assert_eq!(b, 'b');
        assert_eq!(remaining.position(), 2);
    }

    #[test]
    fn test_then_first_fails() {
        let input = chars("xb");
        let parser = just('a').then(just('b'));

        assert!(parse(&parser, &input).is_no_match());
    }

    #[test]
    fn test_then_second_fails() {
        let input = chars("ax");
        let parser = just('a').then(just('b'));

        assert!(parse(&parser, &input).is_no_match());
    }

    #[test]
    fn test_then_propagates_second_error() {
        let input = chars("ax");
        let parser = just('a').then(just('b').require("expected b"));

        assert_eq!(
            parse(&parser, &input),
            Outcome::Errored {
                error: "expected b",
                span: Span::new(0, 1)
            }
        );
    }

    #[test]
    fn test_then_chain() {
        let input = chars("A5B");
        let parser = just('A').then(just('5')).then(just('B'));

        let (((a, five), b), remaining) = parse(&parser, &input).into_matched().unwrap();
        assert_eq!((a, five, b), ('A', '5', 'B'));
        assert!(remaining.is_at_end());
    }

    #[test]
    fn test_then_function_syntax() {
        let input = chars("XY");
        let parser = then(just('X'), just('Y'));

        let ((x, y), _) = parse(&parser, &input).into_matched().unwrap();
        assert_eq!((x, y), ('X', 'Y'));
    }

    #[test]
    fn test_ignore_then_keeps_second() {
        let input = chars("-7");
        let parser = just('-').ignore_then(filter(|c: &char| c.is_ascii_digit()));

        let (digit, remaining) = parse(&parser, &input).into_matched().unwrap();
        assert_eq!(digit, '7');
        assert_eq!(remaining.position(), 2);
    }

    #[test]
    fn test_then_ignore_keeps_first() {
        let input = chars("7;");
        let parser = filter(|c: &char| c.is_ascii_digit()).then_ignore(just(';'));

        let (digit, remaining) = parse(&parser, &input).into_matched().unwrap();
        assert_eq!(digit, '7');
        assert!(remaining.is_at_end());

        let input = chars("7,");
        assert!(parse(&parser, &input).is_no_match());
    }

    #[test]
    fn test_then_chain_prepends() {
        let input = chars("abbbc");
        let parser = just('a').then_chain(just('b').repeated());

        let (values, remaining) = parse(&parser, &input).into_matched().unwrap();
        assert_eq!(values, vec!['a', 'b', 'b', 'b']);
        assert_eq!(remaining.position(), 4);
    }

    #[test]
    fn test_then_chain_with_empty_rest() {
        let input = chars("x");
        let parser = one_of(['x', 'y']).then_chain(one_of(['x', 'y']).repeated());

        let (values, _) = parse(&parser, &input).into_matched().unwrap();
        assert_eq!(values, vec!['x']);
    }
}
