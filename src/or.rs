use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;

/// Parser combinator that tries the first parser, and if it does not match, tries the second
///
/// Left-biased: an `Errored` outcome from the first parser is returned as is
/// and the second parser is never attempted.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Item = P1::Item, Output = P1::Output, Error = P1::Error>,
{
    type Item = P1::Item;
    type Output = P1::Output;
    type Error = P1::Error;

    fn parse(
        &self,
        stream: Stream<'code, Self::Item>,
    ) -> Outcome<'code, Self::Item, Self::Output, Self::Error> {
        match self.parser1.parse(stream) {
            Outcome::NoMatch => self.parser2.parse(stream),
            outcome => outcome,
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Item = Self::Item, Output = Self::Output, Error = Self::Error>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Item = P1::Item, Output = P1::Output, Error = P1::Error>,
{
    Or::new(parser1, parser2)
}
