use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;

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
    type Item = P::Item;
    type Output = U;
    type Error = P::Error;

    fn parse(
        &self,
        stream: Stream<'code, Self::Item>,
    ) -> Outcome<'code, Self::Item, Self::Output, Self::Error> {
        self.parser.parse(stream).map(&self.mapper)
    }
}

/// Parser combinator that replaces a matched value with a fixed one
pub struct To<P, O> {
    parser: P,
    value: O,
}

impl<P, O> To<P, O> {
    pub fn new(parser: P, value: O) -> Self {
        To { parser, value }
    }
}

impl<'code, P, O> Parser<'code> for To<P, O>
where
    P: Parser<'code>,
    O: Clone,
{
    type Item = P::Item;
    type Output = O;
    type Error = P::Error;

    fn parse(
        &self,
        stream: Stream<'code, Self::Item>,
    ) -> Outcome<'code, Self::Item, Self::Output, Self::Error> {
        self.parser.parse(stream).map(|_| self.value.clone())
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

/// Extension trait to add .map() and .to() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn to<O>(self, value: O) -> To<Self, O>
    where
        O: Clone,
    {
        To::new(self, value)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
