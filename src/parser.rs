use crate::outcome::Outcome;
use crate::stream::Stream;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    /// The items the parser reads
    type Item: 'code;
    type Output;
    /// Caller-defined classification carried by `Outcome::Errored`
    type Error;

    /// Attempt to parse from the given stream position
    ///
    /// Returns `Matched` with the remaining stream on success, `NoMatch` when
    /// the parser does not apply, or `Errored` for a committed failure.
    /// `NoMatch` must never be returned after partially consuming input in a
    /// way the caller could observe.
    fn parse(
        &self,
        stream: Stream<'code, Self::Item>,
    ) -> Outcome<'code, Self::Item, Self::Output, Self::Error>;
}

/// Type-erased parser, used for heterogeneous choices and recursive grammars
pub type BoxedParser<'code, I, O, E> =
    Box<dyn Parser<'code, Item = I, Output = O, Error = E> + 'code>;

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Item = P::Item;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(
        &self,
        stream: Stream<'code, Self::Item>,
    ) -> Outcome<'code, Self::Item, Self::Output, Self::Error> {
        (**self).parse(stream)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Item = P::Item;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(
        &self,
        stream: Stream<'code, Self::Item>,
    ) -> Outcome<'code, Self::Item, Self::Output, Self::Error> {
        (**self).parse(stream)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Item, Self::Output, Self::Error> {
        Box::new(self)
    }
}

/// Implement BoxExt for all parsers
impl<'code, P> BoxExt<'code> for P where P: Parser<'code> + 'code {}
