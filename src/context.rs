use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;
use std::marker::PhantomData;

/// Parser combinator whose second half is chosen from the value of the first
///
/// After `parser` matches, `continuation` receives a reference to its value and
/// the remaining stream, and produces the outcome of the second half. This is
/// how context-sensitive productions are written, e.g. a length field deciding
/// how many items follow it. The result pairs both values.
pub struct ThenWithContext<P, F, U> {
    parser: P,
    continuation: F,
    _output: PhantomData<fn() -> U>,
}

impl<P, F, U> ThenWithContext<P, F, U> {
    pub fn new(parser: P, continuation: F) -> Self {
        ThenWithContext {
            parser,
            continuation,
            _output: PhantomData,
        }
    }
}

impl<'code, P, F, U> Parser<'code> for ThenWithContext<P, F, U>
where
    P: Parser<'code>,
    F: Fn(&P::Output, Stream<'code, P::Item>) -> Outcome<'code, P::Item, U, P::Error>,
{
    type Item = P::Item;
    type Output = (P::Output, U);
    type Error = P::Error;

    fn parse(
        &self,
        stream: Stream<'code, Self::Item>,
    ) -> Outcome<'code, Self::Item, Self::Output, Self::Error> {
        self.parser.parse(stream).and_then(|context, remaining| {
            (self.continuation)(&context, remaining).map(|second| (context, second))
        })
    }
}

/// Extension trait to add .then_with_ctx() method support for parsers
pub trait ContextExt<'code>: Parser<'code> + Sized {
    fn then_with_ctx<F, U>(self, continuation: F) -> ThenWithContext<Self, F, U>
    where
        F: Fn(&Self::Output, Stream<'code, Self::Item>) -> Outcome<'code, Self::Item, U, Self::Error>,
    {
        ThenWithContext::new(self, continuation)
    }
}

/// Implement ContextExt for all parsers
impl<'code, P> ContextExt<'code> for P where P: Parser<'code> {}
