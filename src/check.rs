use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;

/// Parser that re-checks the output of another parser with a predicate
///
/// A value rejected by the predicate turns the match into `NoMatch`, as if the
/// inner parser had never run.
pub struct AndCheck<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> AndCheck<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        AndCheck { parser, predicate }
    }
}

impl<'code, P, F> Parser<'code> for AndCheck<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    type Item = P::Item;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(
        &self,
        stream: Stream<'code, Self::Item>,
    ) -> Outcome<'code, Self::Item, Self::Output, Self::Error> {
        self.parser.parse(stream).and_then(|value, remaining| {
            if (self.predicate)(&value) {
                Outcome::Matched { value, remaining }
            } else {
                Outcome::NoMatch
            }
        })
    }
}

/// Extension trait to add and_check method to all parsers
pub trait AndCheckExt<'code>: Parser<'code> + Sized {
    fn and_check<F>(self, predicate: F) -> AndCheck<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        AndCheck::new(self, predicate)
    }
}

impl<'code, P: Parser<'code>> AndCheckExt<'code> for P {}
