use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;
use tracing::trace;

/// Parser combinator that turns a miss into a hard error
///
/// Marks a point of no return in a grammar: once the surrounding parser has
/// got this far, the wrapped parser must match. A `NoMatch` becomes
/// `Errored` with the given error, located at the last item consumed before
/// this parser ran (or the first item of the input if nothing was consumed).
pub struct Require<P, E> {
    parser: P,
    error: E,
}

impl<P, E> Require<P, E> {
    pub fn new(parser: P, error: E) -> Self {
        Require { parser, error }
    }
}

impl<'code, P, E> Parser<'code> for Require<P, E>
where
    P: Parser<'code, Error = E>,
    E: Clone,
{
    type Item = P::Item;
    type Output = P::Output;
    type Error = E;

    fn parse(
        &self,
        stream: Stream<'code, Self::Item>,
    ) -> Outcome<'code, Self::Item, Self::Output, Self::Error> {
        match self.parser.parse(stream) {
            Outcome::NoMatch => {
                let span = stream.last_consumed_span();
                trace!(
                    position = stream.position(),
                    %span,
                    "required parser did not match"
                );
                Outcome::Errored {
                    error: self.error.clone(),
                    span,
                }
            }
            outcome => outcome,
        }
    }
}

/// Extension trait to add .require() method support for parsers
pub trait RequireExt<'code>: Parser<'code> + Sized {
    fn require(self, error: Self::Error) -> Require<Self, Self::Error>
    where
        Self::Error: Clone,
    {
        Require::new(self, error)
    }
}

/// Implement RequireExt for all parsers
impl<'code, P> RequireExt<'code> for P where P: Parser<'code> {}
