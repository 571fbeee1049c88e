use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;
use tracing::debug;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Collection stops at the first `NoMatch`; if fewer than `at_least` values
/// were collected the whole repetition is `NoMatch`. An `Errored` outcome is
/// returned immediately and the values collected so far are dropped.
///
/// A match that does not move the cursor ends the repetition without being
/// collected, so wrapping a zero-width parser (such as an `or_not()`) cannot
/// loop forever.
pub struct Repeated<P> {
    parser: P,
    at_least: usize,
}

impl<P> Repeated<P> {
    pub fn new(parser: P) -> Self {
        Repeated {
            parser,
            at_least: 0,
        }
    }

    /// Require a minimum number of matches
    pub fn at_least(self, minimum: usize) -> Self {
        Repeated {
            at_least: minimum,
            ..self
        }
    }
}

impl<'code, P> Parser<'code> for Repeated<P>
where
    P: Parser<'code>,
{
    type Item = P::Item;
    type Output = Vec<P::Output>;
    type Error = P::Error;

    fn parse(
        &self,
        mut cursor: Stream<'code, Self::Item>,
    ) -> Outcome<'code, Self::Item, Self::Output, Self::Error> {
        let mut results = Vec::new();

        loop {
            match self.parser.parse(cursor) {
                Outcome::Matched { value, remaining } => {
                    if remaining.position() <= cursor.position() {
                        debug!(
                            position = cursor.position(),
                            "zero-width match ends repetition"
                        );
                        break;
                    }
                    results.push(value);
                    cursor = remaining;
                }
                Outcome::NoMatch => break,
                Outcome::Errored { error, span } => return Outcome::Errored { error, span },
            }
        }

        if results.len() < self.at_least {
            return Outcome::NoMatch;
        }
        Outcome::Matched {
            value: results,
            remaining: cursor,
        }
    }
}

/// Convenience function to create a Repeated parser
pub fn repeated<'code, P>(parser: P) -> Repeated<P>
where
    P: Parser<'code>,
{
    Repeated::new(parser)
}

/// Extension trait to add .repeated() method support for parsers
pub trait RepeatedExt<'code>: Parser<'code> + Sized {
    fn repeated(self) -> Repeated<Self> {
        Repeated::new(self)
    }
}

/// Implement RepeatedExt for all parsers
impl<'code, P> RepeatedExt<'code> for P where P: Parser<'code> {}
