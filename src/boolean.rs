use crate::map::Map;
use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;

/// Parser combinator that reports whether a parser matched
///
/// Never returns `NoMatch`: a miss is `false` with the input stream handed back.
/// Errors still propagate.
pub struct Boolean<P> {
    parser: P,
}

impl<P> Boolean<P> {
    pub fn new(parser: P) -> Self {
        Boolean { parser }
    }
}

impl<'code, P> Parser<'code> for Boolean<P>
where
    P: Parser<'code>,
{
    type Item = P::Item;
    type Output = bool;
    type Error = P::Error;

    fn parse(
        &self,
        stream: Stream<'code, Self::Item>,
    ) -> Outcome<'code, Self::Item, Self::Output, Self::Error> {
        match self.parser.parse(stream) {
            Outcome::NoMatch => Outcome::Matched {
                value: false,
                remaining: stream,
            },
            outcome => outcome.map(|_| true),
        }
    }
}

/// Extension trait to add boolean probes to parsers
pub trait BooleanExt<'code>: Parser<'code> + Sized {
    fn boolean(self) -> Boolean<Self> {
        Boolean::new(self)
    }

    fn map_boolean<F, U>(self, mapper: F) -> Map<Boolean<Self>, F>
    where
        F: Fn(bool) -> U,
    {
        Map::new(Boolean::new(self), mapper)
    }
}

/// Implement BooleanExt for all parsers
impl<'code, P> BooleanExt<'code> for P where P: Parser<'code> {}
