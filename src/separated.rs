use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::repeated::Repeated;
use crate::stream::Stream;
use crate::then::IgnoreThen;
use tracing::trace;

/// Parser combinator that matches a list of items separated by a parser
///
/// Parses one item, then `(separator, item)` pairs for as long as they match,
/// and returns the item values.
///
/// - `allow_leading` accepts one separator before the first item
/// - `allow_trailing` accepts one separator after the last item
/// - `at_least` sets the minimum number of items
///
/// With `at_least(0)` an absent list matches as empty without consuming
/// anything, even if a leading separator was present. If the first item
/// matches but fewer than `at_least - 1` pairs follow, the whole list is
/// `NoMatch`.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
/// - `",a,b,"` with separator `,`, leading and trailing allowed → `vec!['a', 'b']`
pub struct SeparatedBy<P, S> {
    parser: P,
    separator: S,
    allow_leading: bool,
    allow_trailing: bool,
    at_least: usize,
}

impl<P, S> SeparatedBy<P, S> {
    pub fn new(parser: P, separator: S) -> Self {
        SeparatedBy {
            parser,
            separator,
            allow_leading: false,
            allow_trailing: false,
            at_least: 0,
        }
    }

    /// Accept a separator before the first item
    pub fn allow_leading(self) -> Self {
        SeparatedBy {
            allow_leading: true,
            ..self
        }
    }

    /// Accept a separator after the last item
    pub fn allow_trailing(self) -> Self {
        SeparatedBy {
            allow_trailing: true,
            ..self
        }
    }

    /// Require a minimum number of items
    pub fn at_least(self, minimum: usize) -> Self {
        SeparatedBy {
            at_least: minimum,
            ..self
        }
    }
}

impl<'code, P, S> Parser<'code> for SeparatedBy<P, S>
where
    P: Parser<'code>,
    S: Parser<'code, Item = P::Item, Error = P::Error>,
{
    type Item = P::Item;
    type Output = Vec<P::Output>;
    type Error = P::Error;

    fn parse(
        &self,
        stream: Stream<'code, Self::Item>,
    ) -> Outcome<'code, Self::Item, Self::Output, Self::Error> {
        let mut cursor = stream;

        if self.allow_leading {
            match self.separator.parse(cursor) {
                Outcome::Matched { remaining, .. } => cursor = remaining,
                Outcome::NoMatch => {}
                Outcome::Errored { error, span } => return Outcome::Errored { error, span },
            }
        }

        let first = match self.parser.parse(cursor) {
            Outcome::Matched { value, remaining } => {
                cursor = remaining;
                value
            }
            // The leading separator is given back along with everything else
            Outcome::NoMatch if self.at_least == 0 => {
                return Outcome::Matched {
                    value: Vec::new(),
                    remaining: stream,
                };
            }
            Outcome::NoMatch => return Outcome::NoMatch,
            Outcome::Errored { error, span } => return Outcome::Errored { error, span },
        };

        let rest = Repeated::new(IgnoreThen::new(&self.separator, &self.parser))
            .at_least(self.at_least.saturating_sub(1));

        let mut values = match rest.parse(cursor) {
            Outcome::Matched { value, remaining } => {
                cursor = remaining;
                value
            }
            Outcome::NoMatch => {
                trace!(
                    position = cursor.position(),
                    at_least = self.at_least,
                    "separated list too short after first item"
                );
                return Outcome::NoMatch;
            }
            Outcome::Errored { error, span } => return Outcome::Errored { error, span },
        };
        values.insert(0, first);

        if self.allow_trailing {
            match self.separator.parse(cursor) {
                Outcome::Matched { remaining, .. } => cursor = remaining,
                Outcome::NoMatch => {}
                Outcome::Errored { error, span } => return Outcome::Errored { error, span },
            }
        }

        Outcome::Matched {
            value: values,
            remaining: cursor,
        }
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn separated_by<'code, P, S>(parser: P, separator: S) -> SeparatedBy<P, S>
where
    P: Parser<'code>,
    S: Parser<'code, Item = P::Item, Error = P::Error>,
{
    SeparatedBy::new(parser, separator)
}

/// Extension trait to add .separated_by() method support for parsers
pub trait SeparatedExt<'code>: Parser<'code> + Sized {
    fn separated_by<S>(self, separator: S) -> SeparatedBy<Self, S>
    where
        S: Parser<'code, Item = Self::Item, Error = Self::Error>,
    {
        SeparatedBy::new(self, separator)
    }
}

/// Implement SeparatedExt for all parsers
impl<'code, P> SeparatedExt<'code> for P where P: Parser<'code> {}
