use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::span::Spanned;
use crate::stream::Stream;

/// A parser combinator that captures the span of a successful parse
///
/// The span runs from the start of the first item the parser looked at to the
/// end of the last item it consumed. A match that consumed nothing gets a
/// zero-width span at the cursor, see [`Stream::span_until`].
pub struct Position<P> {
    parser: P,
}

impl<P> Position<P> {
    pub fn new(parser: P) -> Self {
        Position { parser }
    }
}

impl<'code, P> Parser<'code> for Position<P>
where
    P: Parser<'code>,
{
    type Item = P::Item;
    type Output = Spanned<P::Output>;
    type Error = P::Error;

    fn parse(
        &self,
        stream: Stream<'code, Self::Item>,
    ) -> Outcome<'code, Self::Item, Self::Output, Self::Error> {
        self.parser
            .parse(stream)
            .and_then(|value, remaining| Outcome::Matched {
                value: Spanned::new(value, stream.span_until(&remaining)),
                remaining,
            })
    }
}

/// Extension trait to add span capture to any parser
pub trait PositionExt<'code>: Parser<'code> + Sized {
    /// Wrap this parser to capture its span
    fn spanned(self) -> Position<Self> {
        Position::new(self)
    }
}

impl<'code, P> PositionExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Position combinator
pub fn position<P>(parser: P) -> Position<P> {
    Position::new(parser)
}
