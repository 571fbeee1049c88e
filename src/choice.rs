use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;

/// Parser combinator that tries a list of parsers in order
///
/// Every candidate sees the original stream. The first `Matched` or `Errored`
/// outcome wins; if every candidate reports `NoMatch`, so does the choice.
/// Use [`BoxedParser`](crate::parser::BoxedParser) to mix parser types.
pub struct Choice<P> {
    choices: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(choices: Vec<P>) -> Self {
        Choice { choices }
    }
}

impl<'code, P> Parser<'code> for Choice<P>
where
    P: Parser<'code>,
{
    type Item = P::Item;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(
        &self,
        stream: Stream<'code, Self::Item>,
    ) -> Outcome<'code, Self::Item, Self::Output, Self::Error> {
        for choice in &self.choices {
            match choice.parse(stream) {
                Outcome::NoMatch => continue,
                outcome => return outcome,
            }
        }
        Outcome::NoMatch
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'code, P>(choices: impl IntoIterator<Item = P>) -> Choice<P>
where
    P: Parser<'code>,
{
    Choice::new(choices.into_iter().collect())
}
