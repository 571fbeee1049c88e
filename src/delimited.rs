use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;
use crate::then::{IgnoreThen, ThenIgnore};

/// Parser that matches content between opening and closing delimiters
///
/// Parses `start + content + end` and returns just the content value with the
/// delimiters discarded. No whitespace handling is done.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct DelimitedBy<P, L, R> {
    parser: P,
    start: L,
    end: R,
}

impl<P, L, R> DelimitedBy<P, L, R> {
    pub fn new(parser: P, start: L, end: R) -> Self {
        DelimitedBy { parser, start, end }
    }
}

impl<'code, P, L, R> Parser<'code> for DelimitedBy<P, L, R>
where
    P: Parser<'code>,
    L: Parser<'code, Item = P::Item, Error = P::Error>,
    R: Parser<'code, Item = P::Item, Error = P::Error>,
{
    type Item = P::Item;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(
        &self,
        stream: Stream<'code, Self::Item>,
    ) -> Outcome<'code, Self::Item, Self::Output, Self::Error> {
        ThenIgnore::new(IgnoreThen::new(&self.start, &self.parser), &self.end).parse(stream)
    }
}

/// Creates a parser that matches content between two delimiters
pub fn delimited_by<'code, P, L, R>(parser: P, start: L, end: R) -> DelimitedBy<P, L, R>
where
    P: Parser<'code>,
    L: Parser<'code, Item = P::Item, Error = P::Error>,
    R: Parser<'code, Item = P::Item, Error = P::Error>,
{
    DelimitedBy::new(parser, start, end)
}

/// Extension trait to add .delimited_by() method support for parsers
pub trait DelimitedExt<'code>: Parser<'code> + Sized {
    fn delimited_by<L, R>(self, start: L, end: R) -> DelimitedBy<Self, L, R>
    where
        L: Parser<'code, Item = Self::Item, Error = Self::Error>,
        R: Parser<'code, Item = Self::Item, Error = Self::Error>,
    {
        DelimitedBy::new(self, start, end)
    }
}

/// Implement DelimitedExt for all parsers
impl<'code, P> DelimitedExt<'code> for P where P: Parser<'code> {}
