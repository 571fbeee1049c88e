//! Shared helpers for unit tests over character input

use crate::input::Input;
use crate::outcome::Outcome;
use crate::parser::Parser;

pub(crate) type TestError = &'static str;

pub(crate) fn chars(text: &str) -> Input<char> {
    Input::from_source(text)
}

/// Run `parser` over `input`, pinning the item and error types
pub(crate) fn parse<'code, P>(
    parser: &P,
    input: &'code Input<char>,
) -> Outcome<'code, char, P::Output, TestError>
where
    P: Parser<'code, Item = char, Error = TestError>,
{
    parser.parse(input.stream())
}
