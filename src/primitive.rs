//! Single-step matchers that every grammar bottoms out in
//!
//! None of these ever return `Errored`: a failed condition is always `NoMatch`
//! and nothing is consumed.

use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;
use std::marker::PhantomData;

/// Parser that matches one specific item
pub struct Just<I, E> {
    expected: I,
    _error: PhantomData<E>,
}

impl<I, E> Just<I, E> {
    pub fn new(expected: I) -> Self {
        Just {
            expected,
            _error: PhantomData,
        }
    }
}

impl<'code, I, E> Parser<'code> for Just<I, E>
where
    I: Clone + PartialEq + 'code,
{
    type Item = I;
    type Output = I;
    type Error = E;

    fn parse(&self, stream: Stream<'code, I>) -> Outcome<'code, I, I, E> {
        match stream.peek() {
            Some(spanned) if spanned.item == self.expected => Outcome::Matched {
                value: self.expected.clone(),
                remaining: stream.next(),
            },
            _ => Outcome::NoMatch,
        }
    }
}

/// Convenience function to create a Just parser
pub fn just<I, E>(expected: I) -> Just<I, E> {
    Just::new(expected)
}

/// Parser that matches any item from a set of choices
pub struct OneOf<I, E> {
    choices: Vec<I>,
    _error: PhantomData<E>,
}

impl<I, E> OneOf<I, E> {
    pub fn new(choices: Vec<I>) -> Self {
        OneOf {
            choices,
            _error: PhantomData,
        }
    }
}

impl<'code, I, E> Parser<'code> for OneOf<I, E>
where
    I: Clone + PartialEq + 'code,
{
    type Item = I;
    type Output = I;
    type Error = E;

    fn parse(&self, stream: Stream<'code, I>) -> Outcome<'code, I, I, E> {
        match stream.peek() {
            Some(spanned) if self.choices.contains(&spanned.item) => Outcome::Matched {
                value: spanned.item.clone(),
                remaining: stream.next(),
            },
            _ => Outcome::NoMatch,
        }
    }
}

/// Convenience function to create a OneOf parser
pub fn one_of<I, E>(choices: impl IntoIterator<Item = I>) -> OneOf<I, E> {
    OneOf::new(choices.into_iter().collect())
}

/// Parser that matches a single item satisfying a predicate
pub struct Filter<F, I, E> {
    predicate: F,
    _marker: PhantomData<(fn(&I), E)>,
}

impl<F, I, E> Filter<F, I, E> {
    pub fn new(predicate: F) -> Self {
        Filter {
            predicate,
            _marker: PhantomData,
        }
    }
}

impl<'code, F, I, E> Parser<'code> for Filter<F, I, E>
where
    F: Fn(&I) -> bool,
    I: Clone + 'code,
{
    type Item = I;
    type Output = I;
    type Error = E;

    fn parse(&self, stream: Stream<'code, I>) -> Outcome<'code, I, I, E> {
        match stream.peek() {
            Some(spanned) if (self.predicate)(&spanned.item) => Outcome::Matched {
                value: spanned.item.clone(),
                remaining: stream.next(),
            },
            _ => Outcome::NoMatch,
        }
    }
}

/// Convenience function to create a Filter parser
pub fn filter<F, I, E>(predicate: F) -> Filter<F, I, E>
where
    F: Fn(&I) -> bool,
{
    Filter::new(predicate)
}

/// Parser that matches a run of items exactly
///
/// An empty pattern never matches.
pub struct Sequence<I, E> {
    pattern: Vec<I>,
    _error: PhantomData<E>,
}

impl<I, E> Sequence<I, E> {
    pub fn new(pattern: Vec<I>) -> Self {
        Sequence {
            pattern,
            _error: PhantomData,
        }
    }
}

impl<'code, I, E> Parser<'code> for Sequence<I, E>
where
    I: Clone + PartialEq + 'code,
{
    type Item = I;
    type Output = Vec<I>;
    type Error = E;

    fn parse(&self, stream: Stream<'code, I>) -> Outcome<'code, I, Vec<I>, E> {
        if stream.starts_with(&self.pattern) {
            Outcome::Matched {
                value: self.pattern.clone(),
                remaining: stream.advance(self.pattern.len()),
            }
        } else {
            Outcome::NoMatch
        }
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<I, E>(pattern: impl IntoIterator<Item = I>) -> Sequence<I, E> {
    Sequence::new(pattern.into_iter().collect())
}

/// Parser that only matches once the input is exhausted
pub struct End<I, E> {
    _marker: PhantomData<(I, E)>,
}

impl<I, E> End<I, E> {
    pub fn new() -> Self {
        End {
            _marker: PhantomData,
        }
    }
}

impl<I, E> Default for End<I, E> {
    fn default() -> Self {
        End::new()
    }
}

impl<'code, I, E> Parser<'code> for End<I, E>
where
    I: 'code,
{
    type Item = I;
    type Output = ();
    type Error = E;

    fn parse(&self, stream: Stream<'code, I>) -> Outcome<'code, I, (), E> {
        match stream.peek() {
            Some(_) => Outcome::NoMatch,
            None => Outcome::Matched {
                value: (),
                remaining: stream.next(),
            },
        }
    }
}

/// Convenience function to create an End parser
pub fn end<I, E>() -> End<I, E> {
    End::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{chars, parse};

    #[test]
    fn test_just_matches() {
        let input = chars("abc");
        let (value, remaining) = parse(&just('a'), &input).into_matched().unwrap();

        assert_eq!(value, 'a');
        assert_eq!(remaining.position(), 1);
        assert_eq!(remaining.peek().map(|s| s.item), Some('b'));
    }

    #[test]
    fn test_just_mismatch_is_no_match() {
        let input = chars("xyz");
        assert!(parse(&just('a'), &input).is_no_match());
    }

    #[test]
    fn test_just_at_end_is_no_match() {
        let input = chars("");
        assert!(parse(&just('a'), &input).is_no_match());
    }

    #[test]
    fn test_just_over_tokens() {
        #[derive(Debug, Clone, PartialEq)]
        enum Token {
            Let,
            Ident,
        }

        let input = crate::input::Input::from_sequence([Token::Let, Token::Ident], 0);
        let outcome: Outcome<'_, Token, Token, ()> = just(Token::Let).parse(input.stream());

        let (value, remaining) = outcome.into_matched().unwrap();
        assert_eq!(value, Token::Let);
        assert_eq!(remaining.peek().map(|s| s.item.clone()), Some(Token::Ident));
    }

    #[test]
    fn test_one_of() {
        let parser = one_of(['a', 'b', 'c']);

        let input = chars("b");
        let (value, remaining) = parse(&parser, &input).into_matched().unwrap();
        assert_eq!(value, 'b');
        assert!(remaining.is_at_end());

        let input = chars("d");
        assert!(parse(&parser, &input).is_no_match());
    }

    #[test]
    fn test_one_of_empty_set_never_matches() {
        let parser = one_of(Vec::<char>::new());
        let input = chars("a");
        assert!(parse(&parser, &input).is_no_match());
    }

    #[test]
    fn test_filter() {
        let parser = filter(|c: &char| c.is_ascii_digit());

        let input = chars("7a");
        let (value, remaining) = parse(&parser, &input).into_matched().unwrap();
        assert_eq!(value, '7');
        assert_eq!(remaining.position(), 1);

        let input = chars("a7");
        assert!(parse(&parser, &input).is_no_match());

        let input = chars("");
        assert!(parse(&parser, &input).is_no_match());
    }

    #[test]
    fn test_filter_unicode_letter() {
        let test_cases = [
            ("a", true),
            ("Z", true),
            ("ñ", true),
            ("中", true),
            ("1", false),
            ("!", false),
            (" ", false),
        ];

        for (text, should_match) in test_cases {
            let input = chars(text);
            let parser = filter(|c: &char| c.is_alphabetic());
            let outcome = parse(&parser, &input);

            assert_eq!(outcome.is_matched(), should_match, "input: {}", text);
        }
    }

    #[test]
    fn test_sequence() {
        let parser = sequence("let".chars());

        let input = chars("let x");
        let (value, remaining) = parse(&parser, &input).into_matched().unwrap();
        assert_eq!(value, vec!['l', 'e', 't']);
        assert_eq!(remaining.position(), 3);
    }

    #[test]
    fn test_sequence_never_partially_consumes() {
        let parser = sequence("let".chars());

        let input = chars("lex");
        assert!(parse(&parser, &input).is_no_match());

        let input = chars("le");
        assert!(parse(&parser, &input).is_no_match());
    }

    #[test]
    fn test_empty_sequence_is_no_match() {
        let parser = sequence(Vec::<char>::new());
        let input = chars("abc");
        assert!(parse(&parser, &input).is_no_match());
    }

    #[test]
    fn test_end() {
        let input = chars("a");
        let stream = input.stream();
        let parser = end::<char, &'static str>();

        assert!(parser.parse(stream).is_no_match());

        let (_, remaining) = parser.parse(stream.next()).into_matched().unwrap();
        assert_eq!(remaining.position(), 1);
        assert!(parser.parse(remaining).is_matched());
    }

    #[test]
    fn test_end_on_empty_input() {
        let input = chars("");
        let (_, remaining) = parse(&end(), &input).into_matched().unwrap();
        assert_eq!(remaining.position(), 0);
    }
}
