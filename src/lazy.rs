use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking recursion between parsers.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Item = P::Item;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(
        &self,
        stream: Stream<'code, Self::Item>,
    ) -> Outcome<'code, Self::Item, Self::Output, Self::Error> {
        let parser = (self.factory)();
        parser.parse(stream)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use crate::primitive::{just, one_of};
    use crate::testing::{TestError, chars, parse};

    /// Nesting depth of balanced parentheses: `()` is 1, `(())` is 2
    fn nested<'code>() -> BoxedParser<'code, char, usize, TestError> {
        lazy(nested)
            .delimited_by(just('('), just(')'))
            .map(|depth| depth + 1)
            .or_else(0)
            .boxed()
    }

    #[test]
    fn test_lazy_basic() {
        let input = chars("aaaa");
        let parser = lazy(|| just('a'));

        let (output, remaining) = parse(&parser, &input).into_matched().unwrap();
        assert_eq!(output, 'a');
        assert_eq!(remaining.position(), 1);
    }

    #[test]
    fn test_lazy_with_repeated() {
        let input = chars("aaaa");
        let parser = lazy(|| just('a').repeated());

        let (output, remaining) = parse(&parser, &input).into_matched().unwrap();
        assert_eq!(output.len(), 4);
        assert_eq!(remaining.position(), 4);
    }

    #[test]
    fn test_lazy_recursive_grammar() {
        let input = chars("((()))x");
        let (depth, remaining) = parse(&nested(), &input).into_matched().unwrap();

        assert_eq!(depth, 3);
        assert_eq!(remaining.position(), 6);
    }

    #[test]
    fn test_lazy_recursive_unbalanced() {
        // The innermost "()" is missing its closer, so the whole nest falls
        // back to depth 0 without consuming
        let input = chars("((x");
        let (depth, remaining) = parse(&nested(), &input).into_matched().unwrap();

        assert_eq!(depth, 0);
        assert_eq!(remaining.position(), 0);
    }

    #[test]
    fn test_lazy_recursive_list() {
        // value := digit | '[' value (',' value)* ']'
        fn value<'code>() -> BoxedParser<'code, char, usize, TestError> {
            one_of('0'..='9')
                .to(1)
                .or(lazy(value)
                    .separated_by(just(','))
                    .delimited_by(just('['), just(']'))
                    .map(|values: Vec<usize>| values.into_iter().sum()))
                .boxed()
        }

        let input = chars("[1,[2,3],[],4]");
        let (leaves, remaining) = parse(&value(), &input).into_matched().unwrap();
        assert_eq!(leaves, 4);
        assert!(remaining.is_at_end());
    }
}
