//! # SpanComb - Parser Combinator Library
//!
//! A parser combinator library over arbitrary item sequences: characters,
//! tokens or anything comparable. Every item carries a source span, so every
//! match and every error can be traced back to where it came from.
//!
//! Parsers return an [`Outcome`] with three shapes:
//!
//! - **Matched**: the value and the remaining stream
//! - **NoMatch**: this alternative does not apply; siblings retry from the
//!   original input
//! - **Errored**: a committed failure with a caller-defined error and a span,
//!   never retried by any combinator
//!
//! Commitment is explicit: `.require(error)` turns a miss into an error at a
//! point of no return in the grammar.
//!
//! ```
//! use spancomb::prelude::*;
//!
//! let input = Input::from_source("[1,2,3]");
//! let digits = filter(|c: &char| c.is_ascii_digit())
//!     .separated_by(just(','))
//!     .delimited_by(just('['), just(']').require("unclosed list"));
//!
//! let outcome: Outcome<'_, char, Vec<char>, &str> = digits.parse(input.stream());
//! let (values, remaining) = outcome.into_matched().unwrap();
//! assert_eq!(values, vec!['1', '2', '3']);
//! assert!(remaining.is_at_end());
//! ```

pub mod boolean;
pub mod check;
pub mod choice;
pub mod context;
pub mod delimited;
pub mod error;
pub mod input;
pub mod lazy;
pub mod map;
pub mod optional;
pub mod or;
pub mod outcome;
pub mod parser;
pub mod position;
pub mod prelude;
pub mod primitive;
pub mod repeated;
pub mod require;
pub mod separated;
pub mod source;
pub mod span;
pub mod stream;
pub mod then;

#[cfg(test)]
mod testing;

pub use choice::{Choice, choice};
pub use error::ParseFailure;
pub use input::Input;
pub use lazy::{Lazy, lazy};
pub use outcome::Outcome;
pub use parser::{BoxExt, BoxedParser, Parser};
pub use position::{Position, PositionExt};
pub use source::{Location, Source};
pub use span::{Span, Spanned};
pub use stream::Stream;
