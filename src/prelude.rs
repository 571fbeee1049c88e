//! Everything needed to write a grammar: core types, primitives and the
//! extension traits that provide the builder methods

pub use crate::boolean::BooleanExt;
pub use crate::check::AndCheckExt;
pub use crate::choice::choice;
pub use crate::context::ContextExt;
pub use crate::delimited::DelimitedExt;
pub use crate::error::ParseFailure;
pub use crate::input::Input;
pub use crate::lazy::lazy;
pub use crate::map::MapExt;
pub use crate::optional::OptionalExt;
pub use crate::or::OrExt;
pub use crate::outcome::Outcome;
pub use crate::parser::{BoxExt, BoxedParser, Parser};
pub use crate::position::PositionExt;
pub use crate::primitive::{end, filter, just, one_of, sequence};
pub use crate::repeated::RepeatedExt;
pub use crate::require::RequireExt;
pub use crate::separated::SeparatedExt;
pub use crate::span::{Span, Spanned};
pub use crate::stream::Stream;
pub use crate::then::ThenExt;
