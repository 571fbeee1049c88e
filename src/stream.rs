use crate::span::{Span, Spanned};
use std::fmt;
use std::path::Path;

/// Immutable cursor over a sequence of spanned items
///
/// A stream never mutates the items it views. Every operation that moves the
/// cursor returns a new stream, and since the stream is `Copy` a combinator can
/// hold on to the stream it was given and retry from it after a failed attempt.
pub struct Stream<'code, I> {
    items: &'code [Spanned<I>],
    position: usize,
    source: Option<&'code Path>,
}

impl<'code, I> Stream<'code, I> {
    /// Create a stream positioned at the first item
    pub fn new(items: &'code [Spanned<I>]) -> Self {
        Stream {
            items,
            position: 0,
            source: None,
        }
    }

    /// Tag the stream with the path of the source it was built from
    pub fn with_source(self, source: &'code Path) -> Self {
        Stream {
            source: Some(source),
            ..self
        }
    }

    pub fn source(&self) -> Option<&'code Path> {
        self.source
    }

    /// All items, consumed or not
    pub fn items(&self) -> &'code [Spanned<I>] {
        self.items
    }

    /// Items from the cursor onwards
    pub fn remaining(&self) -> &'code [Spanned<I>] {
        &self.items[self.position..]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.items.len()
    }

    /// Item under the cursor, `None` at end of input
    pub fn peek(&self) -> Option<&'code Spanned<I>> {
        self.items.get(self.position)
    }

    /// Last item consumed before the cursor, `None` at the start
    pub fn previous(&self) -> Option<&'code Spanned<I>> {
        self.position
            .checked_sub(1)
            .and_then(|index| self.items.get(index))
    }

    /// Move the cursor forward, stopping at the end of input
    pub fn advance(self, by: usize) -> Self {
        Stream {
            position: self.position.saturating_add(by).min(self.items.len()),
            ..self
        }
    }

    pub fn next(self) -> Self {
        self.advance(1)
    }

    /// Span of the final item of the input
    pub fn end_span(&self) -> Option<Span> {
        self.items.last().map(|spanned| spanned.span)
    }

    /// Span of the first item of the input, `0..0` when there is none
    pub fn start_span(&self) -> Span {
        self.items
            .first()
            .map(|spanned| spanned.span)
            .unwrap_or_default()
    }

    /// Span of the last consumed item, falling back to [`Stream::start_span`]
    pub fn last_consumed_span(&self) -> Span {
        self.previous()
            .map(|spanned| spanned.span)
            .unwrap_or_else(|| self.start_span())
    }

    /// Source offset of the cursor
    ///
    /// The start of the current item, or the end of the previous one once the
    /// input is exhausted.
    pub fn offset(&self) -> usize {
        match (self.peek(), self.previous()) {
            (Some(current), _) => current.span.start,
            (None, Some(previous)) => previous.span.end,
            (None, None) => 0,
        }
    }

    /// Span of the items consumed between this cursor and `later`
    ///
    /// Runs from the start of the first item looked at to the end of the last
    /// item consumed. When nothing was consumed the span is zero-width at
    /// [`Stream::offset`].
    pub fn span_until(&self, later: &Stream<'code, I>) -> Span {
        if later.position > self.position {
            if let (Some(first), Some(last)) = (self.peek(), later.previous()) {
                return first.span + last.span;
            }
        }
        Span::point(self.offset())
    }
}

impl<'code, I: PartialEq> Stream<'code, I> {
    /// Whether the remaining items begin with `pattern`
    ///
    /// An empty pattern never matches.
    pub fn starts_with(&self, pattern: &[I]) -> bool {
        let remaining = self.remaining();
        !pattern.is_empty()
            && remaining.len() >= pattern.len()
            && remaining
                .iter()
                .zip(pattern)
                .all(|(spanned, expected)| spanned.item == *expected)
    }
}

impl<I> Clone for Stream<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for Stream<'_, I> {}

impl<I: PartialEq> PartialEq for Stream<'_, I> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.source == other.source && self.items == other.items
    }
}

impl<I: fmt::Debug> fmt::Debug for Stream<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("position", &self.position)
            .field("len", &self.items.len())
            .field("next", &self.peek())
            .field("source", &self.source)
            .finish()
    }
}
