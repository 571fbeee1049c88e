use crate::span::{Span, Spanned};
use crate::stream::Stream;
use std::path::{Path, PathBuf};

/// Owned sequence of spanned items that streams are created from
#[derive(Debug, Clone, PartialEq)]
pub struct Input<I> {
    items: Vec<Spanned<I>>,
    source: Option<PathBuf>,
}

impl<I> Input<I> {
    /// Wrap already spanned items, e.g. the output of a lexer
    pub fn new(items: Vec<Spanned<I>>) -> Self {
        Input {
            items,
            source: None,
        }
    }

    /// Give each item a unit-width span numbered from `base`
    ///
    /// Offsets saturate at `usize::MAX`.
    pub fn from_sequence(items: impl IntoIterator<Item = I>, base: usize) -> Self {
        let items = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let start = base.saturating_add(index);
                Spanned::new(item, Span::new(start, start.saturating_add(1)))
            })
            .collect();
        Input::new(items)
    }

    /// Tag the input with the path it was read from
    pub fn with_source(self, source: impl Into<PathBuf>) -> Self {
        Input {
            source: Some(source.into()),
            ..self
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn items(&self) -> &[Spanned<I>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Convert every item, keeping spans and source
    pub fn map<U>(&self, mapper: impl Fn(&I) -> U) -> Input<U> {
        Input {
            items: self
                .items
                .iter()
                .map(|spanned| Spanned::new(mapper(&spanned.item), spanned.span))
                .collect(),
            source: self.source.clone(),
        }
    }

    /// Cursor at the first item
    pub fn stream(&self) -> Stream<'_, I> {
        let stream = Stream::new(&self.items);
        match self.source.as_deref() {
            Some(source) => stream.with_source(source),
            None => stream,
        }
    }
}

impl Input<char> {
    /// One item per character of `text`, spans numbered from zero
    pub fn from_source(text: &str) -> Self {
        Input::from_sequence(text.chars(), 0)
    }
}
