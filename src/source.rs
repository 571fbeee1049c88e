use crate::input::Input;
use crate::span::Span;
use std::path::{Path, PathBuf};

/// Human readable position of a source offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// 1-based line number
    pub line: usize,
    /// Character offset within the line
    pub column: usize,
}

/// Source text that inputs are built from and diagnostics are resolved against
///
/// Offsets are character indices, matching the spans [`Input::from_source`]
/// assigns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    text: String,
    path: Option<PathBuf>,
}

impl Source {
    pub fn new(text: impl Into<String>) -> Self {
        Source {
            text: text.into(),
            path: None,
        }
    }

    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        Source {
            path: Some(path.into()),
            ..self
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Character input tagged with this source's path
    pub fn input(&self) -> Input<char> {
        let input = Input::from_source(&self.text);
        match &self.path {
            Some(path) => input.with_source(path.clone()),
            None => input,
        }
    }

    /// Line at a 0-based index
    // Re-splits the whole text on every call.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.text.lines().nth(index)
    }

    /// Resolve a character offset to a line and column
    ///
    /// Offsets past the end resolve to the position just after the last
    /// character.
    pub fn locate(&self, offset: usize) -> Location {
        let mut line = 1;
        let mut line_start = 0;

        for (index, ch) in self.text.chars().enumerate() {
            if index >= offset {
                break;
            }
            if ch == '\n' {
                line += 1;
                line_start = index + 1;
            }
        }

        let end = offset.min(self.text.chars().count());
        Location {
            line,
            column: end.saturating_sub(line_start),
        }
    }

    /// Line containing the start of `span`
    pub fn line_of(&self, span: Span) -> Option<&str> {
        self.line(self.locate(span.start).line - 1)
    }
}
