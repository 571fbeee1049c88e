use crate::span::Span;

/// Failure of a complete parse, as returned by [`Outcome::into_result`]
///
/// [`Outcome::into_result`]: crate::outcome::Outcome::into_result
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure<E> {
    /// The grammar did not apply to the input
    #[error("input did not match")]
    NoMatch,
    /// A committed grammar path failed at `span`
    #[error("{error} at {span}")]
    Errored { error: E, span: Span },
}

impl<E> ParseFailure<E> {
    /// Location of the failure, if one is known
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseFailure::NoMatch => None,
            ParseFailure::Errored { span, .. } => Some(*span),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_display() {
        let failure: ParseFailure<&str> = ParseFailure::NoMatch;

        assert_eq!(failure.to_string(), "input did not match");
        assert_eq!(failure.span(), None);
    }

    #[test]
    fn test_errored_display() {
        let failure = ParseFailure::Errored {
            error: "expected value",
            span: Span::new(3, 4),
        };

        assert_eq!(failure.to_string(), "expected value at 3..4");
        assert_eq!(failure.span(), Some(Span::new(3, 4)));
    }
}
