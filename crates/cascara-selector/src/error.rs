//! Errors raised by the selector layer.
//!
//! Construction and access errors indicate a bug in the caller; syntax and
//! nesting errors indicate bad stylesheet input and carry enough context to
//! point at it.

use cascara_common::SourceSpan;
use thiserror::Error;

/// Every failure the selector layer can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A complex selector was built with neither leading combinators nor
    /// components.
    #[error("a complex selector may not be empty")]
    InvalidConstruction,

    /// `last_component` was called on a complex selector that only holds
    /// leading combinators.
    #[error("complex selector \"{selector}\" has no components")]
    OutOfRange {
        /// The offending selector, serialized.
        selector: String,
    },

    /// The selector text could not be parsed.
    #[error("{message}\n  at {span}")]
    Syntax {
        /// Human-readable description of what was expected.
        message: String,
        /// Where parsing failed.
        span: SourceSpan,
    },

    /// A parent selector (`&`) was used with no enclosing rule.
    #[error("top-level selectors may not contain the parent selector \"&\"")]
    TopLevelParent {
        /// Where the selector came from, if known.
        span: Option<SourceSpan>,
    },

    /// A parent ending in a combinator was merged into a compound selector.
    #[error("selector \"{parent}\" can't be used as a parent in a compound selector")]
    InvalidParent {
        /// The parent selector, serialized.
        parent: String,
    },

    /// `&-suffix` was applied to a parent whose last simple selector can't
    /// take a suffix.
    #[error("selector \"{selector}\" can't have a suffix \"{suffix}\"")]
    InvalidSuffix {
        /// The simple selector the suffix was applied to, serialized.
        selector: String,
        /// The suffix.
        suffix: String,
    },
}

impl SelectorError {
    /// The source span attached to this error, if any.
    #[must_use]
    pub fn span(&self) -> Option<&SourceSpan> {
        match self {
            Self::Syntax { span, .. } => Some(span),
            Self::TopLevelParent { span } => span.as_ref(),
            Self::InvalidConstruction
            | Self::OutOfRange { .. }
            | Self::InvalidParent { .. }
            | Self::InvalidSuffix { .. } => None,
        }
    }
}
