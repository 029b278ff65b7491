//! Error types reported by [`crate::parse`].
//!
//! Every failure is total: a failing sub-expression fails its enclosing
//! expression, and the caller receives exactly one error for the whole
//! input. The taxonomy separates malformed input, numeric overflow, and
//! trailing garbage after an otherwise complete literal.

use thiserror::Error;

use crate::tokenizer::Span;

/// A parse failure, carrying the byte span of the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No grammar alternative matches at `span`, or the lexer could not
    /// recognise the input there at all.
    #[error("syntax error at {}..{}: {message}", span.start, span.end)]
    Syntax {
        /// Location of the unexpected input.
        span: Span,
        /// What was expected and what was found.
        message: String,
    },
    /// A digit sequence the grammar accepted was rejected by numeric
    /// conversion, such as an integer exceeding the `i64` range.
    #[error("invalid numeric literal at {}..{}: {message}", span.start, span.end)]
    Number {
        /// Location of the literal.
        span: Span,
        /// Conversion failure detail.
        message: String,
    },
    /// A complete expression was parsed but input remains. Distinct from
    /// [`ParseError::Syntax`] so callers can tell malformed input from
    /// trailing garbage.
    #[error("trailing input at {}..{} after a complete expression", span.start, span.end)]
    TrailingInput {
        /// Location of the first unconsumed token.
        span: Span,
    },
}

impl ParseError {
    /// Byte span of the input region the error points at.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::Syntax { span, .. } | Self::Number { span, .. } | Self::TrailingInput { span } => {
                span
            }
        }
    }
}
