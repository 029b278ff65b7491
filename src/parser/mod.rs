//! Chumsky-based parser for literal expressions.
//!
//! This module contains the entry point for parsing a literal expression.
//! The input is tokenised, the token stream is fed through the grammar in
//! [`grammar`], and the whole input must be consumed. Failures are
//! classified into the [`ParseError`] taxonomy from the raw `chumsky`
//! errors.

use chumsky::Stream;
use chumsky::prelude::*;
use log::debug;

use crate::error::ParseError;
use crate::tokenizer::{Token, tokenize};
use crate::value::Value;

mod grammar;

/// Parse a complete literal expression.
///
/// The grammar must consume the entire input: a well-formed literal
/// followed by anything else is a [`ParseError::TrailingInput`], not a
/// success.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] when no grammar alternative matches
/// (including truncated input such as `[1, 2`), [`ParseError::Number`]
/// when the tokenizer recognises a numeric literal whose conversion
/// fails, and [`ParseError::TrailingInput`] when input remains after a
/// complete expression.
///
/// # Examples
///
/// ```rust
/// use pylit::{Value, parse};
///
/// let value = parse("{1: 2}").unwrap_or_else(|e| panic!("parse failed: {e}"));
/// assert_eq!(value, Value::Dict(vec![(Value::Int(1), Value::Int(2))]));
/// ```
pub fn parse(src: &str) -> Result<Value, ParseError> {
    let tokens = tokenize(src)?;
    let eoi = src.len()..src.len();
    let stream = Stream::from_iter(eoi, tokens.into_iter());
    grammar::expression()
        .then_ignore(end())
        .parse(stream)
        .map_err(|errors| {
            let err = classify(errors);
            debug!("parse failed: {err}");
            err
        })
}

/// Reduce the collected `chumsky` errors to one [`ParseError`].
///
/// The error that progressed furthest into the input wins. An error whose
/// sole expectation is end-of-input means a complete expression was
/// followed by trailing tokens; everything else is a syntax error.
/// Numeric failures never reach this point, the tokenizer reports them
/// before the grammar runs.
fn classify(errors: Vec<Simple<Token>>) -> ParseError {
    errors
        .into_iter()
        .max_by_key(|err| err.span().start)
        .map_or_else(
            || ParseError::Syntax {
                span: 0..0,
                message: "empty input".to_string(),
            },
            |err| classify_single(&err),
        )
}

fn classify_single(err: &Simple<Token>) -> ParseError {
    let mut expected = err.expected().peekable();
    let expects_only_end = expected.peek().is_some() && err.expected().all(Option::is_none);
    if err.found().is_some() && expects_only_end {
        return ParseError::TrailingInput { span: err.span() };
    }

    ParseError::Syntax {
        span: err.span(),
        message: describe(err),
    }
}

fn describe(err: &Simple<Token>) -> String {
    let found = err
        .found()
        .map_or_else(|| "end of input".to_string(), |tok| format!("`{tok}`"));

    let mut expected: Vec<String> = err
        .expected()
        .map(|alt| {
            alt.as_ref()
                .map_or_else(|| "end of input".to_string(), |tok| format!("`{tok}`"))
        })
        .collect();
    expected.sort();
    expected.dedup();

    if expected.is_empty() {
        format!("unexpected {found}")
    } else {
        format!("expected {}, found {found}", expected.join(" or "))
    }
}
