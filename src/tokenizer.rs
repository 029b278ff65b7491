//! Lexical analysis for literal expressions.
//!
//! This module exposes a [`tokenize`] function which converts raw source
//! text into a sequence of `(Token, Span)` pairs. It uses the `logos` crate
//! to recognise tokens, then maps the raw lexer output into [`Token`]:
//! quoted strings arrive with delimiters stripped and escapes resolved, and
//! numeric payloads are converted at this stage so that an overflowing
//! literal is reported as a numeric error carrying the span of its digits.
//!
//! Longest-match lexing resolves the prefix-containment cases of the
//! grammar: `u"x"` wins over the identifier `u`, `12L` wins over `12`, and
//! `1.5` wins over `1`. Only an uppercase `L` marks a long integer.

use std::fmt::{self, Write};

use logos::Logos;
use num_bigint::BigInt;

use crate::error::ParseError;
use crate::value::{write_float, write_quoted};

/// Byte range for a token within the source.
pub type Span = std::ops::Range<usize>;

/// Raw lexer output. Payloads stay as source text until [`tokenize`]
/// converts them into [`Token`].
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
enum RawToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,
    #[regex(r#"u"([^"\\]|\\.)*""#, unicode_string)]
    #[regex(r"u'([^'\\]|\\.)*'", unicode_string)]
    UnicodeStr(String),
    #[regex(r#""([^"\\]|\\.)*""#, quoted_string)]
    #[regex(r"'([^'\\]|\\.)*'", quoted_string)]
    Str(String),
    /// Float literal. The integer part is optional, the dot is not, the
    /// fraction is optional; a sign is only accepted with an integer part.
    #[regex(r"(-?[0-9]+\.[0-9]*|\.[0-9]+)", raw_text)]
    Float(String),
    /// Integer literal with an `L` suffix.
    #[regex(r"-?[0-9]+L", raw_text)]
    Long(String),
    #[regex(r"-?[0-9]+", raw_text)]
    Int(String),
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", raw_text)]
    Ident(String),
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
}

/// An `f64` stored as its IEEE-754 bits so the token stays `Eq + Hash`,
/// which the parser's error type requires of its token type.
///
/// The lexed texture never produces a NaN, so bit equality is value
/// equality here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatBits(u64);

impl FloatBits {
    /// Wrap a float value.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value.to_bits())
    }

    /// The wrapped float value.
    #[must_use]
    pub fn value(self) -> f64 {
        f64::from_bits(self.0)
    }
}

/// Every token in the literal-expression grammar, with string payloads
/// decoded and numeric payloads already converted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// `u`-prefixed quoted string, either quoting style.
    UnicodeStr(String),
    /// Plain quoted string, either quoting style.
    Str(String),
    Float(FloatBits),
    Long(BigInt),
    Int(i64),
    Ident(String),
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnicodeStr(body) => {
                f.write_char('u')?;
                write_quoted(f, body)
            }
            Self::Str(body) => write_quoted(f, body),
            Self::Float(bits) => write_float(f, bits.value()),
            Self::Long(value) => write!(f, "{value}L"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Ident(name) => f.write_str(name),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::LBracket => f.write_str("["),
            Self::RBracket => f.write_str("]"),
            Self::LBrace => f.write_str("{"),
            Self::RBrace => f.write_str("}"),
            Self::Comma => f.write_str(","),
            Self::Colon => f.write_str(":"),
        }
    }
}

fn raw_text(lex: &mut logos::Lexer<'_, RawToken>) -> String {
    lex.slice().to_owned()
}

fn quoted_string(lex: &mut logos::Lexer<'_, RawToken>) -> String {
    unescape(strip_quotes(lex.slice()))
}

fn unicode_string(lex: &mut logos::Lexer<'_, RawToken>) -> String {
    let slice = lex.slice();
    let body = slice.strip_prefix('u').unwrap_or(slice);
    unescape(strip_quotes(body))
}

/// Remove the surrounding quote pair, whichever style delimits `text`.
fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .or_else(|| text.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')))
        .unwrap_or(text)
}

/// Decode backslash escapes. Unknown escapes keep the escaped character.
fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('0') => out.push('\0'),
            // Covers `\\`, `\"`, `\'` and any escape we do not recognise.
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn convert_int(text: &str, span: &Span) -> Result<i64, ParseError> {
    text.parse().map_err(|e| ParseError::Number {
        span: span.clone(),
        message: format!("integer literal `{text}`: {e}"),
    })
}

fn convert_long(text: &str, span: &Span) -> Result<BigInt, ParseError> {
    let digits = text.strip_suffix('L').unwrap_or(text);
    digits.parse().map_err(|e| ParseError::Number {
        span: span.clone(),
        message: format!("long literal `{text}`: {e}"),
    })
}

/// A literal whose value lands outside the finite `f64` range is rejected
/// rather than parsed to infinity, which would have no re-parseable
/// rendering.
fn convert_float(text: &str, span: &Span) -> Result<FloatBits, ParseError> {
    let value: f64 = text.parse().map_err(|e| ParseError::Number {
        span: span.clone(),
        message: format!("float literal `{text}`: {e}"),
    })?;
    if value.is_finite() {
        Ok(FloatBits::new(value))
    } else {
        Err(ParseError::Number {
            span: span.clone(),
            message: format!("float literal `{text}` overflows the representable range"),
        })
    }
}

/// Tokenise the source, excluding whitespace.
///
/// Returns the significant tokens with their byte spans, or the first
/// error: a syntax error for input the lexer cannot recognise, or a
/// numeric error for a literal the lexer accepts but conversion rejects.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] when the input contains a character
/// sequence outside the literal-expression alphabet, such as a `-` that is
/// not attached to digits, and [`ParseError::Number`] when a numeric
/// literal fails conversion, such as an integer exceeding the `i64` range.
///
/// # Examples
///
/// ```rust
/// use pylit::{Token, tokenize};
///
/// let tokens = tokenize("(1, 2)").unwrap_or_else(|e| panic!("lex failed: {e}"));
/// assert_eq!(tokens.first().map(|(tok, _)| tok.clone()), Some(Token::LParen));
/// ```
pub fn tokenize(src: &str) -> Result<Vec<(Token, Span)>, ParseError> {
    let mut lexer = RawToken::lexer(src);
    let mut out = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let Ok(raw) = result else {
            let fragment = src.get(span.clone()).unwrap_or("");
            return Err(ParseError::Syntax {
                span,
                message: format!("unrecognised character `{fragment}`"),
            });
        };
        let token = match raw {
            RawToken::Whitespace => continue,
            RawToken::UnicodeStr(body) => Token::UnicodeStr(body),
            RawToken::Str(body) => Token::Str(body),
            RawToken::Float(text) => Token::Float(convert_float(&text, &span)?),
            RawToken::Long(text) => Token::Long(convert_long(&text, &span)?),
            RawToken::Int(text) => Token::Int(convert_int(&text, &span)?),
            RawToken::Ident(name) => Token::Ident(name),
            RawToken::LParen => Token::LParen,
            RawToken::RParen => Token::RParen,
            RawToken::LBracket => Token::LBracket,
            RawToken::RBracket => Token::RBracket,
            RawToken::LBrace => Token::LBrace,
            RawToken::RBrace => Token::RBrace,
            RawToken::Comma => Token::Comma,
            RawToken::Colon => Token::Colon,
        };
        out.push((token, span));
    }
    Ok(out)
}

#[cfg(test)]
mod tests;
