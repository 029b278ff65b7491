//! Tests for token recognition, payload conversion, and rendering.

use num_bigint::BigInt;

use super::{FloatBits, Token, tokenize};
use crate::error::ParseError;

fn kinds(src: &str) -> Vec<Token> {
    match tokenize(src) {
        Ok(tokens) => tokens.into_iter().map(|(tok, _)| tok).collect(),
        Err(err) => panic!("tokenize({src:?}) failed: {err}"),
    }
}

fn failure(src: &str) -> ParseError {
    match tokenize(src) {
        Ok(tokens) => panic!("tokenize({src:?}) unexpectedly produced {tokens:?}"),
        Err(err) => err,
    }
}

#[test]
fn numeric_literals_take_the_longest_reading() {
    let cases = [
        ("42", Token::Int(42)),
        ("-7", Token::Int(-7)),
        ("42L", Token::Long(BigInt::from(42))),
        ("-7L", Token::Long(BigInt::from(-7))),
        ("3.5", Token::Float(FloatBits::new(3.5))),
        ("3.", Token::Float(FloatBits::new(3.0))),
        (".5", Token::Float(FloatBits::new(0.5))),
        ("-3.5", Token::Float(FloatBits::new(-3.5))),
    ];

    for (src, expected) in cases {
        assert_eq!(kinds(src), vec![expected], "lexing {src:?}");
    }
}

#[test]
fn unicode_prefix_beats_identifier() {
    assert_eq!(kinds("u\"abc\""), vec![Token::UnicodeStr("abc".into())]);
    assert_eq!(kinds("u'abc'"), vec![Token::UnicodeStr("abc".into())]);
    assert_eq!(kinds("uabc"), vec![Token::Ident("uabc".into())]);
    assert_eq!(kinds("u"), vec![Token::Ident("u".into())]);
}

#[test]
fn quoted_strings_decode_escapes() {
    let cases = [
        (r#""abc""#, "abc"),
        ("'abc'", "abc"),
        (r#""a\nb""#, "a\nb"),
        (r#""a\tb""#, "a\tb"),
        (r#""a\\b""#, "a\\b"),
        (r#""a\"b""#, "a\"b"),
        (r#""a\qb""#, "aqb"),
    ];

    for (src, expected) in cases {
        assert_eq!(kinds(src), vec![Token::Str(expected.into())], "lexing {src}");
    }
}

#[test]
fn whitespace_is_dropped() {
    assert_eq!(
        kinds(" [ 1 ,\t2 ]\n"),
        vec![
            Token::LBracket,
            Token::Int(1),
            Token::Comma,
            Token::Int(2),
            Token::RBracket,
        ]
    );
}

#[test]
fn spans_cover_the_source_text() {
    let tokens = match tokenize("(1, 22)") {
        Ok(tokens) => tokens,
        Err(err) => panic!("tokenize failed: {err}"),
    };
    let spans: Vec<_> = tokens.into_iter().map(|(_, span)| span).collect();
    assert_eq!(spans, vec![0..1, 1..2, 2..3, 4..6, 6..7]);
}

#[test]
fn integer_overflow_is_a_numeric_error_at_the_token() {
    let err = failure("99999999999999999999999999");
    assert!(matches!(err, ParseError::Number { .. }), "got {err:?}");
    assert_eq!(err.span(), &(0..26));
}

#[test]
fn longs_convert_past_the_machine_integer_range() {
    let src = "99999999999999999999999999L";
    let expected = match src.trim_end_matches('L').parse::<BigInt>() {
        Ok(n) => n,
        Err(e) => panic!("BigInt parse failed: {e}"),
    };
    assert_eq!(kinds(src), vec![Token::Long(expected)]);
}

#[test]
fn float_overflow_is_a_numeric_error() {
    let src = format!("{}.0", "9".repeat(400));
    assert!(matches!(failure(&src), ParseError::Number { .. }));
}

#[test]
fn token_display_reescapes_string_payloads() {
    assert_eq!(Token::Str("a\"b".into()).to_string(), r#""a\"b""#);
    assert_eq!(Token::Str("a\\b".into()).to_string(), r#""a\\b""#);
    assert_eq!(Token::UnicodeStr("a\nb".into()).to_string(), "u\"a\\nb\"");
}

#[test]
fn detached_minus_is_rejected() {
    assert!(matches!(failure("- 1"), ParseError::Syntax { .. }));
    assert!(matches!(failure("[1 ; 2]"), ParseError::Syntax { .. }));
}

#[test]
fn lone_dot_is_rejected() {
    assert!(tokenize(".").is_err());
}
