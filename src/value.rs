//! The recursive value model produced by parsing.
//!
//! Every parseable literal maps onto one [`Value`] variant. Values are
//! immutable once built; composites own their children outright, and every
//! child is fully constructed before its parent exists.
//!
//! The `Display` impl renders the canonical literal form, chosen so that
//! re-parsing the rendering yields an equal value. Canonical strings are
//! double-quoted and canonical floats always contain a `.` with digits on
//! both sides, so `3.` and `3.0` collapse to `3.0`.

use std::fmt::{self, Write};

use num_bigint::BigInt;

/// A parsed literal expression.
///
/// `Str` and `UnicodeStr` stay distinct variants even for identical
/// content, as do `Int` and `Long` for identical numeric values: the
/// `u` prefix and the `L` suffix are load-bearing in the source syntax.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Single- or double-quoted string.
    Str(String),
    /// `u`-prefixed quoted string.
    UnicodeStr(String),
    /// Decimal integer, optionally negative.
    Int(i64),
    /// Integer with the `L` suffix; arbitrary precision.
    Long(BigInt),
    /// Decimal float written with a mandatory `.`. Parsing never produces
    /// a non-finite value; a literal overflowing `f64` is rejected as a
    /// numeric error instead.
    Float(f64),
    /// Parenthesised sequence; arity is fixed by the element count.
    Tuple(Vec<Value>),
    /// Bracketed sequence.
    List(Vec<Value>),
    /// Braced sequence without `:` separators. Element order and
    /// duplicates are preserved as written.
    Set(Vec<Value>),
    /// Braced sequence of `key: value` pairs, in source order.
    Dict(Vec<(Value, Value)>),
    /// Constructor call recorded structurally: a name and its positional
    /// arguments, not evaluated any further.
    Instance {
        /// Constructor identifier.
        name: String,
        /// Positional arguments, in source order.
        args: Vec<Value>,
    },
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(body) => write_quoted(f, body),
            Self::UnicodeStr(body) => {
                f.write_char('u')?;
                write_quoted(f, body)
            }
            Self::Int(value) => write!(f, "{value}"),
            Self::Long(value) => write!(f, "{value}L"),
            Self::Float(value) => write_float(f, *value),
            Self::Tuple(items) => write_seq(f, '(', items, ')'),
            Self::List(items) => write_seq(f, '[', items, ']'),
            Self::Set(items) => write_seq(f, '{', items, '}'),
            Self::Dict(entries) => {
                f.write_char('{')?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_char('}')
            }
            Self::Instance { name, args } => {
                f.write_str(name)?;
                write_seq(f, '(', args, ')')
            }
        }
    }
}

pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, body: &str) -> fmt::Result {
    f.write_char('"')?;
    for ch in body.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '"' => f.write_str("\\\"")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\0' => f.write_str("\\0")?,
            other => f.write_char(other)?,
        }
    }
    f.write_char('"')
}

pub(crate) fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let rendered = value.to_string();
    // f64's Display never uses scientific notation, so a finite value
    // without a dot is a whole number.
    if value.is_finite() && !rendered.contains('.') {
        write!(f, "{rendered}.0")
    } else {
        f.write_str(&rendered)
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, open: char, items: &[Value], close: char) -> fmt::Result {
    f.write_char(open)?;
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_char(close)
}
