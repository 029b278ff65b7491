//! Library crate for pylit.
//!
//! Parses Python-style literal expressions (strings, unicode strings,
//! integers, long integers, floats, tuples, lists, sets, dictionaries, and
//! constructor-call "instance" forms) into a recursive [`Value`] tree.
//!
//! The whole input must form a single literal expression; trailing text is
//! rejected. Parsing is a pure transform with no I/O and no shared state, so
//! [`parse`] may be called concurrently from any number of call sites.
//!
//! # Examples
//!
//! ```rust
//! use pylit::{Value, parse};
//!
//! let value = parse("[1, (2, 3)]").unwrap_or_else(|e| panic!("parse failed: {e}"));
//! assert_eq!(
//!     value,
//!     Value::List(vec![
//!         Value::Int(1),
//!         Value::Tuple(vec![Value::Int(2), Value::Int(3)]),
//!     ])
//! );
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod parser;
pub mod tokenizer;
pub mod value;

pub use error::ParseError;
pub use parser::parse;
pub use tokenizer::{FloatBits, Span, Token, tokenize};
pub use value::Value;
