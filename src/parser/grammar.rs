//! The literal-expression grammar.
//!
//! Built from `chumsky` combinators over the token stream. Alternatives are
//! tried in a fixed priority order with the first success winning: within
//! the expression root the order is atom, tuple, instance, dictionary, set,
//! list. Instance must follow tuple so a bare tuple is never consumed as an
//! argument list, and dictionary must precede set so a brace pair is read
//! as a dictionary exactly when each element carries a `:` separator. A
//! brace pair whose elements carry no `:` degrades to set parsing as a
//! whole, never element by element.
//!
//! The expression root is self-referential; `recursive` supplies the
//! forward declaration that lets every composite rule parse its elements
//! by re-entering the root.

use chumsky::prelude::*;

use crate::tokenizer::{Span, Token};
use crate::value::Value;

/// The expression root.
///
/// Composite rules require at least one element; the lone exception is the
/// trailing `{}` alternative, which yields an empty dictionary.
pub(super) fn expression() -> impl Parser<Token, Value, Error = Simple<Token>> {
    recursive(|expr| {
        // Numeric payloads were converted during tokenisation, so no atom
        // can fail here for any reason other than the token kind.
        let atom = filter_map(|span: Span, tok: Token| match tok {
            Token::UnicodeStr(body) => Ok(Value::UnicodeStr(body)),
            Token::Str(body) => Ok(Value::Str(body)),
            Token::Float(bits) => Ok(Value::Float(bits.value())),
            Token::Long(value) => Ok(Value::Long(value)),
            Token::Int(value) => Ok(Value::Int(value)),
            other => Err(Simple::expected_input_found(
                span,
                core::iter::empty(),
                Some(other),
            )),
        });

        let items = expr
            .clone()
            .separated_by(just(Token::Comma))
            .at_least(1);

        let tuple_ = items
            .clone()
            .delimited_by(just(Token::LParen), just(Token::RParen))
            .map(Value::Tuple);

        let identifier = filter_map(|span: Span, tok: Token| match tok {
            Token::Ident(name) => Ok(name),
            other => Err(Simple::expected_input_found(
                span,
                core::iter::empty(),
                Some(other),
            )),
        });

        let instance = identifier
            .then(
                items
                    .clone()
                    .delimited_by(just(Token::LParen), just(Token::RParen)),
            )
            .map(|(name, args)| Value::Instance { name, args });

        let dictionary = expr
            .clone()
            .then_ignore(just(Token::Colon))
            .then(expr.clone())
            .separated_by(just(Token::Comma))
            .at_least(1)
            .delimited_by(just(Token::LBrace), just(Token::RBrace))
            .map(Value::Dict);

        let set_ = items
            .clone()
            .delimited_by(just(Token::LBrace), just(Token::RBrace))
            .map(Value::Set);

        let list_ = items
            .delimited_by(just(Token::LBracket), just(Token::RBracket))
            .map(Value::List);

        // `{}` matches neither dictionary nor set above, both of which
        // need an element. It reads as an empty dictionary.
        let empty_braces = just(Token::LBrace)
            .ignore_then(just(Token::RBrace))
            .to(Value::Dict(Vec::new()));

        choice((
            atom,
            tuple_,
            instance,
            dictionary,
            set_,
            list_,
            empty_braces,
        ))
    })
}
