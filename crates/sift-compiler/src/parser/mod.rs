//! Fail-fast recursive-descent parser for selector scripts.
//!
//! ```text
//! Source text → Lexer → Tokens (trivia dropped) → Parser → Selector
//!                                                   ↓
//!                                              SyntaxError
//! ```
//!
//! Unlike a resilient parser, the first error aborts compilation: a partially
//! understood selector cannot be evaluated meaningfully.
//!
//! # Grammar
//!
//! ```text
//! script      = select? path_or_any
//! select      = "+"
//! path_or_any = named_path ( select? "*" suffix? )?
//!             | "*" suffix?
//! named_path  = INSIDE_NAME* NAME
//! suffix      = INSIDE_NAME* NAME
//!
//! INSIDE_NAME = "@" IDENT
//! NAME        = "." IDENT
//! ```
//!
//! A `+` selects whatever immediately follows it: the named path (the wildcard's
//! prefix when a `*` comes next) or the `*` itself.

mod core;
mod error;
mod grammar;
mod lexer;


pub use error::{Fix, SyntaxError, render_errors};
pub use lexer::{Span, Token, TokenKind, lex, token_text};

use sift_core::Selector;

use self::core::Parser;

/// Parse a selector script into a [`Selector`].
pub fn parse(source: &str) -> Result<Selector, SyntaxError> {
    let tokens = lex(source);
    let mut parser = Parser::new(source, tokens)?;
    parser.parse_script()
}
