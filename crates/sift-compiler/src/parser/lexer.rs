//! Lexer for selector scripts.
//!
//! Produces span-based tokens without storing text; text is sliced from source only when needed.
//!
//! ## Error handling
//!
//! Consecutive unlexable characters coalesce into a single `Garbage` token instead of
//! one error per character.

use std::ops::Range;

use logos::Logos;
use serde::Serialize;

/// Byte range in the selector script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn empty(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("+")]
    Plus,

    #[token("*")]
    Star,

    /// `@identifier`: an ancestor path segment.
    #[regex(r"@[A-Za-z_][A-Za-z0-9_]*")]
    InsideName,

    /// `.identifier`: a terminal name.
    #[regex(r"\.[A-Za-z_][A-Za-z0-9_]*")]
    Name,

    /// Identifier without `@` or `.`; never valid, lexed for better diagnostics.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Id,

    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    /// Coalesced run of unlexable characters.
    Garbage,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        self == Self::Whitespace
    }

    /// Human-readable description for diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Plus => "`+`",
            Self::Star => "`*`",
            Self::InsideName => "inside name",
            Self::Name => "name",
            Self::Id => "bare identifier",
            Self::Whitespace => "whitespace",
            Self::Garbage => "unrecognized input",
        }
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes source into a vector of span-based tokens, trivia included.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(TokenKind::Garbage, Span::new(start, end)));
                }

                tokens.push(Token::new(kind, lexer.span().into()));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        TokenKind::Garbage,
                        Span::new(start, source.len()),
                    ));
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[token.span.range()]
}
