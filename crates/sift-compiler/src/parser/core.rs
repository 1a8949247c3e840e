//! Parser state and low-level token operations.

use super::error::{Fix, SyntaxError};
use super::lexer::{Span, Token, TokenKind, token_text};

/// Parser state machine over the non-trivia token stream.
pub(super) struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    /// Current position in `tokens`. Monotonically increases.
    pub(super) pos: usize,
}

impl<'src> Parser<'src> {
    /// Drops trivia and rejects unlexable input up front.
    pub(super) fn new(source: &'src str, tokens: Vec<Token>) -> Result<Self, SyntaxError> {
        let tokens: Vec<Token> = tokens.into_iter().filter(|t| !t.kind.is_trivia()).collect();

        if let Some(garbage) = tokens.iter().find(|t| t.kind == TokenKind::Garbage) {
            return Err(SyntaxError::new(garbage.span, "unrecognized input in selector")
                .with_found(token_text(source, garbage)));
        }

        Ok(Self {
            source,
            tokens,
            pos: 0,
        })
    }

    pub(super) fn current(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    /// Lookahead by `n` tokens (0 = current).
    pub(super) fn nth(&self, lookahead: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + lookahead).map(|t| t.kind)
    }

    pub(super) fn at(&self, kind: TokenKind) -> bool {
        self.nth(0) == Some(kind)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Consume the current token. Must not be called at EOF.
    pub(super) fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos];
        self.pos += 1;
        token
    }

    /// Consume the current token if it has the given kind.
    pub(super) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(super) fn text(&self, token: &Token) -> &'src str {
        token_text(self.source, token)
    }

    /// Identifier of an `@name` / `.name` token, without its sigil.
    pub(super) fn ident(&self, token: &Token) -> &'src str {
        &self.text(token)[1..]
    }

    pub(super) fn current_span(&self) -> Span {
        self.current()
            .map_or_else(|| Span::empty(self.source.len()), |t| t.span)
    }

    /// Error at the current token, recording its text as the offending token.
    pub(super) fn error_here(&self, message: impl Into<String>) -> SyntaxError {
        let Some(token) = self.current() else {
            return SyntaxError::at_offset(self.source.len(), message).with_found("end of input");
        };

        let text = self.text(&token);
        let err = SyntaxError::new(token.span, message).with_found(text);
        if token.kind == TokenKind::Id {
            return err.with_fix(Fix::new(
                format!(".{text}"),
                format!("names are written with a leading dot: `.{text}`"),
            ));
        }
        err
    }
}
