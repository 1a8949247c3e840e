//! Grammar productions, implemented as an extension of `Parser`.

use sift_core::{AnyElement, BuildError, Name, Selector};

use super::core::Parser;
use super::error::SyntaxError;
use super::lexer::{Span, TokenKind};

impl Parser<'_> {
    pub(super) fn parse_script(&mut self) -> Result<Selector, SyntaxError> {
        if self.eof() {
            return Err(SyntaxError::new(
                Span::new(0, self.source.len()),
                "empty selector script; expected `.name` or `*`",
            ));
        }

        let selected = self.eat(TokenKind::Plus);

        match self.nth(0) {
            Some(TokenKind::Star) => {
                self.bump();
                return self.parse_any_tail(None, selected);
            }
            Some(TokenKind::InsideName | TokenKind::Name) => {}
            _ if selected => return Err(self.error_here("expected `@name`, `.name` or `*` after `+`")),
            _ => return Err(self.error_here("expected `+`, `@name`, `.name` or `*`")),
        }

        let name = self.parse_named_path(selected)?;

        let star_selected = self.at(TokenKind::Plus) && self.nth(1) == Some(TokenKind::Star);
        if star_selected {
            self.bump();
        }
        if self.eat(TokenKind::Star) {
            return self.parse_any_tail(Some(name), star_selected);
        }

        self.expect_end()?;
        Ok(Selector::from(name))
    }

    /// `INSIDE_NAME* NAME`. The caller has checked that the path starts here.
    fn parse_named_path(&mut self, selected: bool) -> Result<Name, SyntaxError> {
        let start = self.current_span().start;
        let mut inside_names = Vec::new();

        while self.at(TokenKind::InsideName) {
            let token = self.bump();
            inside_names.push(self.ident(&token));
        }

        if !self.at(TokenKind::Name) {
            let last = inside_names.last().copied().unwrap_or_default();
            return Err(self.error_here(format!(
                "`@{last}` must be followed by a `.name` terminal"
            )));
        }

        let token = self.bump();
        let span = Span::new(start, token.span.end);
        Name::builder(self.ident(&token))
            .inside_names(inside_names)
            .is_selected(selected)
            .build()
            .map_err(|e| build_error(span, e))
    }

    /// Everything after `*`: an optional suffix path, then end of input.
    fn parse_any_tail(&mut self, prefix: Option<Name>, selected: bool) -> Result<Selector, SyntaxError> {
        let start = self.current_span().start;
        let mut builder = AnyElement::builder().is_selected(selected);
        if let Some(prefix) = prefix {
            builder = builder.prefix(prefix);
        }

        if self.at(TokenKind::Plus) {
            return Err(self.error_here("a wildcard suffix cannot be selected"));
        }
        if matches!(self.nth(0), Some(TokenKind::InsideName | TokenKind::Name)) {
            builder = builder.suffix(self.parse_named_path(false)?);
        }

        self.expect_end()?;

        let any = builder
            .build()
            .map_err(|e| build_error(Span::new(start, self.source.len()), e))?;
        Ok(Selector::from(any))
    }

    fn expect_end(&self) -> Result<(), SyntaxError> {
        let Some(kind) = self.nth(0) else {
            return Ok(());
        };

        let message = match kind {
            TokenKind::InsideName | TokenKind::Name => {
                "a selector has a single terminal; separate two paths with `*`"
            }
            TokenKind::Star => "a selector has at most one `*`",
            TokenKind::Plus => "`+` here must be immediately followed by `*`",
            _ => "unexpected token after selector",
        };
        Err(self.error_here(message))
    }
}

fn build_error(span: Span, err: BuildError) -> SyntaxError {
    SyntaxError::new(span, err.to_string())
}
