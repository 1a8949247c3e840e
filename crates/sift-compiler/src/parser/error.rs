//! Syntax error types and rendering utilities.

use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Patch, Renderer, Snippet};
use serde::Serialize;

use super::lexer::Span;

/// A suggested fix for a syntax error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    /// The text to replace the error span with.
    pub replacement: String,
    /// Human-readable description of what the fix does.
    pub description: String,
}

impl Fix {
    pub fn new(replacement: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
            description: description.into(),
        }
    }
}

/// A malformed selector script: location, message, the offending token text, and an optional fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxError {
    pub span: Span,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

impl SyntaxError {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            found: None,
            fix: None,
        }
    }

    pub fn at_offset(offset: usize, message: impl Into<String>) -> Self {
        Self::new(Span::empty(offset), message)
    }

    pub fn with_found(mut self, found: impl Into<String>) -> Self {
        self.found = Some(found.into());
        self
    }

    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "error at {}..{}: {}",
            self.span.start, self.span.end, self.message
        )?;
        if let Some(found) = &self.found {
            write!(f, " (found `{found}`)")?;
        }
        if let Some(fix) = &self.fix {
            write!(f, " (fix: {})", fix.description)?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}

/// Render syntax errors as annotated snippets of `source`, one report per error.
///
/// The primary annotation points at the offending token and names it; a fix, if
/// any, is shown as a patched copy of the script.
pub fn render_errors(source: &str, errors: &[SyntaxError], path: Option<&str>) -> String {
    let renderer = Renderer::plain();
    errors
        .iter()
        .map(|err| {
            let report = report(source, err, path);
            renderer.render(&report).to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn report<'a>(source: &'a str, err: &'a SyntaxError, path: Option<&'a str>) -> Vec<Group<'a>> {
    let range = highlight(err.span, source.len());
    let label = err.found.as_deref().unwrap_or(&err.message);

    let mut snippet = Snippet::source(source)
        .line_start(1)
        .annotation(AnnotationKind::Primary.span(range.clone()).label(label));
    if let Some(path) = path {
        snippet = snippet.path(path);
    }

    let mut report = vec![Level::ERROR.primary_title(&err.message).element(snippet)];
    if let Some(fix) = &err.fix {
        let patched = Snippet::source(source)
            .line_start(1)
            .patch(Patch::new(range, &fix.replacement));
        report.push(Level::HELP.secondary_title(&fix.description).element(patched));
    }
    report
}

/// Clamp `span` into the script and give empty spans one visible column.
fn highlight(span: Span, len: usize) -> Range<usize> {
    let start = span.start.min(len);
    let end = span.end.clamp(start, len);
    if start == end {
        start..(start + 1).min(len)
    } else {
        start..end
    }
}
