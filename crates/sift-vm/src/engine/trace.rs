//! Tracing infrastructure for debugging selector evaluation.
//!
//! # Design: Zero-Cost Abstraction
//!
//! When `NoopTracer` is used every trait method is an `#[inline(always)]` empty
//! function, so the compiler removes the calls and their arguments. Walk state
//! needed only for display (the indentation depth) lives in the tracer, not in
//! the evaluator.

use sift_core::Token;
use sift_core::utils::escape_bytes;

use super::resolution::Resolution;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Token entries, consumed path heads, results and anchors.
    #[default]
    Default,
    /// Also every raw byte and full token span collected.
    Verbose,
}

/// Tracer trait for evaluation instrumentation.
///
/// Each method is called at a specific point of the walk:
/// - `trace_enter` - when path resolution starts on a token
/// - `trace_consume` - when the token's name consumes the path head
/// - `trace_value` - when a raw byte is collected
/// - `trace_span` - when a nested token's full span is collected
/// - `trace_exit` - when path resolution on a token returns
/// - `trace_anchor` - after each wildcard anchor search
pub trait Tracer {
    /// Called when path resolution starts on `token` with `path` left to match.
    fn trace_enter(&mut self, token: &Token, path: &[&str]);

    /// Called when the token's name matched the path head.
    fn trace_consume(&mut self, name: &str);

    /// Called when a raw byte is appended to the line buffer.
    fn trace_value(&mut self, byte: u8);

    /// Called when a nested token's consumed span is appended to the line buffer.
    fn trace_span(&mut self, token: &Token);

    /// Called when path resolution on a token returns.
    fn trace_exit(&mut self, resolution: &Resolution);

    /// Called after an anchor search; `found` is the matched offset, if any.
    fn trace_anchor(&mut self, anchor: &[u8], found: Option<usize>);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _token: &Token, _path: &[&str]) {}

    #[inline(always)]
    fn trace_consume(&mut self, _name: &str) {}

    #[inline(always)]
    fn trace_value(&mut self, _byte: u8) {}

    #[inline(always)]
    fn trace_span(&mut self, _token: &Token) {}

    #[inline(always)]
    fn trace_exit(&mut self, _resolution: &Resolution) {}

    #[inline(always)]
    fn trace_anchor(&mut self, _anchor: &[u8], _found: Option<usize>) {}
}

/// Tracer that collects an indented evaluation trace.
#[derive(Debug, Default)]
pub struct PrintTracer {
    verbosity: Verbosity,
    /// Collected trace lines.
    lines: Vec<String>,
    /// Current token nesting, one indentation step per level.
    depth: usize,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            ..Self::default()
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All trace lines joined with newlines.
    pub fn dump(&self) -> String {
        self.lines.join("\n")
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn push(&mut self, content: String) {
        let indent = "  ".repeat(self.depth);
        self.lines.push(format!("{indent}{content}"));
    }

    fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }
}

impl Tracer for PrintTracer {
    fn trace_enter(&mut self, token: &Token, path: &[&str]) {
        let mut rendered = Vec::with_capacity(path.len());
        if let Some((last, inside)) = path.split_last() {
            rendered.extend(inside.iter().map(|name| format!("@{name}")));
            rendered.push(format!(".{last}"));
        }
        self.push(format!("{} <- {}", token.name(), rendered.join(" ")));
        self.depth += 1;
    }

    fn trace_consume(&mut self, name: &str) {
        self.push(format!("consume {name}"));
    }

    fn trace_value(&mut self, byte: u8) {
        if self.is_verbose() {
            self.push(format!("value \"{}\"", escape_bytes(&[byte])));
        }
    }

    fn trace_span(&mut self, token: &Token) {
        if self.is_verbose() {
            let span = escape_bytes(token.block().consumed());
            self.push(format!("span {} \"{span}\"", token.name()));
        }
    }

    fn trace_exit(&mut self, resolution: &Resolution) {
        let kind = if resolution.is_inline() {
            "inline"
        } else {
            "lines"
        };
        self.push(format!("=> {kind} {}", resolution.entries().len()));
        self.depth = self.depth.saturating_sub(1);
    }

    fn trace_anchor(&mut self, anchor: &[u8], found: Option<usize>) {
        let anchor = escape_bytes(anchor);
        match found {
            Some(at) => self.push(format!("anchor \"{anchor}\" at {at}")),
            None => self.push(format!("anchor \"{anchor}\" missing")),
        }
    }
}
