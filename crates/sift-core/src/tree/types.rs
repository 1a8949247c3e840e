//! Parse tree node types.

use std::ops::Range;
use std::sync::Arc;

/// Root of a validator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    token: Token,
}

impl ParseResult {
    pub fn new(token: Token) -> Self {
        Self { token }
    }

    /// The root token.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Overall success: the root token's block succeeded.
    pub fn is_success(&self) -> bool {
        self.token.is_success()
    }
}

/// A named grammar rule match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    name: String,
    block: Block,
}

impl Token {
    pub fn new(name: impl Into<String>, block: Block) -> Self {
        Self {
            name: name.into(),
            block,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn is_success(&self) -> bool {
        self.block.success
    }
}

/// Success status, alternative lines, and byte-span bookkeeping of a token match.
///
/// All blocks of one tree share the same `input` allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    success: bool,
    lines: Vec<Line>,
    discovered: usize,
    end: usize,
    input: Arc<[u8]>,
}

impl Block {
    /// Create a block covering `span` of `input`.
    ///
    /// Spans that are reversed or fall outside `input` are kept as given; the
    /// slicing accessors then return empty slices.
    pub fn new(success: bool, input: Arc<[u8]>, span: Range<usize>, lines: Vec<Line>) -> Self {
        Self {
            success,
            lines,
            discovered: span.start,
            end: span.end,
            input,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Start offset of this block's match within [`Block::input`].
    pub fn discovered(&self) -> usize {
        self.discovered
    }

    /// Offset just past the end of this block's consumption.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The full source bytes.
    pub fn input(&self) -> &[u8] {
        &self.input
    }

    /// Unconsumed tail after this block.
    pub fn remaining(&self) -> &[u8] {
        self.input.get(self.end..).unwrap_or_default()
    }

    /// Bytes consumed by this block: `input[discovered .. len(input) - len(remaining)]`.
    pub fn consumed(&self) -> &[u8] {
        let end = self.input.len() - self.remaining().len();
        self.input.get(self.discovered..end).unwrap_or_default()
    }

    /// Everything from the block's start to the end of input.
    pub fn from_discovered(&self) -> &[u8] {
        self.input.get(self.discovered..).unwrap_or_default()
    }
}

/// One grammar alternative actually taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    success: bool,
    groups: Vec<MatchGroup>,
}

impl Line {
    pub fn new(success: bool, groups: Vec<MatchGroup>) -> Self {
        Self { success, groups }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn groups(&self) -> &[MatchGroup] {
        &self.groups
    }
}

/// One cardinality-repeated element slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroup {
    success: bool,
    matches: Vec<Match>,
}

impl MatchGroup {
    pub fn new(success: bool, matches: Vec<Match>) -> Self {
        Self { success, matches }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// A single matched raw byte, or a nested token match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match {
    Value(u8),
    Token(Token),
}

impl Match {
    pub fn value(&self) -> Option<u8> {
        match self {
            Self::Value(b) => Some(*b),
            Self::Token(_) => None,
        }
    }

    pub fn token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) => Some(token),
            Self::Value(_) => None,
        }
    }
}
