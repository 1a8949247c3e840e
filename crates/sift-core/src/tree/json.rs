//! JSON deserialization for validator results.
//!
//! The source input is stored once at the top level; every block refers to it
//! through `discovered`/`end` offsets. Matches are externally tagged:
//! `{"value": 53}` or `{"token": {...}}`.
//!
//! Every token adds nine levels of JSON nesting, far past serde_json's default
//! recursion limit for recursive grammars. The loader lifts that limit and caps
//! token depth itself, before deserializing.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Deserializer;

use super::types::{Block, Line, Match, MatchGroup, ParseResult, Token};

/// Token nesting accepted by [`ParseResult::from_json`].
pub const DEFAULT_MAX_TREE_DEPTH: usize = 256;

/// JSON levels between a token object and its nested tokens' objects.
const JSON_LEVELS_PER_TOKEN: usize = 9;

/// Error while loading a parse tree.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "token `{token}` has span {discovered}..{end} outside of the {len}-byte input"
    )]
    InvalidSpan {
        token: String,
        discovered: usize,
        end: usize,
        len: usize,
    },

    #[error("parse tree nests deeper than {limit} tokens")]
    TooDeep { limit: usize },
}

impl ParseResult {
    /// Parse a validator result from JSON, accepting up to
    /// [`DEFAULT_MAX_TREE_DEPTH`] levels of token nesting.
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        Self::from_json_with_depth(json, DEFAULT_MAX_TREE_DEPTH)
    }

    /// Parse a validator result from JSON, rejecting trees whose tokens nest deeper
    /// than `max_depth` (the root token counts as one).
    pub fn from_json_with_depth(json: &str, max_depth: usize) -> Result<Self, TreeError> {
        if nesting_exceeds(json, max_depth.saturating_mul(JSON_LEVELS_PER_TOKEN)) {
            return Err(TreeError::TooDeep { limit: max_depth });
        }

        let mut de = Deserializer::from_str(json);
        de.disable_recursion_limit();
        let raw = RawResult::deserialize(&mut de)?;
        de.end()?;

        let input: Arc<[u8]> = match raw.input {
            RawInput::Text(text) => text.into_bytes().into(),
            RawInput::Bytes(bytes) => bytes.into(),
        };
        let token = raw.token.into_token(&input)?;
        Ok(ParseResult::new(token))
    }
}

#[derive(Debug, Deserialize)]
struct RawResult {
    input: RawInput,
    token: RawToken,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawInput {
    Text(String),
    Bytes(Vec<u8>),
}

#[derive(Debug, Deserialize)]
struct RawToken {
    name: String,
    block: RawBlock,
}

#[derive(Debug, Deserialize)]
struct RawBlock {
    #[serde(default = "default_success")]
    success: bool,
    discovered: usize,
    end: usize,
    #[serde(default)]
    lines: Vec<RawLine>,
}

#[derive(Debug, Deserialize)]
struct RawLine {
    #[serde(default = "default_success")]
    success: bool,
    #[serde(default)]
    groups: Vec<RawGroup>,
}

#[derive(Debug, Deserialize)]
struct RawGroup {
    #[serde(default = "default_success")]
    success: bool,
    #[serde(default)]
    matches: Vec<RawMatch>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawMatch {
    Value(u8),
    Token(RawToken),
}

fn default_success() -> bool {
    true
}

impl RawToken {
    fn into_token(self, input: &Arc<[u8]>) -> Result<Token, TreeError> {
        let RawBlock {
            success,
            discovered,
            end,
            lines,
        } = self.block;

        if discovered > end || end > input.len() {
            return Err(TreeError::InvalidSpan {
                token: self.name,
                discovered,
                end,
                len: input.len(),
            });
        }

        let lines = lines
            .into_iter()
            .map(|line| line.into_line(input))
            .collect::<Result<Vec<_>, _>>()?;
        let block = Block::new(success, Arc::clone(input), discovered..end, lines);
        Ok(Token::new(self.name, block))
    }
}

impl RawLine {
    fn into_line(self, input: &Arc<[u8]>) -> Result<Line, TreeError> {
        let groups = self
            .groups
            .into_iter()
            .map(|group| group.into_group(input))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Line::new(self.success, groups))
    }
}

impl RawGroup {
    fn into_group(self, input: &Arc<[u8]>) -> Result<MatchGroup, TreeError> {
        let matches = self
            .matches
            .into_iter()
            .map(|m| match m {
                RawMatch::Value(b) => Ok(Match::Value(b)),
                RawMatch::Token(token) => token.into_token(input).map(Match::Token),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MatchGroup::new(self.success, matches))
    }
}

/// Whether `json` nests objects and arrays deeper than `limit`.
///
/// Brackets inside strings do not count. Malformed input is left to the parser.
fn nesting_exceeds(json: &str, limit: usize) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for b in json.bytes() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                if depth > limit {
                    return true;
                }
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    false
}
