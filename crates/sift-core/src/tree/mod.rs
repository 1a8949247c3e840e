//! Read-only parse tree produced by the upstream byte-grammar validator.
//!
//! ```text
//! ParseResult ─ Token { name, Block }
//!                         └─ Block { success, discovered, end, input }
//!                              └─ Line*        (grammar alternatives taken)
//!                                   └─ MatchGroup*   (cardinality-repeated slots)
//!                                        └─ Match*   (raw byte | nested Token)
//! ```
//!
//! The evaluator never mutates a tree. Trees are either built in code or loaded
//! from the validator's JSON output via [`ParseResult::from_json`].

mod json;
mod types;

#[cfg(test)]
mod json_tests;

pub use json::{DEFAULT_MAX_TREE_DEPTH, TreeError};
pub use types::{Block, Line, Match, MatchGroup, ParseResult, Token};
