#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for Sift.
//!
//! Two layers:
//! - **Selector layer** ([`selector`]): the compiled query, an immutable AST built
//!   exclusively through builders.
//! - **Tree layer** ([`tree`]): the read-only parse tree produced by the upstream
//!   byte-grammar validator, which selectors are evaluated against.

pub mod selector;
pub mod tree;
pub mod utils;


pub use selector::{AnyElement, AnyElementBuilder, BuildError, Content, Element, Name, NameBuilder, Selector};
pub use tree::{
    Block, DEFAULT_MAX_TREE_DEPTH, Line, Match, MatchGroup, ParseResult, Token, TreeError,
};
