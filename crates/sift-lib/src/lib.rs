//! Sift: a selector language for extracting byte ranges from validator parse trees.
//!
//! A selector names a path through the tree (`+ @rootToken .five`) or a wildcard
//! anchored by such paths (`+ @rootToken .smallerThan *`).
//!
//! # Example
//!
//! ```
//! use sift::ParseResult;
//!
//! let tree = r#"{
//!     "input": "5<5",
//!     "token": { "name": "rootToken", "block": { "discovered": 0, "end": 3, "lines": [{ "groups": [
//!         { "matches": [{ "token": { "name": "five", "block": { "discovered": 0, "end": 1,
//!             "lines": [{ "groups": [{ "matches": [{ "value": 53 }] }] }] } } }] },
//!         { "matches": [{ "token": { "name": "smallerThan", "block": { "discovered": 1, "end": 2,
//!             "lines": [{ "groups": [{ "matches": [{ "value": 60 }] }] }] } } }] }
//!     ] }] } }
//! }"#;
//!
//! let result = ParseResult::from_json(tree).unwrap();
//! let entries = sift::select("+ @rootToken .smallerThan *", &result).unwrap();
//! assert_eq!(entries, vec![b"5".to_vec()]);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub use sift_compiler::{Fix, Span, SyntaxError, render_errors};
pub use sift_core::{
    AnyElement, Block, BuildError, Content, DEFAULT_MAX_TREE_DEPTH, Element, Line, Match,
    MatchGroup, Name, ParseResult, Selector, Token, TreeError,
};
pub use sift_vm::{
    EvalError, EvalLimits, Evaluator, EvaluatorBuilder, NoopTracer, PrintTracer, Tracer,
    Verbosity,
};

/// Errors that can occur while compiling or evaluating a selector.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The selector script is malformed.
    #[error("selector syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    /// Evaluation of a compiled selector failed.
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// A serialized parse tree could not be loaded.
    #[error("invalid parse tree: {0}")]
    Tree(#[from] TreeError),
}

/// Result type for selector operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Compile selector script text.
pub fn compile(script: &str) -> Result<Selector> {
    Ok(sift_compiler::compile(script)?)
}

/// Compile selector script bytes. The script must be valid UTF-8.
pub fn compile_bytes(script: &[u8]) -> Result<Selector> {
    Ok(sift_compiler::compile_bytes(script)?)
}

/// Execute a compiled selector with default limits.
pub fn execute(selector: &Selector, result: &ParseResult) -> Result<Vec<Vec<u8>>> {
    Ok(sift_vm::execute(selector, result)?)
}

/// Compile `script` and execute it on `result`.
pub fn select(script: &str, result: &ParseResult) -> Result<Vec<Vec<u8>>> {
    let selector = compile(script)?;
    let entries = execute(&selector, result)?;
    log::debug!("`{script}` selected {} entries", entries.len());
    Ok(entries)
}

/// Load a JSON-serialized parse tree, then compile and execute `script` on it.
pub fn select_json(script: &str, tree: &str) -> Result<Vec<Vec<u8>>> {
    let result = ParseResult::from_json(tree)?;
    select(script, &result)
}
