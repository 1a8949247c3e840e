//! Sift compiler: turns selector script text into a [`Selector`].
//!
//! ```
//! let selector = sift_compiler::compile("+ @rootToken .five *").unwrap();
//! assert!(selector.is_any());
//! assert_eq!(selector.to_string(), "+ @rootToken .five *");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod parser;

pub use parser::{Fix, Span, SyntaxError, render_errors};
pub use sift_core::Selector;

/// Compile selector script text.
pub fn compile(script: &str) -> Result<Selector, SyntaxError> {
    let selector = parser::parse(script)?;
    log::debug!("compiled selector `{selector}`");
    Ok(selector)
}

/// Compile selector script bytes. The script must be valid UTF-8.
pub fn compile_bytes(script: &[u8]) -> Result<Selector, SyntaxError> {
    match std::str::from_utf8(script) {
        Ok(text) => compile(text),
        Err(e) => {
            let start = e.valid_up_to();
            let end = start + e.error_len().unwrap_or(script.len() - start);
            Err(SyntaxError::new(
                Span::new(start, end),
                "selector script is not valid UTF-8",
            ))
        }
    }
}

#[cfg(test)]
mod lib_tests;
