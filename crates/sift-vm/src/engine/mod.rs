//! Selector evaluation engine.
//!
//! Dispatch is on the selector's element:
//! - a `Name` runs path resolution (`path`), a recursive walk over lines,
//!   match groups and matches that merges results according to [`Resolution`];
//! - an `Any` runs anchored wildcard resolution (`anchor`), which resolves its
//!   anchor paths and narrows the token's text around each anchor occurrence.

mod anchor;
mod error;
mod evaluator;
mod path;
mod resolution;
mod trace;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod path_tests;

pub use anchor::{cut_before, skip_past};
pub use error::EvalError;
pub use evaluator::{EvalLimits, Evaluator, EvaluatorBuilder, execute};
pub use resolution::Resolution;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
