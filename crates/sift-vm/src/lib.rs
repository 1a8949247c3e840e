//! Evaluator for compiled Sift selectors.
//!
//! Walks a validator parse tree and returns the byte sequences a selector addresses.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

// Re-export commonly used items at crate root
pub use engine::{
    EvalError, EvalLimits, Evaluator, EvaluatorBuilder, NoopTracer, PrintTracer, Resolution,
    Tracer, Verbosity, cut_before, execute, skip_past,
};
