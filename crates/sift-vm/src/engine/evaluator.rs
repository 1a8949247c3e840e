//! Evaluator entry point and runtime limits.

use sift_core::{Element, ParseResult, Selector, Token};

use super::error::EvalError;
use super::trace::{NoopTracer, Tracer};

/// Runtime limits for selector evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalLimits {
    /// Maximum token nesting depth walked by path resolution (default: 1,024).
    pub recursion_limit: u32,
}

impl Default for EvalLimits {
    fn default() -> Self {
        Self {
            recursion_limit: 1024,
        }
    }
}

/// Evaluates compiled selectors against parse results.
///
/// Holds no per-evaluation state: one evaluator can be shared and reused across
/// selectors and results.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    limits: EvalLimits,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::default()
    }

    pub fn limits(&self) -> EvalLimits {
        self.limits
    }

    /// Execute `selector` on `result`, returning the extracted byte sequences in tree order.
    ///
    /// This is a convenience method that uses `NoopTracer`, which gets
    /// completely optimized away at compile time.
    pub fn execute(
        &self,
        selector: &Selector,
        result: &ParseResult,
    ) -> Result<Vec<Vec<u8>>, EvalError> {
        self.execute_with(selector, result, &mut NoopTracer)
    }

    /// Execute with a tracer for debugging.
    pub fn execute_with<T: Tracer>(
        &self,
        selector: &Selector,
        result: &ParseResult,
        tracer: &mut T,
    ) -> Result<Vec<Vec<u8>>, EvalError> {
        if !result.is_success() {
            return Err(EvalError::InvalidResult);
        }

        let token = result.token();
        let mut walker = Walker::new(self.limits, tracer);
        let output = match selector.element() {
            Element::Name(name) => walker.resolve_name_ins(name, token)?,
            Element::Any(any) => walker.resolve_any(any, token)?,
        };

        log::debug!(
            "selector `{selector}` extracted {} entries from `{}`",
            output.len(),
            token.name()
        );
        Ok(output)
    }
}

#[derive(Clone, Debug, Default)]
pub struct EvaluatorBuilder {
    limits: EvalLimits,
}

impl EvaluatorBuilder {
    pub fn limits(mut self, limits: EvalLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.limits.recursion_limit = limit;
        self
    }

    pub fn build(self) -> Evaluator {
        Evaluator {
            limits: self.limits,
        }
    }
}

/// Execute `selector` on `result` with default limits.
pub fn execute(selector: &Selector, result: &ParseResult) -> Result<Vec<Vec<u8>>, EvalError> {
    Evaluator::default().execute(selector, result)
}

/// Per-evaluation walk state shared by path and anchor resolution.
pub(super) struct Walker<'t, T: Tracer> {
    limits: EvalLimits,
    pub(super) tracer: &'t mut T,
    depth: u32,
}

impl<'t, T: Tracer> Walker<'t, T> {
    pub(super) fn new(limits: EvalLimits, tracer: &'t mut T) -> Self {
        Self {
            limits,
            tracer,
            depth: 0,
        }
    }

    pub(super) fn enter(&mut self, token: &Token, path: &[&str]) -> Result<(), EvalError> {
        if self.depth >= self.limits.recursion_limit {
            return Err(EvalError::DepthExceeded {
                limit: self.limits.recursion_limit,
            });
        }
        self.depth += 1;
        self.tracer.trace_enter(token, path);
        Ok(())
    }

    pub(super) fn exit(&mut self) {
        self.depth -= 1;
    }
}
