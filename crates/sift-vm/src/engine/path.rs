//! Path resolution: `@inside ... .name` against a token subtree.

use sift_core::{Match, Name, Token};

use super::error::EvalError;
use super::evaluator::Walker;
use super::resolution::Resolution;
use super::trace::Tracer;

impl<T: Tracer> Walker<'_, T> {
    /// Resolve a `Name` and keep the result only if it is selected.
    ///
    /// The walk happens either way so that failures surface consistently.
    pub(super) fn resolve_name_ins(
        &mut self,
        name: &Name,
        token: &Token,
    ) -> Result<Vec<Vec<u8>>, EvalError> {
        let resolution = self.resolve_name(&name.path(), token)?;
        if name.is_selected() {
            Ok(resolution.into_entries())
        } else {
            Ok(Vec::new())
        }
    }

    /// Resolve `path` on `token`.
    ///
    /// If the token is named like the path head, the head is consumed; otherwise the
    /// whole path is looked for among the token's descendants. For every successful
    /// line and every successful, non-empty match group, a line-local buffer is filled:
    /// - raw bytes contribute only once the path is exhausted;
    /// - nested tokens recurse while path remains, merging per [`Resolution`];
    /// - nested tokens reached with an exhausted path contribute their consumed span.
    ///
    /// Each non-empty buffer becomes one output entry.
    pub(super) fn resolve_name(
        &mut self,
        path: &[&str],
        token: &Token,
    ) -> Result<Resolution, EvalError> {
        let block = token.block();
        if !block.is_success() {
            return Err(EvalError::BlockNotSuccessful {
                token: token.name().to_owned(),
            });
        }

        let Some((&head, tail)) = path.split_first() else {
            return Err(EvalError::EmptyPath);
        };

        self.enter(token, path)?;

        let remaining = if token.name() == head {
            self.tracer.trace_consume(head);
            tail
        } else {
            path
        };

        let mut is_inline = false;
        let mut output = Vec::new();
        let groups = block
            .lines()
            .iter()
            .filter(|line| line.is_success())
            .flat_map(|line| line.groups())
            .filter(|group| group.is_success() && group.has_matches());

        for group in groups {
            let mut data = Vec::new();
            for m in group.matches() {
                match m {
                    Match::Value(byte) => {
                        if !remaining.is_empty() {
                            continue;
                        }
                        self.tracer.trace_value(*byte);
                        data.push(*byte);
                        is_inline = true;
                    }
                    Match::Token(nested) if remaining.is_empty() => {
                        self.tracer.trace_span(nested);
                        data.extend_from_slice(nested.block().consumed());
                        is_inline = true;
                    }
                    Match::Token(nested) => match self.resolve_name(remaining, nested)? {
                        Resolution::Inline(entries) => {
                            for entry in entries {
                                data.extend(entry);
                            }
                        }
                        Resolution::Lines(entries) => output.extend(entries),
                    },
                }
            }

            if !data.is_empty() {
                output.push(data);
            }
        }

        let resolution = Resolution::new(is_inline, output);
        self.tracer.trace_exit(&resolution);
        self.exit();
        Ok(resolution)
    }
}
