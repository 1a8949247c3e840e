//! Anchored wildcard resolution.
//!
//! A wildcard's text is the token's input from its discovered offset onward. Prefix
//! anchors advance into that text, suffix anchors cut it short. Successive anchors
//! of the same path narrow the previous value, which pairs repeated occurrences in
//! recursive grammars (nested brackets, nested parentheses).

use sift_core::utils::escape_bytes;
use sift_core::{AnyElement, Content, Name, Token};

use super::error::EvalError;
use super::evaluator::Walker;
use super::trace::Tracer;

/// Bytes after the start of the first occurrence of `anchor` in `data`.
///
/// Only one byte past the occurrence start is skipped, whatever the anchor length.
/// Returns an empty slice if the anchor does not occur.
///
/// ```
/// use sift_vm::skip_past;
///
/// assert_eq!(skip_past(b"5 < 5", b"<"), b" 5");
/// assert_eq!(skip_past(b"5 < 5", b">"), b"");
/// ```
pub fn skip_past<'d>(data: &'d [u8], anchor: &[u8]) -> &'d [u8] {
    match first_start(data, anchor) {
        Some(start) => &data[start + 1..],
        None => &[],
    }
}

/// Bytes before the end of the last occurrence of `anchor` in `data`.
///
/// Mirror of [`skip_past`]: one byte before the occurrence end is dropped.
///
/// ```
/// use sift_vm::cut_before;
///
/// assert_eq!(cut_before(b"5 < 5", b"<"), b"5 ");
/// assert_eq!(cut_before(b"5 < 5", b">"), b"");
/// ```
pub fn cut_before<'d>(data: &'d [u8], anchor: &[u8]) -> &'d [u8] {
    match last_end(data, anchor) {
        Some(end) => &data[..end - 1],
        None => &[],
    }
}

fn first_start(data: &[u8], anchor: &[u8]) -> Option<usize> {
    (0..data.len()).find(|&k| data[k..].starts_with(anchor))
}

fn last_end(data: &[u8], anchor: &[u8]) -> Option<usize> {
    (1..=data.len()).rev().find(|&e| data[..e].ends_with(anchor))
}

impl<T: Tracer> Walker<'_, T> {
    pub(super) fn resolve_any(
        &mut self,
        any: &AnyElement,
        token: &Token,
    ) -> Result<Vec<Vec<u8>>, EvalError> {
        let block = token.block();
        if !block.is_success() {
            return Err(EvalError::BlockNotSuccessful {
                token: token.name().to_owned(),
            });
        }

        let text = block.from_discovered();
        let values = match any.content() {
            Content::Open => vec![text.to_vec()],
            Content::Prefix(prefix) => {
                let starts = self.anchors(prefix, token)?;
                self.advance_each(text, &starts)
            }
            Content::Suffix(suffix) => {
                let ends = self.reversed_anchors(suffix, token)?;
                self.cut_each(text, &ends)
            }
            Content::Both { prefix, suffix } => {
                let starts = self.anchors(prefix, token)?;
                let ends = self.reversed_anchors(suffix, token)?;
                let advanced = self.advance_each(text, &starts);
                let mut values = Vec::with_capacity(advanced.len());
                for (i, value) in advanced.into_iter().enumerate() {
                    let pairs = &ends[..ends.len().min(i + 1)];
                    let narrowed = self.cut_each(&value, pairs).pop().unwrap_or(value);
                    values.push(narrowed);
                }
                values
            }
        };

        if any.emits() {
            Ok(values)
        } else {
            Ok(Vec::new())
        }
    }

    /// Anchor paths are always resolved as selected.
    fn anchors(&mut self, name: &Name, token: &Token) -> Result<Vec<Vec<u8>>, EvalError> {
        Ok(self.resolve_name(&name.path(), token)?.into_entries())
    }

    fn reversed_anchors(
        &mut self,
        name: &Name,
        token: &Token,
    ) -> Result<Vec<Vec<u8>>, EvalError> {
        let mut anchors = self.anchors(name, token)?;
        anchors.reverse();
        Ok(anchors)
    }

    fn advance_each(&mut self, text: &[u8], anchors: &[Vec<u8>]) -> Vec<Vec<u8>> {
        let mut data = text;
        let mut values = Vec::with_capacity(anchors.len());
        for anchor in anchors {
            let found = first_start(data, anchor);
            self.trace_anchor(anchor, found);
            data = match found {
                Some(start) => &data[start + 1..],
                None => &[],
            };
            values.push(data.to_vec());
        }
        values
    }

    fn cut_each(&mut self, text: &[u8], anchors: &[Vec<u8>]) -> Vec<Vec<u8>> {
        let mut data = text;
        let mut values = Vec::with_capacity(anchors.len());
        for anchor in anchors {
            let found = last_end(data, anchor);
            self.trace_anchor(anchor, found);
            data = match found {
                Some(end) => &data[..end - 1],
                None => &[],
            };
            values.push(data.to_vec());
        }
        values
    }

    fn trace_anchor(&mut self, anchor: &[u8], found: Option<usize>) {
        match found {
            Some(at) => log::trace!("anchor \"{}\" found at {at}", escape_bytes(anchor)),
            None => log::trace!("anchor \"{}\" not found", escape_bytes(anchor)),
        }
        self.tracer.trace_anchor(anchor, found);
    }
}
