//! Sequential folding of documents into one accumulator

use crate::merge::{merge, MergeError, MergeOptions};
use crate::tree::Value;

/// Running merge result. Starts absent; the first document becomes the value verbatim.
#[derive(Debug)]
pub struct Accumulator<'a> {
    options: &'a MergeOptions,
    value: Option<Value>,
    absorbed: usize,
}

impl<'a> Accumulator<'a> {
    pub fn new(options: &'a MergeOptions) -> Self {
        Self { options, value: None, absorbed: 0 }
    }

    /// Merge the next document into the accumulated value.
    ///
    /// On error the accumulator is left empty; callers are expected to abort.
    pub fn absorb(&mut self, document: Value) -> Result<(), MergeError> {
        let merged = match self.value.take() {
            None => document,
            Some(left) => merge(left, document, self.options)?,
        };
        self.value = Some(merged);
        self.absorbed += 1;
        Ok(())
    }

    /// Number of documents merged so far.
    pub fn absorbed(&self) -> usize {
        self.absorbed
    }

    /// The merged result, `None` if nothing was absorbed.
    pub fn into_value(self) -> Option<Value> {
        self.value
    }
}
