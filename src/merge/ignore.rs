//! Keys excluded from merging

use crate::tree::Value;
use std::collections::BTreeSet;

/// Case-sensitive set of mapping key names skipped at every depth.
///
/// Only string keys can match; numeric or boolean keys are always merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    keys: BTreeSet<String>,
}

impl IgnoreSet {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys = keys.into_iter().map(Into::into).filter(|key: &String| !key.is_empty()).collect();
        Self { keys }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains(name)
    }

    /// Whether a mapping key should be skipped.
    pub fn matches(&self, key: &Value) -> bool {
        match key {
            Value::String(name) => self.contains(name),
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
