//! Merge failures

use crate::tree::{Kind, KeyPath};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MergeError {
    /// The accumulated value is a sequence or mapping and the incoming value is not.
    #[error("type mismatch at {path}: cannot merge {actual} into {expected}")]
    TypeMismatch { path: KeyPath, expected: Kind, actual: Kind },
}

impl MergeError {
    pub fn path(&self) -> &KeyPath {
        match self {
            MergeError::TypeMismatch { path, .. } => path,
        }
    }
}
