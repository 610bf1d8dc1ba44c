//! Merge engine
//!
//! Folds parsed documents into one tree. Sequences concatenate, mappings merge
//! key by key, and every other left-hand value is replaced by the right-hand one.

pub mod engine;
pub mod error;
pub mod fold;
pub mod ignore;

pub use engine::{merge, MergeOptions};
pub use error::MergeError;
pub use fold::Accumulator;
pub use ignore::IgnoreSet;
