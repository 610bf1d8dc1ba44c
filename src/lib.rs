//! yaml-merge: merge layered YAML configuration documents
//!
//! Documents are folded left to right into a single tree. Sequences are
//! concatenated, mappings are merged key by key (recursively, or by replacement
//! under the override strategy), and any other value is replaced by the
//! incoming one. Keys named in the ignore set keep their earliest value.

pub mod cli;
pub mod config;
pub mod document;
pub mod domain;
pub mod merge;
pub mod render;
pub mod tree;
pub mod utils;

pub use domain::{Config, MergeStrategy, OutputFormat};
pub use merge::{merge, Accumulator, IgnoreSet, MergeError, MergeOptions};
