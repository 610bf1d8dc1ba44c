//! yaml-merge: merge layered YAML configuration documents into one
//!
//! Reads the given files in order, folds them into a single document and
//! writes the result to stdout or a file.

use anyhow::Result;

fn main() -> Result<()> {
    yaml_merge::cli::run()
}
