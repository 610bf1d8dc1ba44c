//! Domain types shared by configuration, CLI and the merge engine

use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

use crate::merge::{IgnoreSet, MergeOptions};
use crate::utils::split_csv;

/// How conflicting mapping values are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum MergeStrategy {
    /// Recursively merge values found under the same key
    #[default]
    #[value(name = "merge", alias = "deep-merge")]
    #[serde(rename = "merge", alias = "deep-merge", alias = "deep_merge")]
    DeepMerge,

    /// Replace the existing value with the incoming one
    #[value(name = "override")]
    #[serde(rename = "override")]
    Override,
}

impl std::fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MergeStrategy::DeepMerge => f.write_str("merge"),
            MergeStrategy::Override => f.write_str("override"),
        }
    }
}

/// Rendering used for the merged document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Effective run settings after config file, environment and CLI are combined.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Mapping keys skipped during merge. Accepts a list or a comma-separated string.
    #[serde(deserialize_with = "deserialize_key_list")]
    pub ignore: Vec<String>,
    pub merge_strategy: MergeStrategy,
    pub output: Option<PathBuf>,
    pub output_format: OutputFormat,
}

impl Config {
    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions::new(IgnoreSet::new(self.ignore.iter().cloned()), self.merge_strategy)
    }
}

fn deserialize_key_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum KeyList {
        Csv(String),
        List(Vec<String>),
    }

    let keys = match KeyList::deserialize(deserializer)? {
        KeyList::Csv(value) => split_csv(&value),
        KeyList::List(values) => values.iter().flat_map(|v| split_csv(v)).collect(),
    };
    Ok(keys)
}
