//! Applying command-line overrides on top of file configuration

use crate::domain::{Config, MergeStrategy, OutputFormat};
use std::path::PathBuf;

/// Settings given on the command line or through `YAML_MERGE_*` variables.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Added to the config file's ignore keys.
    pub ignore: Vec<String>,
    pub merge_strategy: Option<MergeStrategy>,
    pub output: Option<PathBuf>,
    pub output_format: Option<OutputFormat>,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    for key in cli.ignore {
        if !config.ignore.contains(&key) {
            config.ignore.push(key);
        }
    }
    if let Some(strategy) = cli.merge_strategy {
        config.merge_strategy = strategy;
    }
    if let Some(output) = cli.output {
        config.output = Some(output);
    }
    if let Some(format) = cli.output_format {
        config.output_format = format;
    }
    config
}
