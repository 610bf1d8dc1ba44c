//! Merge command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::document::{parse_document, parse_documents, read_source, InputSource};
use crate::domain::{MergeStrategy, OutputFormat};
use crate::merge::Accumulator;
use crate::render::{render, write_output, write_stdout};
use crate::utils::split_csv;

#[derive(Args)]
pub struct MergeArgs {
    /// YAML files to merge, in order ('-' reads standard input)
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Mapping keys to leave untouched while merging (repeatable or comma-separated)
    #[arg(long, value_name = "KEYS", env = "YAML_MERGE_IGNORE")]
    pub ignore: Vec<String>,

    /// How conflicting mapping values are resolved
    #[arg(long, value_enum, value_name = "STRATEGY", env = "YAML_MERGE_STRATEGY")]
    pub merge_strategy: Option<MergeStrategy>,

    /// Write the merged document to this file instead of stdout
    #[arg(short, long, value_name = "FILE", env = "YAML_MERGE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output format of the merged document
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Print the merged document without writing --output
    #[arg(long)]
    pub dry_run: bool,

    /// Merge every '---' separated document of each input, not just the first
    #[arg(long)]
    pub all_documents: bool,

    /// Path to config file (yaml-merge.toml or .yaml-merge.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: MergeArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve the working directory")?;
    let file_config = load_config(&cwd, args.config.as_deref())?;

    let config = merge_cli_with_config(
        file_config,
        CliOverrides {
            ignore: args.ignore.iter().flat_map(|value| split_csv(value)).collect(),
            merge_strategy: args.merge_strategy,
            output: args.output,
            output_format: args.format,
        },
    );
    let options = config.merge_options();
    tracing::info!(
        strategy = %options.strategy(),
        ignored = options.ignore().len(),
        inputs = args.files.len(),
        "merging documents"
    );

    let mut accumulator = Accumulator::new(&options);
    for file in &args.files {
        let source = InputSource::from_arg(file);
        let text = read_source(&source)?;
        let documents = if args.all_documents {
            parse_documents(&text, &source)?
        } else {
            vec![parse_document(&text, &source)?]
        };
        for document in documents {
            accumulator
                .absorb(document)
                .with_context(|| format!("Failed to merge {}", source))?;
        }
    }
    tracing::info!(documents = accumulator.absorbed(), "merge complete");

    let rendered = render(accumulator.into_value().as_ref(), config.output_format)?;

    match config.output {
        Some(path) if !args.dry_run => write_output(&path, &rendered)?,
        Some(path) => {
            tracing::info!("Dry run: not writing {}", path.display());
            write_stdout(&rendered)?;
        }
        None => write_stdout(&rendered)?,
    }

    Ok(())
}
