//! Command-line interface for yaml-merge

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod merge;

pub use merge::MergeArgs;

/// Merge layered YAML configuration documents into one
///
/// Documents are applied in the order given: later files extend and override
/// earlier ones.
#[derive(Parser)]
#[command(name = "yaml-merge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    args: MergeArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    merge::run(cli.args)
}
