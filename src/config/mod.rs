//! Configuration loading and merging
//!
//! Handles loading from config files, environment variables, and CLI arguments
//! with proper precedence (CLI > Env > File > Defaults). Environment variables
//! reach us through clap, so they arrive already folded into [`CliOverrides`].

pub mod loader;
pub mod overrides;

pub use loader::load_config;
pub use overrides::{merge_cli_with_config, CliOverrides};
