//! Document I/O failures

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {input}")]
    Read {
        input: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {input} as YAML")]
    Parse {
        input: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to render merged document as YAML")]
    SerializeYaml(#[source] serde_yaml::Error),

    #[error("failed to render merged document as JSON")]
    SerializeJson(#[source] serde_json::Error),

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
