//! Input sources: files on disk or standard input

use crate::document::DocumentError;
use crate::utils::decode_bytes;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where a document stream comes from. `-` on the command line means stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn from_arg(path: &Path) -> Self {
        if path == Path::new("-") {
            InputSource::Stdin
        } else {
            InputSource::File(path.to_path_buf())
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read the full contents of `source` and decode them to text.
pub fn read_source(source: &InputSource) -> Result<String, DocumentError> {
    let read_error = |err| DocumentError::Read { input: source.to_string(), source: err };

    let bytes = match source {
        InputSource::Stdin => {
            let mut buf = Vec::new();
            std::io::stdin().lock().read_to_end(&mut buf).map_err(read_error)?;
            buf
        }
        InputSource::File(path) => std::fs::read(path).map_err(read_error)?,
    };
    tracing::debug!(input = %source, bytes = bytes.len(), "read input");

    Ok(decode_bytes(&bytes))
}
