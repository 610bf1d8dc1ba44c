//! Writing rendered output to a file or stdout

use crate::document::DocumentError;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Write `text` to `path`, creating parent directories as needed.
pub fn write_output(path: &Path, text: &str) -> Result<(), DocumentError> {
    let write_error = |err| DocumentError::Write { path: path.to_path_buf(), source: err };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, text).map_err(write_error)?;
    tracing::info!(path = %path.display(), bytes = text.len(), "wrote merged document");
    Ok(())
}

pub fn write_stdout(text: &str) -> Result<(), DocumentError> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|err| DocumentError::Write { path: "<stdout>".into(), source: err })
}
