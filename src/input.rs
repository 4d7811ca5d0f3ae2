//! Input acquisition
//!
//! Specification text arrives from a file or from stdin; context text only
//! ever arrives from a file. Reading is separated from validation, so these
//! functions return whatever the source holds, empty or not.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::PromptError;

/// Pseudo-path reported in errors when the specification came from stdin.
pub const STDIN_PATH: &str = "<stdin>";

/// Read an input file to a string.
///
/// A missing path is distinguished from other I/O failures so callers can
/// report it as such.
pub fn read_file(path: &Path) -> Result<String, PromptError> {
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!("Read {} bytes from {}", content.len(), path.display());
            Ok(content)
        }
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(PromptError::FileNotFound { path: path.to_path_buf() })
        }
        Err(source) => Err(PromptError::FileRead { path: path.to_path_buf(), source }),
    }
}

/// Read stdin to end-of-stream.
pub fn read_stdin() -> Result<String, PromptError> {
    let mut buffer = String::new();
    std::io::stdin()
        .lock()
        .read_to_string(&mut buffer)
        .map_err(|source| PromptError::FileRead { path: PathBuf::from(STDIN_PATH), source })?;
    debug!("Read {} bytes from stdin", buffer.len());
    Ok(buffer)
}
