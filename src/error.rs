//! Error types for prompt generation

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while gathering inputs or rendering a prompt
#[derive(Debug, Error)]
pub enum PromptError {
    /// A required input was empty or whitespace-only
    #[error("Invalid input: {field} must not be empty")]
    InvalidInput {
        /// Human-readable name of the offending input
        field: &'static str,
    },

    /// An input path does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// An input exists but could not be read
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PromptError {
    /// Check if this error was caused by a bad argument rather than the filesystem
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PromptError::InvalidInput { .. })
    }

    /// The path involved, if this is a file error
    pub fn path(&self) -> Option<&Path> {
        match self {
            PromptError::FileNotFound { path } | PromptError::FileRead { path, .. } => Some(path),
            PromptError::InvalidInput { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PromptError::InvalidInput { field: "feature name" };
        assert_eq!(err.to_string(), "Invalid input: feature name must not be empty");

        let err = PromptError::FileNotFound { path: PathBuf::from("specs/login.md") };
        assert_eq!(err.to_string(), "File not found: specs/login.md");

        let err = PromptError::FileRead {
            path: PathBuf::from("specs/login.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert!(err.to_string().starts_with("Failed to read specs/login.md:"));
    }

    #[test]
    fn test_is_invalid_input() {
        assert!(PromptError::InvalidInput { field: "spec" }.is_invalid_input());
        assert!(!PromptError::FileNotFound { path: PathBuf::from("x") }.is_invalid_input());
    }

    #[test]
    fn test_path_accessor() {
        let err = PromptError::FileNotFound { path: PathBuf::from("ctx.md") };
        assert_eq!(err.path(), Some(Path::new("ctx.md")));
        assert_eq!(PromptError::InvalidInput { field: "spec" }.path(), None);
    }
}
