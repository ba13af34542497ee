//! Error types for plugdeploy
//!
//! Library code returns `DeployError` via `thiserror`; the binary wraps it in
//! `anyhow` at the command boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for plugdeploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for plugdeploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// Named unit exists neither as a directory nor as a source file
    #[error("'{name}' is not a valid subfolder or source file in {}", root.display())]
    NotFound { name: String, root: PathBuf },

    /// Orchestrator executable is missing
    #[error("{} does not exist", path.display())]
    ExecutableNotFound { path: PathBuf },

    /// A required file or directory is missing
    #[error("{} does not exist", path.display())]
    FileNotFound { path: PathBuf },

    /// Explicitly named unit was rejected
    #[error("invalid unit name '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// Copy, remove or write failure
    #[error("failed to {op} {}: {source}", path.display())]
    Filesystem {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed configuration file
    #[error("invalid configuration in {}: {message}", file.display())]
    Config { file: PathBuf, message: String },

    /// Child process could not be started
    #[error("failed to start {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DeployError {
    /// Wrap an I/O error with the operation and path it concerns
    pub fn fs(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DeployError::Filesystem {
            op,
            path: path.into(),
            source,
        }
    }

    /// Short machine-readable code used in JSON error events
    pub fn code(&self) -> &'static str {
        match self {
            DeployError::NotFound { .. }
            | DeployError::ExecutableNotFound { .. }
            | DeployError::FileNotFound { .. } => "not_found",
            DeployError::InvalidArgument { .. } => "invalid_argument",
            DeployError::Filesystem { .. } => "filesystem",
            DeployError::Config { .. } => "config",
            DeployError::Spawn { .. } => "spawn",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_found() {
        let err = DeployError::NotFound {
            name: "hello_plugin".to_string(),
            root: PathBuf::from("python_examples"),
        };
        assert_eq!(
            err.to_string(),
            "'hello_plugin' is not a valid subfolder or source file in python_examples"
        );
    }

    #[test]
    fn test_error_display_filesystem() {
        let err = DeployError::fs(
            "remove",
            "plugins/old",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "failed to remove plugins/old: denied");
        assert_eq!(err.code(), "filesystem");
    }

    #[test]
    fn test_error_codes() {
        let err = DeployError::ExecutableNotFound {
            path: PathBuf::from("mob/mob.exe"),
        };
        assert_eq!(err.code(), "not_found");

        let err = DeployError::InvalidArgument {
            name: "../x".to_string(),
            reason: "contains a path separator".to_string(),
        };
        assert_eq!(err.code(), "invalid_argument");
    }
}
