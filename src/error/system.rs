//! System-related error types.
//!
//! Filesystem and environment failures around the config and log files.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SystemError {
    /// Could not determine home directory.
    #[error("Could not determine home directory")]
    NoHomeDirectory,

    /// Failed to create a directory.
    #[error("Failed to create directory '{}': {message}", path.display())]
    DirectoryCreationFailed { path: PathBuf, message: String },

    /// Generic I/O error.
    #[error("I/O error during {operation}: {message}")]
    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },
}

impl SystemError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SystemError::NoHomeDirectory => {
                "Could not find your home directory. Set HOME or pass explicit paths.".to_string()
            }
            SystemError::DirectoryCreationFailed { path, .. } => {
                format!("Could not create '{}'. Check permissions.", path.display())
            }
            SystemError::IoError {
                operation, path, ..
            } => match path {
                Some(path) => format!("Failed to {} '{}'.", operation, path.display()),
                None => format!("Failed to {}.", operation),
            },
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::NoHomeDirectory => "E_SYS_NO_HOME",
            SystemError::DirectoryCreationFailed { .. } => "E_SYS_MKDIR",
            SystemError::IoError { .. } => "E_SYS_IO",
        }
    }
}

impl From<std::io::Error> for SystemError {
    fn from(err: std::io::Error) -> Self {
        SystemError::IoError {
            operation: "perform I/O".to_string(),
            path: None,
            message: err.to_string(),
        }
    }
}
