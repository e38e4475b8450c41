//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The config file exists but is not valid JSON for [`ForumConfig`](crate::startup::ForumConfig).
    #[error("Invalid config file '{}': {message}", path.display())]
    InvalidFile { path: PathBuf, message: String },

    /// A setting has a value that cannot be used.
    #[error("Invalid value '{value}' for {setting}: {reason}")]
    InvalidValue {
        setting: String,
        value: String,
        reason: String,
    },

    /// A command-line flag was given without its value.
    #[error("Missing value for {flag}")]
    MissingValue { flag: String },
}

impl ConfigError {
    pub fn invalid_value(
        setting: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidValue {
            setting: setting.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            ConfigError::InvalidFile { path, .. } => {
                format!(
                    "Could not read settings from '{}'. Fix or remove the file.",
                    path.display()
                )
            }
            ConfigError::InvalidValue {
                setting, reason, ..
            } => format!("The {} setting is invalid: {}", setting, reason),
            ConfigError::MissingValue { flag } => format!("{} needs a value.", flag),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidFile { .. } => "E_CFG_FILE",
            ConfigError::InvalidValue { .. } => "E_CFG_VALUE",
            ConfigError::MissingValue { .. } => "E_CFG_MISSING",
        }
    }
}
