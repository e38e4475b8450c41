//! Unified error type for ShipTalk.
//!
//! Forum operations themselves never fail; `ForumError` covers the
//! ambient edges (terminal, configuration, files).

use thiserror::Error;

use super::config::ConfigError;
use super::system::SystemError;
use super::ui::UiError;

#[derive(Debug, Error)]
pub enum ForumError {
    /// UI/terminal errors.
    #[error(transparent)]
    Ui(#[from] UiError),

    /// Configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// System/filesystem errors.
    #[error(transparent)]
    System(#[from] SystemError),
}

impl ForumError {
    /// Whether the app can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ForumError::Ui(err) => err.is_recoverable(),
            ForumError::Config(_) => false,
            ForumError::System(_) => true,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ForumError::Ui(err) => err.user_message(),
            ForumError::Config(err) => err.user_message(),
            ForumError::System(err) => err.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ForumError::Ui(err) => err.error_code(),
            ForumError::Config(err) => err.error_code(),
            ForumError::System(err) => err.error_code(),
        }
    }
}

impl From<std::io::Error> for ForumError {
    fn from(err: std::io::Error) -> Self {
        ForumError::System(err.into())
    }
}
