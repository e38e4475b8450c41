//! Tracing setup.
//!
//! The TUI owns stdout, so log lines go to a file. The filter comes from
//! `SHIPTALK_LOG` (same syntax as `RUST_LOG`) and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{ForumResult, SystemError};

/// Environment variable holding the log filter directives.
pub const LOG_FILTER_ENV: &str = "SHIPTALK_LOG";

/// Build the filter from `SHIPTALK_LOG`, falling back to `info`.
pub fn build_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a global subscriber that appends to `log_file`.
///
/// `None` leaves tracing without a subscriber (events are dropped).
/// Calling this twice is harmless: the second install is ignored.
pub fn init_logging(log_file: Option<&Path>) -> ForumResult<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| SystemError::DirectoryCreationFailed {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| SystemError::IoError {
            operation: "open log file".to_string(),
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("ShipTalk {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    }
    Ok(())
}
