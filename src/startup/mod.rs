//! Startup: configuration and logging, resolved before the TUI starts.
//!
//! - [`config`] - Layered [`ForumConfig`]
//! - [`logging`] - File-backed tracing subscriber
//!
//! # Usage
//!
//! ```ignore
//! use shiptalk::startup::{ForumConfig, init_logging};
//!
//! let config = ForumConfig::load()?;
//! let _ = init_logging(config.log_file.as_deref());
//! ```

pub mod config;
pub mod logging;

pub use config::{ConfigFile, ConfigFileManager, ForumConfig};
pub use logging::init_logging;
