//! Error handling for ShipTalk.
//!
//! Every forum operation (votes, comments, navigation, the assistant) is
//! total: the worst outcome is that nothing changes. The types here cover
//! what can actually go wrong around the forum:
//!
//! | Family | Examples | Recoverable |
//! |--------|----------|-------------|
//! | Ui | terminal setup, draw, input | Mostly |
//! | Config | bad config file, bad flag value | No |
//! | System | home dir, log file I/O | Yes |
//!
//! # Example
//!
//! ```ignore
//! use shiptalk::error::{ForumError, ForumResult};
//!
//! match load_config() {
//!     Ok(cfg) => run(cfg),
//!     Err(err) => eprintln!("[{}] {}", err.error_code(), err.user_message()),
//! }
//! ```

mod config;
mod forum_error;
mod result;
mod system;
mod ui;

pub use config::ConfigError;
pub use forum_error::ForumError;
pub use result::ForumResult;
pub use system::SystemError;
pub use ui::UiError;
