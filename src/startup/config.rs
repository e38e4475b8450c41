//! Runtime configuration.
//!
//! Settings are layered: built-in defaults, then `~/.shiptalk/config.json`,
//! then `SHIPTALK_*` environment variables, then command-line flags.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, ForumResult, SystemError};
use crate::models::Page;

/// Directory under the home directory holding config and logs.
pub const CONFIG_DIR: &str = ".shiptalk";

/// The config file name.
pub const CONFIG_FILE: &str = "config.json";

/// The default log file name.
pub const LOG_FILE: &str = "shiptalk.log";

/// Configuration for a ShipTalk session.
///
/// # Example
///
/// ```ignore
/// use shiptalk::startup::ForumConfig;
///
/// let config = ForumConfig::default()
///     .with_start_page(Page::Popular)
///     .with_assistant_delay_ms(500);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ForumConfig {
    /// Delay before the assistant answer appears (default: 2000ms)
    pub assistant_delay_ms: u64,
    /// Page shown on launch (default: home)
    pub start_page: Page,
    /// Event loop tick in milliseconds (default: 16)
    pub tick_rate_ms: u64,
    /// Capture mouse clicks (default: true)
    pub mouse: bool,
    /// Where tracing output goes; `None` disables file logging
    pub log_file: Option<PathBuf>,
}

impl Default for ForumConfig {
    fn default() -> Self {
        Self {
            assistant_delay_ms: 2000,
            start_page: Page::Home,
            tick_rate_ms: 16,
            mouse: true,
            log_file: default_log_path(),
        }
    }
}

impl ForumConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assistant_delay_ms(mut self, delay_ms: u64) -> Self {
        self.assistant_delay_ms = delay_ms;
        self
    }

    pub fn with_start_page(mut self, page: Page) -> Self {
        self.start_page = page;
        self
    }

    pub fn with_tick_rate_ms(mut self, tick_ms: u64) -> Self {
        self.tick_rate_ms = tick_ms.max(1);
        self
    }

    pub fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    pub fn assistant_delay(&self) -> Duration {
        Duration::from_millis(self.assistant_delay_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Overlay values from a parsed config file.
    pub fn apply_file(mut self, file: &ConfigFile) -> Self {
        if let Some(delay) = file.assistant_delay_ms {
            self.assistant_delay_ms = delay;
        }
        if let Some(page) = file.start_page {
            self.start_page = page;
        }
        if let Some(tick) = file.tick_rate_ms {
            self = self.with_tick_rate_ms(tick);
        }
        if let Some(mouse) = file.mouse {
            self.mouse = mouse;
        }
        if let Some(path) = &file.log_file {
            self.log_file = Some(path.clone());
        }
        self
    }

    /// Overlay values from `SHIPTALK_*` variables, read through `lookup`.
    ///
    /// Taking a lookup function keeps tests away from the process
    /// environment.
    pub fn apply_env<F>(mut self, lookup: F) -> ForumResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("SHIPTALK_ASSISTANT_DELAY_MS") {
            self.assistant_delay_ms = parse_delay("SHIPTALK_ASSISTANT_DELAY_MS", &raw)?;
        }
        if let Some(raw) = lookup("SHIPTALK_START_PAGE") {
            self.start_page = raw
                .parse::<Page>()
                .map_err(|reason| ConfigError::invalid_value("SHIPTALK_START_PAGE", &raw, reason))?;
        }
        if lookup("SHIPTALK_NO_MOUSE").is_some() {
            self.mouse = false;
        }
        if let Some(path) = lookup("SHIPTALK_LOG_FILE") {
            self.log_file = if path.is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }
        Ok(self)
    }

    /// Defaults, overlaid with the config file (if present) and environment.
    pub fn load() -> ForumResult<Self> {
        let mut config = Self::default();
        if let Some(manager) = ConfigFileManager::new() {
            if let Some(file) = manager.load()? {
                config = config.apply_file(&file);
            }
        }
        config.apply_env(|key| std::env::var(key).ok())
    }
}

/// Parse a millisecond delay setting.
pub fn parse_delay(setting: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::invalid_value(setting, raw, "expected milliseconds"))
}

fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(LOG_FILE))
}

/// On-disk shape of `config.json`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_delay_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_page: Option<Page>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_rate_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mouse: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Locates and reads the config file.
#[derive(Debug)]
pub struct ConfigFileManager {
    config_path: PathBuf,
}

impl ConfigFileManager {
    /// Manager for `~/.shiptalk/config.json`.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        Some(Self::with_path(home.join(CONFIG_DIR).join(CONFIG_FILE)))
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Read the config file.
    ///
    /// A missing file is `Ok(None)`. An unreadable or malformed file is an
    /// error so a typo does not silently fall back to defaults.
    pub fn load(&self) -> ForumResult<Option<ConfigFile>> {
        if !self.config_path.exists() {
            return Ok(None);
        }

        let file = File::open(&self.config_path).map_err(|e| SystemError::IoError {
            operation: "read config file".to_string(),
            path: Some(self.config_path.clone()),
            message: e.to_string(),
        })?;

        let parsed = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            ConfigError::InvalidFile {
                path: self.config_path.clone(),
                message: e.to_string(),
            }
        })?;
        Ok(Some(parsed))
    }
}
