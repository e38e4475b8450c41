//! Command-line argument parsing for ShipTalk.

use crate::error::ConfigError;
use crate::models::Page;
use crate::startup::config::parse_delay;
use crate::startup::ForumConfig;

/// Settings given on the command line. Unset fields keep the lower layers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub start_page: Option<Page>,
    pub assistant_delay_ms: Option<u64>,
    pub no_mouse: bool,
}

impl CliOverrides {
    /// Apply on top of an already layered config.
    pub fn apply(&self, mut config: ForumConfig) -> ForumConfig {
        if let Some(page) = self.start_page {
            config = config.with_start_page(page);
        }
        if let Some(delay) = self.assistant_delay_ms {
            config = config.with_assistant_delay_ms(delay);
        }
        if self.no_mouse {
            config = config.with_mouse(false);
        }
        config
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui(CliOverrides),
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first item is the program name. Unknown flags are ignored.
///
/// # Examples
///
/// ```
/// use shiptalk::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["shiptalk".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        // Accept both `--page tracking` and `--page=tracking`
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--page" | "-p" => {
                let value = take_value(&flag, inline, &mut args)?;
                let page = value
                    .parse::<Page>()
                    .map_err(|reason| ConfigError::invalid_value("--page", &value, reason))?;
                overrides.start_page = Some(page);
            }
            "--delay-ms" => {
                let value = take_value(&flag, inline, &mut args)?;
                overrides.assistant_delay_ms = Some(parse_delay("--delay-ms", &value)?);
            }
            "--no-mouse" => overrides.no_mouse = true,
            _ => {}
        }
    }

    Ok(CliCommand::RunTui(overrides))
}

fn take_value<I>(flag: &str, inline: Option<String>, args: &mut I) -> Result<String, ConfigError>
where
    I: Iterator<Item = String>,
{
    inline
        .or_else(|| args.next())
        .ok_or_else(|| ConfigError::MissingValue {
            flag: flag.to_string(),
        })
}

/// Usage text for `--help`.
pub fn usage() -> String {
    let pages: Vec<&str> = Page::ALL.iter().map(|p| p.id()).collect();
    format!(
        "ShipTalk - a terminal forum for shipping and logistics\n\n\
         Usage: shiptalk [OPTIONS]\n\n\
         Options:\n  \
         -p, --page <PAGE>     Start on PAGE ({})\n      \
         --delay-ms <MS>   Assistant reply delay in milliseconds\n      \
         --no-mouse        Do not capture the mouse\n  \
         -V, --version         Print version\n  \
         -h, --help            Print this help\n",
        pages.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ConfigError> {
        let mut all = vec!["shiptalk".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]).unwrap(), CliCommand::Version);
        assert_eq!(parse(&["-V"]).unwrap(), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["-h"]).unwrap(), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(
            parse(&[]).unwrap(),
            CliCommand::RunTui(CliOverrides::default())
        );
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--unknown"]).unwrap(),
            CliCommand::RunTui(CliOverrides::default())
        );
    }

    #[test]
    fn test_parse_page_forms() {
        let expected = CliCommand::RunTui(CliOverrides {
            start_page: Some(Page::Tracking),
            ..Default::default()
        });
        assert_eq!(parse(&["--page", "tracking"]).unwrap(), expected);
        assert_eq!(parse(&["--page=tracking"]).unwrap(), expected);
        assert_eq!(parse(&["-p", "tracking"]).unwrap(), expected);
    }

    #[test]
    fn test_parse_page_missing_value() {
        let err = parse(&["--page"]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingValue { .. }));
    }

    #[test]
    fn test_parse_bad_page() {
        let err = parse(&["--page", "mailroom"]).unwrap_err();
        assert_eq!(err.error_code(), "E_CFG_VALUE");
    }

    #[test]
    fn test_parse_delay_and_mouse() {
        let cmd = parse(&["--delay-ms", "50", "--no-mouse"]).unwrap();
        let CliCommand::RunTui(overrides) = cmd else {
            panic!("expected RunTui");
        };
        assert_eq!(overrides.assistant_delay_ms, Some(50));
        assert!(overrides.no_mouse);

        let config = overrides.apply(ForumConfig::default());
        assert_eq!(config.assistant_delay_ms, 50);
        assert!(!config.mouse);
        assert_eq!(config.start_page, Page::Home);
    }

    #[test]
    fn test_usage_lists_pages() {
        let text = usage();
        assert!(text.contains("upsvsfedex"));
        assert!(text.contains("--delay-ms"));
    }
}
