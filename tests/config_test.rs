//! Layered configuration against the real process environment.
//!
//! These tests point `HOME` at a temp dir and set `SHIPTALK_*` variables,
//! so they run serially.

use std::fs;
use std::path::Path;

use serial_test::serial;
use shiptalk::cli::{parse_args, CliCommand};
use shiptalk::models::Page;
use shiptalk::startup::config::{CONFIG_DIR, CONFIG_FILE};
use shiptalk::startup::ForumConfig;

const VARS: [&str; 4] = [
    "SHIPTALK_ASSISTANT_DELAY_MS",
    "SHIPTALK_START_PAGE",
    "SHIPTALK_NO_MOUSE",
    "SHIPTALK_LOG_FILE",
];

fn isolate(home: &Path) {
    std::env::set_var("HOME", home);
    for var in VARS {
        std::env::remove_var(var);
    }
}

fn write_config(home: &Path, json: &str) {
    let dir = home.join(CONFIG_DIR);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(CONFIG_FILE), json).unwrap();
}

#[test]
#[serial]
fn test_load_without_file_uses_defaults() {
    let home = tempfile::tempdir().unwrap();
    isolate(home.path());

    let config = ForumConfig::load().unwrap();
    assert_eq!(config.assistant_delay_ms, 2000);
    assert_eq!(config.start_page, Page::Home);
    assert!(config.mouse);
}

#[test]
#[serial]
fn test_env_overrides_file_and_cli_overrides_env() {
    let home = tempfile::tempdir().unwrap();
    isolate(home.path());
    write_config(
        home.path(),
        r#"{"assistant_delay_ms": 500, "start_page": "packaging", "tick_rate_ms": 33}"#,
    );
    std::env::set_var("SHIPTALK_ASSISTANT_DELAY_MS", "750");

    let config = ForumConfig::load().unwrap();
    assert_eq!(config.assistant_delay_ms, 750);
    assert_eq!(config.start_page, Page::Packaging);
    assert_eq!(config.tick_rate_ms, 33);

    let args = ["shiptalk", "--delay-ms=100", "-p", "tracking", "--no-mouse"];
    let CliCommand::RunTui(overrides) =
        parse_args(args.iter().map(|s| s.to_string())).unwrap()
    else {
        panic!("expected RunTui");
    };
    let config = overrides.apply(config);
    assert_eq!(config.assistant_delay_ms, 100);
    assert_eq!(config.start_page, Page::Tracking);
    assert!(!config.mouse);

    isolate(home.path());
}

#[test]
#[serial]
fn test_malformed_file_is_config_error() {
    let home = tempfile::tempdir().unwrap();
    isolate(home.path());
    write_config(home.path(), "{ not json");

    let err = ForumConfig::load().unwrap_err();
    assert_eq!(err.error_code(), "E_CFG_FILE");
    assert!(!err.is_recoverable());
}
