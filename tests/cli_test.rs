use std::process::Command;

fn shiptalk(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_shiptalk"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn test_version_flag() {
    let output = shiptalk(&["--version"]);
    assert!(output.status.success(), "Version flag should exit with code 0");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let version_part = stdout.trim().strip_prefix("shiptalk ").unwrap_or("");
    assert_eq!(version_part, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_short_version_flag() {
    let output = shiptalk(&["-V"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("shiptalk "));
}

#[test]
fn test_help_lists_pages_and_flags() {
    let output = shiptalk(&["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--page"));
    assert!(stdout.contains("--delay-ms"));
    assert!(stdout.contains("--no-mouse"));
    assert!(stdout.contains("deliverytimes"));
}

#[test]
fn test_unknown_page_fails_before_tui() {
    let output = shiptalk(&["--page", "mailroom"]);
    assert!(!output.status.success(), "Bad page should exit non-zero");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("E_CFG_VALUE"));
    assert!(stderr.contains("mailroom"));
}

#[test]
fn test_missing_flag_value_fails() {
    let output = shiptalk(&["--delay-ms"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--delay-ms"));
}
