//! CLI module for ShipTalk.
//!
//! Flags are handled before the TUI starts:
//!
//! ```ignore
//! use shiptalk::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args())?;
//! if run_cli_command(&command) {
//!     return Ok(()); // printed version or help
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, usage, CliCommand, CliOverrides};
pub use version::{version_string, VERSION};

/// Run a non-TUI command if applicable.
///
/// Returns `true` when the command was handled and the process should
/// exit, `false` for [`CliCommand::RunTui`].
pub fn run_cli_command(command: &CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            println!("{}", version_string());
            true
        }
        CliCommand::Help => {
            print!("{}", usage());
            true
        }
        CliCommand::RunTui(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_is_not_handled() {
        assert!(!run_cli_command(&CliCommand::RunTui(CliOverrides::default())));
    }
}
