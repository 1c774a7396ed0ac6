use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, diff::diff, export::export, init::init},
};

/// Dispatches to the appropriate command handler.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary
/// - `Err` on any fatal error (malformed source or snapshot, I/O failure, invalid config)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Export(cmd)) => export(cmd),
        Some(Command::Diff(cmd)) => diff(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
