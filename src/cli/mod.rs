use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "TREX_LOG";

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(result.exit_status())
}

/// Install the stderr log subscriber.
///
/// `TREX_LOG` takes precedence; otherwise only warnings are shown, or debug
/// output for this crate with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "warn,trex=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
