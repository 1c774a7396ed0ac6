use anyhow::Result;

use super::super::args::DiffCommand;
use super::helper::resolve_config;
use super::{CommandResult, CommandSummary, DiffSummary};
use crate::core::ExportContext;

/// Compare the locale tree with the last export without writing anything.
pub fn diff(cmd: DiffCommand) -> Result<CommandResult> {
    let config = resolve_config(&cmd.common)?;
    let ctx = ExportContext::new(config)?;

    Ok(CommandResult::new(CommandSummary::Diff(DiffSummary {
        snapshot_path: ctx.config.output_path(),
        show_deleted: ctx.config.show_deleted,
        diff: ctx.diff,
    })))
}
