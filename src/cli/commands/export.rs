use anyhow::Result;
use chrono::Local;

use super::super::args::ExportCommand;
use super::helper::resolve_config;
use super::{CommandResult, CommandSummary, ExportSummary, JournalOutcome};
use crate::core::{
    ExportContext,
    render::{
        JournalOptions, locale_stats, render_export, render_journal, render_metadata,
        write_artifact,
    },
};

pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let config = resolve_config(&cmd.common)?;
    let ctx = ExportContext::new(config)?;
    Ok(CommandResult::new(CommandSummary::Export(run_export(&ctx)?)))
}

/// Write the export, the journal (when something reportable changed) and the metadata.
///
/// The previous snapshot has already been read into `ctx`, so overwriting the
/// export file here is safe.
pub fn run_export(ctx: &ExportContext) -> Result<ExportSummary> {
    let config = &ctx.config;
    let delimiter = config.delimiter_byte();

    let export_path = config.output_path();
    let key_count = write_artifact(&export_path, delimiter, |table| {
        render_export(table, &ctx.current, &ctx.columns, &config.key_column)
    })?;

    let journal = match (&ctx.previous, &ctx.diff) {
        (Some(previous), Some(diff)) if ctx.has_reportable_changes() => {
            let options = JournalOptions {
                show_deleted: config.show_deleted,
                show_old_values: config.show_old_values,
            };
            let path = config.journal_path(&Local::now());
            write_artifact(&path, delimiter, |table| {
                render_journal(
                    table,
                    previous,
                    &ctx.current,
                    diff,
                    &ctx.columns,
                    &config.key_column,
                    options,
                )
            })?;

            JournalOutcome::Written {
                path,
                inserted: diff.inserted.len(),
                updated: diff.updated.len(),
                deleted: if options.show_deleted {
                    diff.deleted.len()
                } else {
                    0
                },
            }
        }
        (Some(_), _) => {
            tracing::debug!("No reportable changes, skipping journal");
            JournalOutcome::Unchanged
        }
        (None, _) => JournalOutcome::FirstRun,
    };

    let stats = locale_stats(&ctx.current);
    let metadata_path = config.metadata_path();
    write_artifact(&metadata_path, delimiter, |table| {
        render_metadata(table, &stats)
    })?;

    Ok(ExportSummary {
        export_path,
        metadata_path,
        key_count,
        journal,
        stats,
    })
}
