use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::core::{TranslationDiff, render::LocaleStats};

#[derive(Debug)]
pub enum CommandSummary {
    Export(ExportSummary),
    Diff(DiffSummary),
    Init(InitSummary),
}

/// What happened to the journal during an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalOutcome {
    /// No previous export to compare against.
    FirstRun,
    /// Nothing reportable changed, so no journal file was written.
    Unchanged,
    Written {
        path: PathBuf,
        inserted: usize,
        updated: usize,
        /// Deleted rows actually written (0 when deletions are hidden).
        deleted: usize,
    },
}

#[derive(Debug)]
pub struct ExportSummary {
    pub export_path: PathBuf,
    pub metadata_path: PathBuf,
    pub key_count: usize,
    pub journal: JournalOutcome,
    pub stats: Vec<LocaleStats>,
}

#[derive(Debug)]
pub struct DiffSummary {
    pub snapshot_path: PathBuf,
    /// `None` when there is no previous export.
    pub diff: Option<TranslationDiff>,
    pub show_deleted: bool,
}

impl DiffSummary {
    pub fn has_changes(&self) -> bool {
        self.diff
            .as_ref()
            .is_some_and(|diff| diff.is_journal_generated(self.show_deleted))
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running trex commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self { summary }
    }

    /// `diff` fails when changes are pending; `init` fails when the config exists.
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Export(_) => ExitStatus::Success,
            CommandSummary::Diff(summary) if summary.has_changes() => ExitStatus::Failure,
            CommandSummary::Diff(_) => ExitStatus::Success,
            CommandSummary::Init(summary) if !summary.created => ExitStatus::Failure,
            CommandSummary::Init(_) => ExitStatus::Success,
        }
    }
}
