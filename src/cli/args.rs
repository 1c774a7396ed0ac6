//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `export`: Write the consolidated export, the change journal and the metadata summary
//! - `diff`: Show what changed since the last export without writing anything
//! - `init`: Initialize trex configuration file

use std::collections::BTreeMap;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Export(cmd)) => cmd.common.verbose,
            Some(Command::Diff(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by `export` and `diff`. Each overrides the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Directory holding one subdirectory per locale
    #[arg(long, env = "TREX_LOCALES_DIR")]
    pub locales_dir: Option<String>,

    /// Name of the translation file inside each locale directory
    #[arg(long)]
    pub translation_file_name: Option<String>,

    /// Directory the artifacts are written to
    #[arg(long, env = "TREX_OUTPUT_DIR")]
    pub output_dir: Option<String>,

    /// File name of the consolidated export
    #[arg(long)]
    pub output_file_name: Option<String>,

    /// File name of the metadata summary
    #[arg(long)]
    pub metadata_file_name: Option<String>,

    /// Fixed journal file name (default: journal_<timestamp>.csv)
    #[arg(long)]
    pub journal_file_name: Option<String>,

    /// Header of the translation key column
    #[arg(long)]
    pub key_column: Option<String>,

    /// Locale column name overrides as a JSON object, e.g. '{"en": "English"}'
    #[arg(long, value_parser = parse_locale_columns)]
    pub locale_columns: Option<BTreeMap<String, String>>,

    /// Include deleted keys in the journal
    #[arg(long, overrides_with = "no_show_deleted")]
    pub show_deleted: bool,

    /// Leave deleted keys out of the journal, even if the config enables them
    #[arg(long, overrides_with = "show_deleted")]
    pub no_show_deleted: bool,

    /// Add the previous value of every locale to the journal
    #[arg(long, overrides_with = "no_show_old_values")]
    pub show_old_values: bool,

    /// Leave previous values out of the journal, even if the config enables them
    #[arg(long, overrides_with = "show_old_values")]
    pub no_show_old_values: bool,

    /// Field delimiter of the written and re-read files
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// `--show-deleted` / `--no-show-deleted`, `None` when neither is given.
    pub fn show_deleted(&self) -> Option<bool> {
        toggle(self.show_deleted, self.no_show_deleted)
    }

    /// `--show-old-values` / `--no-show-old-values`, `None` when neither is given.
    pub fn show_old_values(&self) -> Option<bool> {
        toggle(self.show_old_values, self.no_show_old_values)
    }
}

fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn parse_locale_columns(raw: &str) -> Result<BTreeMap<String, String>, String> {
    serde_json::from_str(raw).map_err(|err| format!("expected a JSON object of strings: {}", err))
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct DiffCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export all locales to a CSV file, journal the changes and write per-locale statistics
    Export(ExportCommand),
    /// List keys added, updated or deleted since the last export
    Diff(DiffCommand),
    /// Initialize a new .trexrc.json configuration file
    Init,
}
