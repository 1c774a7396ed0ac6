use std::{env, path::Path};

use anyhow::{Context, Result};

use super::super::args::CommonArgs;
use crate::config::{Config, load_config};

/// Build the run configuration.
///
/// Priority (highest to lowest): CLI arguments, `.trexrc.json`, built-in defaults.
pub fn resolve_config(args: &CommonArgs) -> Result<Config> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    resolve_config_in(&cwd, args)
}

pub fn resolve_config_in(start_dir: &Path, args: &CommonArgs) -> Result<Config> {
    let loaded = load_config(start_dir)?;
    if !loaded.from_file {
        tracing::debug!("No config file found, using defaults");
    }
    Ok(apply_overrides(loaded.config, args))
}

fn apply_overrides(config: Config, args: &CommonArgs) -> Config {
    let show_deleted = args.show_deleted();
    let show_old_values = args.show_old_values();
    let args = args.clone();
    Config {
        locales_dir: args.locales_dir.unwrap_or(config.locales_dir),
        translation_file_name: args
            .translation_file_name
            .unwrap_or(config.translation_file_name),
        output_dir: args.output_dir.unwrap_or(config.output_dir),
        output_file_name: args.output_file_name.unwrap_or(config.output_file_name),
        metadata_file_name: args.metadata_file_name.unwrap_or(config.metadata_file_name),
        journal_file_name: args.journal_file_name.or(config.journal_file_name),
        key_column: args.key_column.unwrap_or(config.key_column),
        locale_columns: args.locale_columns.unwrap_or(config.locale_columns),
        show_deleted: show_deleted.unwrap_or(config.show_deleted),
        show_old_values: show_old_values.unwrap_or(config.show_old_values),
        delimiter: args.delimiter.unwrap_or(config.delimiter),
    }
}
