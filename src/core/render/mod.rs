//! Renders the three output artifacts.
//!
//! - `export`: consolidated table of every key across all locales
//! - `journal`: changed keys since the previous export
//! - `metadata`: per-locale key and word counts
//!
//! Renderers write to any [`TableWriter`]; [`write_artifact`] binds one to a
//! freshly replaced file.

pub mod export;
pub mod journal;
pub mod metadata;

use std::{fs::File, path::Path};

use anyhow::{Context, Result};

use super::table::{TableWriter, replace_file};

pub use export::render_export;
pub use journal::{JournalOptions, UPDATE_TYPE_COLUMN, render_journal};
pub use metadata::{LocaleStats, locale_stats, render_metadata};

/// Write one artifact to `path`, replacing any existing file.
pub fn write_artifact<T, F>(path: &Path, delimiter: u8, render: F) -> Result<T>
where
    F: FnOnce(&mut TableWriter<File>) -> Result<T>,
{
    let file = replace_file(path)?;
    let mut table = TableWriter::new(file, delimiter);
    let output = render(&mut table).with_context(|| format!("Failed to write {}", path.display()))?;
    table.finish()?;

    tracing::info!(path = %path.display(), "Wrote artifact");
    Ok(output)
}
