//! Fatal error kinds raised by the export pipeline.
//!
//! Everything else (I/O, config) travels as `anyhow::Error` with context.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to extract a translation object from a locale source file.
#[derive(Debug, Error)]
pub enum SourceParseError {
    /// No `{ ... }` pair could be located in the file content.
    #[error("no embedded object literal found (expected a '{{' followed by a later '}}')")]
    MissingObject,

    /// The text between the braces is not valid object syntax.
    #[error("invalid object syntax: {0}")]
    InvalidObject(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("malformed translation source '{}'", path.display())]
    MalformedTranslationSource {
        path: PathBuf,
        #[source]
        source: SourceParseError,
    },

    /// A previous export exists but its header has no key column, so there is
    /// nothing to join the two snapshots on.
    #[error("malformed snapshot '{}': missing key column \"{key_column}\"", path.display())]
    MalformedSnapshot { path: PathBuf, key_column: String },

    /// Two loaded locales would be written under the same column header.
    #[error(
        "locales \"{first}\" and \"{second}\" both map to column \"{column}\" (set distinct names in 'localeColumns')"
    )]
    DuplicateLocaleColumn {
        column: String,
        first: String,
        second: String,
    },

    #[error("column \"{column}\" of locale \"{locale}\" clashes with 'keyColumn'")]
    LocaleColumnClashesWithKey { column: String, locale: String },
}
