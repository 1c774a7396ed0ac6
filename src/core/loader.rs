//! Loads the current translation map from a locale directory tree.
//!
//! Layout: one subdirectory per locale, each holding the translation file.
//!
//! ```text
//! locales/
//!   en/translation.js
//!   fr/translation.js
//! ```

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

use super::{ExportError, TranslationMap, parsers::TranslationSourceParser};

/// Read every `<locales_dir>/<locale>/<file_name>` into a [`TranslationMap`].
///
/// Locales are visited in directory-name order. Symlinked locale directories
/// are followed. A locale directory without the translation file is skipped.
/// Any unparseable file aborts the load.
pub fn load_translations(
    locales_dir: &Path,
    file_name: &str,
    parser: &dyn TranslationSourceParser,
) -> Result<TranslationMap> {
    if !locales_dir.exists() {
        bail!(
            "Locales directory '{}' does not exist.\n\
             Hint: Check your .trexrc.json 'localesDir' setting.",
            locales_dir.display()
        );
    }
    if !locales_dir.is_dir() {
        bail!("'{}' is not a directory.", locales_dir.display());
    }

    let mut translations = TranslationMap::new();

    let entries = WalkDir::new(locales_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read directory: {}", locales_dir.display()))?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let Some(locale) = entry.file_name().to_str() else {
            tracing::warn!(path = %entry.path().display(), "Skipping non UTF-8 locale directory");
            continue;
        };

        let path = entry.path().join(file_name);
        if !path.is_file() {
            tracing::debug!(locale, path = %path.display(), "No translation file, skipping locale");
            continue;
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read translation file: {}", path.display()))?;
        let dict = parser
            .parse(&content)
            .map_err(|source| ExportError::MalformedTranslationSource {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(locale, keys = dict.len(), "Loaded locale");
        translations.insert_locale(locale, dict);
    }

    Ok(translations)
}
