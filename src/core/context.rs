use anyhow::Result;

use crate::{
    config::Config,
    core::{
        LocaleColumns, TranslationDiff, TranslationMap, diff, loader::load_translations,
        parsers::EmbeddedObjectParser, snapshot::reconstruct,
    },
};

/// Everything a run needs, computed once up front.
///
/// Pipeline:
///
/// 1. **Load** the current translation map from the locale tree
/// 2. **Register** the column name of every loaded locale
/// 3. **Reconstruct** the previous map from the existing export, if any
/// 4. **Diff** the two
///
/// The export command then renders the artifacts; the diff command only
/// reports. The configuration is never modified after construction.
#[derive(Debug)]
pub struct ExportContext {
    pub config: Config,
    pub columns: LocaleColumns,
    pub current: TranslationMap,
    /// `None` on the first run (no prior export file).
    pub previous: Option<TranslationMap>,
    pub diff: Option<TranslationDiff>,
}

impl ExportContext {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let current = load_translations(
            &config.locales_path(),
            &config.translation_file_name,
            &EmbeddedObjectParser,
        )?;
        tracing::debug!(locales = current.locale_count(), "Loaded current translations");

        let columns = LocaleColumns::for_locales(
            &config.locale_columns,
            current.locales(),
            &config.key_column,
        )?;

        let previous = reconstruct(
            &config.output_path(),
            &config.key_column,
            &columns,
            config.delimiter_byte(),
        )?;
        let diff = previous.as_ref().map(|previous| diff::diff(previous, &current));

        Ok(Self {
            config,
            columns,
            current,
            previous,
            diff,
        })
    }

    /// Whether a journal would be written for this run.
    pub fn has_reportable_changes(&self) -> bool {
        self.diff
            .as_ref()
            .is_some_and(|diff| diff.is_journal_generated(self.config.show_deleted))
    }
}
