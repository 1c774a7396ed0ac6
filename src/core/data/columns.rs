use std::collections::{BTreeMap, HashMap};

use crate::core::ExportError;

/// Suffix of the journal columns that carry previous values.
pub const OLD_VALUE_SUFFIX: &str = "_OLD";

/// Bidirectional mapping between locale identifiers and display column names.
///
/// Built once from the configured overrides and the loaded locales. Locales
/// without an override are displayed upper-cased. A column name maps back to
/// its override, then to the loaded locale displayed under it, and only then
/// to its lower-cased form.
#[derive(Debug, Clone, Default)]
pub struct LocaleColumns {
    by_locale: HashMap<String, String>,
    by_column: HashMap<String, String>,
}

impl LocaleColumns {
    pub fn new(overrides: &BTreeMap<String, String>) -> Self {
        let mut columns = Self::default();
        for (locale, column) in overrides {
            columns.by_locale.insert(locale.clone(), column.clone());
            columns.by_column.insert(column.clone(), locale.clone());
        }
        columns
    }

    /// Registry for a known locale set.
    ///
    /// Fails if two locales would share a column header or a locale column
    /// would shadow `key_column`, since such an export cannot be read back.
    pub fn for_locales<'a>(
        overrides: &BTreeMap<String, String>,
        locales: impl IntoIterator<Item = &'a str>,
        key_column: &str,
    ) -> Result<Self, ExportError> {
        let mut columns = Self::new(overrides);
        let mut claimed: HashMap<String, &str> = HashMap::new();

        for locale in locales {
            let column = columns.column_for(locale);
            if column == key_column {
                return Err(ExportError::LocaleColumnClashesWithKey {
                    column,
                    locale: locale.to_string(),
                });
            }
            if let Some(first) = claimed.insert(column.clone(), locale) {
                return Err(ExportError::DuplicateLocaleColumn {
                    column,
                    first: first.to_string(),
                    second: locale.to_string(),
                });
            }
            // Loaded locales win over overrides of locales that are gone
            columns.by_column.insert(column, locale.to_string());
        }

        Ok(columns)
    }

    /// Display column name of a locale.
    pub fn column_for(&self, locale: &str) -> String {
        match self.by_locale.get(locale) {
            Some(column) => column.clone(),
            None => {
                tracing::debug!(locale, "No column override, using upper-cased locale");
                locale.to_uppercase()
            }
        }
    }

    /// Journal column carrying the previous value of a locale.
    pub fn old_column_for(&self, locale: &str) -> String {
        format!("{}{}", self.column_for(locale), OLD_VALUE_SUFFIX)
    }

    /// Locale identifier a display column name was written for.
    pub fn locale_for(&self, column: &str) -> String {
        self.by_column
            .get(column)
            .cloned()
            .unwrap_or_else(|| column.to_lowercase())
    }
}
