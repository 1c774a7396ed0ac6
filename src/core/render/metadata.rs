use std::io::Write;

use anyhow::Result;

use crate::{
    core::{TranslationMap, table::TableWriter},
    utils::count_words,
};

pub const METADATA_HEADER: [&str; 3] = ["LOCALE", "NUMBER_OF_KEYS", "NUMBER_OF_WORDS"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStats {
    pub locale: String,
    /// Every key of the locale, translated or not.
    pub key_count: usize,
    /// Words across all values; empty values contribute nothing.
    pub word_count: usize,
}

/// Per-locale statistics, in locale order.
pub fn locale_stats(translations: &TranslationMap) -> Vec<LocaleStats> {
    translations
        .iter()
        .map(|(locale, dict)| LocaleStats {
            locale: locale.to_string(),
            key_count: dict.len(),
            word_count: dict.values().map(|value| count_words(value)).sum(),
        })
        .collect()
}

/// Render the metadata summary: header, a blank row, then one row per locale.
pub fn render_metadata<W: Write>(table: &mut TableWriter<W>, stats: &[LocaleStats]) -> Result<()> {
    table.write_header(METADATA_HEADER)?;
    table.write_blank()?;
    for stat in stats {
        table.write_row([
            stat.locale.clone(),
            stat.key_count.to_string(),
            stat.word_count.to_string(),
        ])?;
    }
    Ok(())
}
