use std::{io::Write, iter};

use anyhow::Result;

use crate::core::{LocaleColumns, TranslationMap, table::TableWriter};

/// Render the consolidated export: one row per canonical key, framed by blank rows.
///
/// Returns the number of key rows written.
pub fn render_export<W: Write>(
    table: &mut TableWriter<W>,
    translations: &TranslationMap,
    columns: &LocaleColumns,
    key_column: &str,
) -> Result<usize> {
    let locales: Vec<&str> = translations.locales().collect();

    let header = iter::once(key_column.to_string())
        .chain(locales.iter().map(|locale| columns.column_for(locale)));
    table.write_header(header)?;
    table.write_blank()?;

    let keys = translations.canonical_keys();
    for key in &keys {
        let values = locales
            .iter()
            .map(|locale| translations.value(locale, key).unwrap_or_default());
        table.write_row(iter::once(*key).chain(values))?;
    }

    table.write_blank()?;
    Ok(keys.len())
}
