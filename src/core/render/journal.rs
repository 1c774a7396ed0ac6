use std::{io::Write, iter};

use anyhow::Result;

use crate::core::{LocaleColumns, TranslationDiff, TranslationMap, table::TableWriter};

/// Name of the journal column holding NEW / UPDATE / DELETE.
pub const UPDATE_TYPE_COLUMN: &str = "UPDATE_TYPE";

/// Visibility toggles of the journal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JournalOptions {
    /// Include DELETE rows.
    pub show_deleted: bool,
    /// Add one `<COLUMN>_OLD` column per locale with the previous value.
    pub show_old_values: bool,
}

/// Render the change journal.
///
/// Columns: key, one per current locale, optionally one `_OLD` per locale, then
/// `UPDATE_TYPE`. Rows: inserted, updated, then deleted keys (if shown), framed
/// by blank rows. Returns the number of change rows written.
pub fn render_journal<W: Write>(
    table: &mut TableWriter<W>,
    previous: &TranslationMap,
    current: &TranslationMap,
    diff: &TranslationDiff,
    columns: &LocaleColumns,
    key_column: &str,
    options: JournalOptions,
) -> Result<usize> {
    let locales: Vec<&str> = current.locales().collect();
    let old_locales: &[&str] = if options.show_old_values { &locales } else { &[] };

    let header = iter::once(key_column.to_string())
        .chain(locales.iter().map(|locale| columns.column_for(locale)))
        .chain(old_locales.iter().map(|locale| columns.old_column_for(locale)))
        .chain(iter::once(UPDATE_TYPE_COLUMN.to_string()));
    table.write_header(header)?;
    table.write_blank()?;

    let mut written = 0;
    for (kind, key) in diff.changes(options.show_deleted) {
        let values = locales
            .iter()
            .map(|locale| current.value(locale, key).unwrap_or_default());
        let old_values = old_locales
            .iter()
            .map(|locale| previous.value(locale, key).unwrap_or_default());
        let row = iter::once(key)
            .chain(values)
            .chain(old_values)
            .chain(iter::once(kind.as_str()));
        table.write_row(row)?;
        written += 1;
    }

    table.write_blank()?;
    Ok(written)
}
