//! Rebuilds the previous translation map from an earlier export file.

use std::{io::Read, path::Path};

use anyhow::Result;

use super::{
    ExportError, LocaleColumns, TranslationMap,
    table::{Row, TableReader},
};

/// Column layout of a previous export, resolved from its header row.
#[derive(Debug)]
struct SnapshotLayout {
    key_index: usize,
    /// (locale, column index) for every non-key column, in header order.
    locales: Vec<(String, usize)>,
}

impl SnapshotLayout {
    fn resolve(headers: &[String], key_column: &str, columns: &LocaleColumns) -> Option<Self> {
        let key_index = headers.iter().position(|h| h == key_column)?;
        let locales = headers
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != key_index)
            .map(|(index, header)| (columns.locale_for(header), index))
            .collect();
        Some(Self { key_index, locales })
    }

    fn empty_map(&self) -> TranslationMap {
        let mut map = TranslationMap::new();
        for (locale, _) in &self.locales {
            map.insert_locale(locale.clone(), Default::default());
        }
        map
    }

    /// Replay one data row. Rows without a key (the blank separators) are skipped.
    fn replay(&self, row: Row<'_>, map: &mut TranslationMap) {
        let key = row.cell(self.key_index);
        if key.is_empty() {
            return;
        }
        for (locale, index) in &self.locales {
            map.insert(locale.as_str(), key, row.cell(*index));
        }
    }
}

/// Read back the export at `path`, or `None` when there is no prior export.
///
/// The header is resolved before any row is replayed. Fails with
/// [`ExportError::MalformedSnapshot`] if it lacks `key_column`.
pub fn reconstruct(
    path: &Path,
    key_column: &str,
    columns: &LocaleColumns,
    delimiter: u8,
) -> Result<Option<TranslationMap>> {
    let Some(reader) = TableReader::open(path, delimiter)? else {
        tracing::debug!(path = %path.display(), "No previous export");
        return Ok(None);
    };
    let layout = SnapshotLayout::resolve(reader.headers(), key_column, columns).ok_or_else(|| {
        ExportError::MalformedSnapshot {
            path: path.to_path_buf(),
            key_column: key_column.to_string(),
        }
    })?;
    tracing::debug!(locales = ?layout.locales, "Resolved snapshot columns");

    replay_rows(reader, &layout).map(Some)
}

fn replay_rows<R: Read>(mut reader: TableReader<R>, layout: &SnapshotLayout) -> Result<TranslationMap> {
    let mut map = layout.empty_map();
    while let Some(row) = reader.next_row()? {
        layout.replay(row, &mut map);
    }
    Ok(map)
}
