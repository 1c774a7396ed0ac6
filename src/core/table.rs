//! Delimited row reading and writing on top of the `csv` crate.

use std::{
    fs::{self, File},
    io::{self, Read, Write},
    path::Path,
};

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};

/// Row-by-row writer. Every row is flushed as soon as it is written.
pub struct TableWriter<W: Write> {
    inner: csv::Writer<W>,
    width: usize,
}

impl<W: Write> TableWriter<W> {
    pub fn new(writer: W, delimiter: u8) -> Self {
        let inner = WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(writer);
        Self { inner, width: 0 }
    }

    /// Write the header row. Its length fixes the width of blank rows.
    pub fn write_header<I, T>(&mut self, header: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let header: Vec<T> = header.into_iter().collect();
        self.width = header.len();
        self.write_row(header)
    }

    pub fn write_row<I, T>(&mut self, row: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.inner.write_record(row)?;
        self.inner.flush()?;
        Ok(())
    }

    /// Write a separator row with every cell empty.
    pub fn write_blank(&mut self) -> Result<()> {
        self.write_row(vec![""; self.width])
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|err| err.into_error())
            .context("Failed to flush table")
    }
}

/// Row-by-row reader.
///
/// Headers are resolved when the reader is created, before any data row is
/// read. Rows may be shorter than the header; missing cells read as empty.
pub struct TableReader<R: Read> {
    inner: csv::Reader<R>,
    headers: Vec<String>,
    record: StringRecord,
}

impl TableReader<File> {
    /// Open a table file, or `None` if it does not exist.
    pub fn open(path: &Path, delimiter: u8) -> Result<Option<Self>> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to open {}", path.display()));
            }
        };
        Self::from_reader(file, delimiter)
            .with_context(|| format!("Failed to read header of {}", path.display()))
            .map(Some)
    }
}

impl<R: Read> TableReader<R> {
    pub fn from_reader(reader: R, delimiter: u8) -> Result<Self> {
        let mut inner = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers = inner.headers()?.iter().map(str::to_string).collect();
        Ok(Self {
            inner,
            headers,
            record: StringRecord::new(),
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Next data row, or `None` at the end of the table.
    pub fn next_row(&mut self) -> Result<Option<Row<'_>>> {
        if self.inner.read_record(&mut self.record)? {
            Ok(Some(Row(&self.record)))
        } else {
            Ok(None)
        }
    }
}

/// Borrowed view of one data row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a>(&'a StringRecord);

impl Row<'_> {
    /// Cell at `index`, empty when the row is too short.
    pub fn cell(&self, index: usize) -> &str {
        self.0.get(index).unwrap_or_default()
    }
}

/// Open `path` for writing from scratch.
///
/// Parent directories are created and any existing file is deleted first, so
/// an old and a new version of the artifact are never interleaved.
pub fn replace_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    if path.exists() {
        fs::remove_file(path)
            .with_context(|| format!("Failed to remove existing file: {}", path.display()))?;
    }
    File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))
}
