//! Delimited output.
//!
//! Provides [`RecordWriter`] for writing records as CSV rows into any
//! [`Write`] sink, transcoded to the output encoding of the layout.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use tracing::info;

use crate::{
    charset::Charset,
    delimited,
    error::{Error, Result},
    layout::LayoutSpec,
    record::Record,
};

/// Buffered CSV writer for records.
///
/// A row containing a character that the output encoding cannot represent
/// fails with [`io::ErrorKind::InvalidData`].
///
/// # Example
///
/// ```ignore
/// use fixed_width::writer::RecordWriter;
/// use std::fs::File;
///
/// let file = File::create("output.csv")?;
/// let mut writer = RecordWriter::new(file, layout.output_encoding());
///
/// writer.write_header(layout.column_names())?;
/// writer.write_all(&records)?;
/// writer.flush()?;
/// ```
pub struct RecordWriter<W: Write> {
    inner: BufWriter<W>,
    charset: Charset,
    /// Number of data rows written, header excluded.
    records_written: usize,
    /// Whether the header row has been written.
    header_written: bool,
}

impl<W: Write> RecordWriter<W> {
    /// Creates a writer that encodes rows with `charset`.
    pub fn new(writer: W, charset: Charset) -> Self {
        Self { inner: BufWriter::new(writer), charset, records_written: 0, header_written: false }
    }

    /// Writes the header row.
    ///
    /// May be called several times; the header is written only once.
    pub fn write_header<T: AsRef<str>>(&mut self, column_names: &[T]) -> io::Result<()> {
        if !self.header_written {
            self.write_row(column_names.iter().map(|name| name.as_ref()))?;
            self.header_written = true;
        }
        Ok(())
    }

    /// Writes one record as a row.
    pub fn write(&mut self, record: &Record) -> io::Result<()> {
        self.write_row(record.iter())?;
        self.records_written += 1;
        Ok(())
    }

    /// Writes several records, preserving their order.
    pub fn write_all(&mut self, records: &[Record]) -> io::Result<()> {
        for record in records {
            self.write(record)?;
        }
        Ok(())
    }

    /// Forces buffered rows out to the inner writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Returns the number of data rows written.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Whether the header row has been written.
    #[must_use]
    pub fn header_written(&self) -> bool {
        self.header_written
    }

    /// Gets a reference to the inner writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        self.inner.get_ref()
    }

    /// Extracts the inner writer, flushing first.
    pub fn into_inner(self) -> std::result::Result<W, io::IntoInnerError<BufWriter<W>>> {
        self.inner.into_inner()
    }

    fn write_row<'a>(&mut self, fields: impl IntoIterator<Item = &'a str>) -> io::Result<()> {
        let row = delimited::to_row(fields)?;
        let bytes = self.charset.encode(&row)?;
        self.inner.write_all(&bytes)
    }
}

/// Writes `records` to the CSV file at `path`, creating or truncating it.
///
/// The header row goes first when the layout asks for it.
/// Returns the number of data rows written.
///
/// A failure part-way through may leave a truncated file behind.
pub fn write_file(path: impl AsRef<Path>, records: &[Record], layout: &LayoutSpec) -> Result<usize> {
    let path = path.as_ref();
    let write_err = |source: io::Error| Error::Write { path: path.to_path_buf(), source };

    info!(path = %path.display(), encoding = %layout.output_encoding(), "generating CSV file");
    let file = File::create(path).map_err(write_err)?;
    let mut writer = RecordWriter::new(file, layout.output_encoding());

    if layout.include_header() {
        writer.write_header(layout.column_names()).map_err(write_err)?;
    }
    writer.write_all(records).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    info!(path = %path.display(), rows = writer.records_written(), "CSV file written");
    Ok(writer.records_written())
}
