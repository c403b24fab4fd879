//! Fixed-width parsing.
//!
//! Each line is cut into consecutive slices of the configured widths,
//! counted in characters, and every slice is trimmed of surrounding
//! whitespace. Short lines yield empty trailing fields and any characters
//! past the last width are ignored.
//!
//! Lines end with `\n`, `\r\n` or a lone `\r`.

use std::{fs, io, path::Path};

use tracing::{debug, info};

use crate::{
    error::{Error, Result},
    layout::LayoutSpec,
    record::Record,
};

/// Cuts one line into a [`Record`].
///
/// ```
/// use fixed_width::reader::slice_line;
///
/// let record = slice_line("SMITH   JOHN  42", &[8, 6, 2]);
/// assert_eq!(record.fields(), &["SMITH", "JOHN", "42"]);
///
/// let short = slice_line("SMITH", &[8, 6, 2]);
/// assert_eq!(short.fields(), &["SMITH", "", ""]);
/// ```
#[must_use]
pub fn slice_line(line: &str, widths: &[usize]) -> Record {
    let mut fields = Vec::with_capacity(widths.len());
    let mut rest = line;

    for &width in widths {
        let end = rest.char_indices().nth(width).map_or(rest.len(), |(idx, _)| idx);
        let (field, tail) = rest.split_at(end);
        fields.push(field.trim_matches(is_padding).to_string());
        rest = tail;
    }

    Record::from(fields)
}

/// Characters stripped from both ends of a field: Unicode whitespace and
/// the ASCII information separators U+001C..=U+001F.
fn is_padding(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Lines of a text, without their terminators.
///
/// Unlike [`str::lines`], a lone `\r` also ends a line.
struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(end) = self.rest.find(['\n', '\r']) else {
            return Some(std::mem::take(&mut self.rest));
        };
        let line = &self.rest[..end];
        let terminator = if self.rest[end..].starts_with("\r\n") { 2 } else { 1 };
        self.rest = &self.rest[end + terminator..];
        Some(line)
    }
}

/// Iterator over the records of decoded fixed-width text.
///
/// Yields one record per line, blank lines included, in input order.
pub struct Records<'a> {
    lines: Lines<'a>,
    widths: &'a [usize],
    /// Number of records yielded so far.
    records_read: usize,
}

impl<'a> Records<'a> {
    /// Creates an iterator over `text` using the widths of `layout`.
    pub fn new(text: &'a str, layout: &'a LayoutSpec) -> Self {
        Self::with_widths(text, layout.field_widths())
    }

    /// Creates an iterator over `text` with explicit widths.
    pub fn with_widths(text: &'a str, widths: &'a [usize]) -> Self {
        Self { lines: Lines { rest: text }, widths, records_read: 0 }
    }

    /// Returns the number of records yielded so far.
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }
}

impl Iterator for Records<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.records_read += 1;
        Some(slice_line(line, self.widths))
    }
}

/// Parses already decoded text.
#[must_use]
pub fn parse_str(text: &str, layout: &LayoutSpec) -> Vec<Record> {
    Records::new(text, layout).collect()
}

/// Decodes `bytes` with the layout's input encoding and parses them.
///
/// Bytes that are malformed in that encoding fail with
/// [`io::ErrorKind::InvalidData`].
pub fn parse_bytes(bytes: &[u8], layout: &LayoutSpec) -> io::Result<Vec<Record>> {
    let text = layout.input_encoding().decode(bytes)?;
    Ok(parse_str(&text, layout))
}

/// Reads and parses a whole fixed-width file.
///
/// # Errors
///
/// - [`Error::NotFound`] if `path` is not an existing file
/// - [`Error::Read`] if reading or decoding fails
pub fn parse_file(path: impl AsRef<Path>, layout: &LayoutSpec) -> Result<Vec<Record>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    info!(path = %path.display(), "parsing fixed-width file");
    let read_err = |source: io::Error| Error::Read { path: path.to_path_buf(), source };

    let bytes = fs::read(path).map_err(read_err)?;
    debug!(bytes = bytes.len(), encoding = %layout.input_encoding(), "read input");
    let records = parse_bytes(&bytes, layout).map_err(read_err)?;

    info!(records = records.len(), "parsing completed");
    Ok(records)
}
