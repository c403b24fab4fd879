//! CSV row formatting.
//!
//! Rows use `,` as delimiter, `"` as quote character and `\n` as terminator.
//! A field is quoted only when it contains the delimiter, a quote or a line
//! break; embedded quotes are doubled.
//!
//! # Format
//!
//! ```csv
//! Field1,Field2
//! AAAAAAA,AA
//! "Smith, John","Payment for ""services"""
//! ```

use csv::{QuoteStyle, Terminator, WriterBuilder};

/// Field delimiter.
pub const DELIMITER: u8 = b',';

/// Row terminator.
pub const TERMINATOR: u8 = b'\n';

/// Formats one row, terminator included.
///
/// ```
/// use fixed_width::delimited::to_row;
///
/// assert_eq!(to_row(["Field1", "Field2"]).unwrap(), "Field1,Field2\n");
/// assert_eq!(to_row(["a,b", "say \"hi\""]).unwrap(), "\"a,b\",\"say \"\"hi\"\"\"\n");
/// ```
pub fn to_row<I, T>(fields: I) -> csv::Result<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .delimiter(DELIMITER)
        .terminator(Terminator::Any(TERMINATOR))
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(fields)?;
    writer.flush()?;

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    // Bytes that are not UTF-8 can only come from non-`str` fields.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
