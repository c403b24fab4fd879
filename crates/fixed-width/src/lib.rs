//! Fixed-width to CSV conversion.
//!
//! A JSON layout specification gives the width and name of every field of a
//! fixed-width file, the encodings of the input and output files, and whether
//! the CSV output starts with a header row.
//!
//! - [`layout`] loads and validates the specification
//! - [`reader`] slices fixed-width lines into [`Record`]s
//! - [`writer`] writes records as CSV rows
//! - [`convert`] runs both steps for a pair of files
//!
//! # Quick start
//!
//! ```
//! use fixed_width::prelude::*;
//!
//! let layout = LayoutSpec::from_json_str(
//!     r#"{"Offsets": [7, 2], "ColumnNames": ["Field1", "Field2"],
//!         "FixedWidthEncoding": "windows-1252", "DelimitedEncoding": "utf-8",
//!         "IncludeHeader": true}"#,
//! )
//! .unwrap();
//!
//! let records = parse_str("AAAAAAAAA\n", &layout);
//! assert_eq!(records[0].fields(), &["AAAAAAA", "AA"]);
//!
//! let mut writer = RecordWriter::new(Vec::new(), layout.output_encoding());
//! writer.write_header(layout.column_names()).unwrap();
//! writer.write_all(&records).unwrap();
//!
//! let csv = String::from_utf8(writer.into_inner().unwrap()).unwrap();
//! assert_eq!(csv, "Field1,Field2\nAAAAAAA,AA\n");
//! ```

pub mod charset;
pub mod convert;
pub mod delimited;
pub mod error;
pub mod layout;
pub mod reader;
pub mod record;
pub mod writer;

pub use error::{Error, ErrorKind, Result};
pub use record::Record;

/// Commonly used types and functions.
pub mod prelude {
    pub use crate::{
        charset::Charset,
        convert::{ConvertSummary, Converter, process},
        error::{Error, ErrorKind, Result},
        layout::{ConfigError, LayoutSpec},
        reader::{Records, parse_file, parse_str},
        record::Record,
        writer::{RecordWriter, write_file},
    };
}
