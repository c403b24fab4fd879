//! Layout specification of a fixed-width file.
//!
//! A layout names the fields of a record, gives each one a width in
//! characters, and selects the encodings of the input and output files.
//! It is loaded once from JSON and shared read-only by the parser and the writer.
//!
//! # Format
//!
//! ```json
//! {
//!     "ColumnNames": ["Field1", "Field2"],
//!     "Offsets": [7, 2],
//!     "FixedWidthEncoding": "windows-1252",
//!     "IncludeHeader": true,
//!     "DelimitedEncoding": "utf-8"
//! }
//! ```
//!
//! `Offsets` holds field widths, not cumulative positions.

mod types;
mod validation;

pub use types::LayoutSpec;
pub use validation::ConfigError;
