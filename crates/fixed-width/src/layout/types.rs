//! The [`LayoutSpec`] value and its JSON loader.

use std::{fs, io, path::Path};

use serde::Deserialize;
use tracing::debug;

use super::ConfigError;
use crate::charset::Charset;

const KEY_OFFSETS: &str = "Offsets";
const KEY_COLUMN_NAMES: &str = "ColumnNames";
const KEY_INPUT_ENCODING: &str = "FixedWidthEncoding";
const KEY_OUTPUT_ENCODING: &str = "DelimitedEncoding";
const KEY_INCLUDE_HEADER: &str = "IncludeHeader";

/// Field layout of a fixed-width file and the shape of its CSV output.
///
/// Immutable once constructed; every constructor validates the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSpec {
    pub(super) field_widths: Vec<usize>,
    pub(super) column_names: Vec<String>,
    pub(super) input_encoding: Charset,
    pub(super) output_encoding: Charset,
    pub(super) include_header: bool,
}

/// JSON document as written on disk.
///
/// All keys are optional here so a missing key is reported by name
/// rather than as a generic decoder message.
#[derive(Debug, Deserialize)]
struct RawLayout {
    #[serde(rename = "Offsets")]
    offsets: Option<Vec<usize>>,
    #[serde(rename = "ColumnNames")]
    column_names: Option<Vec<String>>,
    #[serde(rename = "FixedWidthEncoding")]
    fixed_width_encoding: Option<String>,
    #[serde(rename = "DelimitedEncoding")]
    delimited_encoding: Option<String>,
    #[serde(rename = "IncludeHeader")]
    include_header: Option<bool>,
}

impl LayoutSpec {
    /// Builds a layout from its parts.
    pub fn new(
        field_widths: Vec<usize>,
        column_names: Vec<String>,
        input_encoding: Charset,
        output_encoding: Charset,
        include_header: bool,
    ) -> Result<Self, ConfigError> {
        let layout =
            Self { field_widths, column_names, input_encoding, output_encoding, include_header };
        layout.validate()?;
        Ok(layout)
    }

    /// Loads a layout from a JSON specification file.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use fixed_width::layout::LayoutSpec;
    ///
    /// let layout = LayoutSpec::load("data/spec.json")?;
    /// println!("{} fields, {} chars per line", layout.field_count(), layout.line_width());
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            _ => ConfigError::Unreadable { path: path.to_path_buf(), source },
        })?;

        let layout = Self::from_json_str(&text)?;
        debug!(
            path = %path.display(),
            fields = layout.field_count(),
            line_width = layout.line_width(),
            "loaded layout"
        );
        Ok(layout)
    }

    /// Parses a layout from JSON text.
    ///
    /// ```
    /// use fixed_width::layout::LayoutSpec;
    ///
    /// let layout = LayoutSpec::from_json_str(
    ///     r#"{"Offsets": [7, 2], "ColumnNames": ["Field1", "Field2"],
    ///         "FixedWidthEncoding": "windows-1252", "DelimitedEncoding": "utf-8",
    ///         "IncludeHeader": true}"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(layout.field_widths(), &[7, 2]);
    /// assert!(layout.include_header());
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let raw: RawLayout = serde_json::from_str(text)?;

        let field_widths = raw.offsets.ok_or(ConfigError::MissingKey(KEY_OFFSETS))?;
        let column_names = raw.column_names.ok_or(ConfigError::MissingKey(KEY_COLUMN_NAMES))?;
        let input_label =
            raw.fixed_width_encoding.ok_or(ConfigError::MissingKey(KEY_INPUT_ENCODING))?;
        let output_label =
            raw.delimited_encoding.ok_or(ConfigError::MissingKey(KEY_OUTPUT_ENCODING))?;
        let include_header =
            raw.include_header.ok_or(ConfigError::MissingKey(KEY_INCLUDE_HEADER))?;

        let input_encoding = resolve(KEY_INPUT_ENCODING, input_label)?;
        let output_encoding = resolve(KEY_OUTPUT_ENCODING, output_label)?;

        Self::new(field_widths, column_names, input_encoding, output_encoding, include_header)
    }

    /// Width of every field, in layout order.
    #[must_use]
    pub fn field_widths(&self) -> &[usize] {
        &self.field_widths
    }

    /// Name of every column, in layout order.
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Encoding of the fixed-width input.
    #[must_use]
    pub fn input_encoding(&self) -> Charset {
        self.input_encoding
    }

    /// Encoding of the delimited output.
    #[must_use]
    pub fn output_encoding(&self) -> Charset {
        self.output_encoding
    }

    /// Whether the column names are written as the first output row.
    #[must_use]
    pub fn include_header(&self) -> bool {
        self.include_header
    }

    /// Number of fields per record.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.field_widths.len()
    }

    /// Nominal line length: the sum of all widths.
    #[must_use]
    pub fn line_width(&self) -> usize {
        self.field_widths.iter().sum()
    }
}

fn resolve(key: &'static str, label: String) -> Result<Charset, ConfigError> {
    Charset::for_label(&label).ok_or(ConfigError::UnknownEncoding { key, label })
}
