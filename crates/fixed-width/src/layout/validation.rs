//! Layout validation rules and their errors.

use std::{io, path::PathBuf};

use thiserror::Error;

use super::LayoutSpec;

/// Errors raised while loading a layout specification.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Specification file '{}' not found", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read specification file '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error decoding JSON from the specification: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Missing required key '{0}'")]
    MissingKey(&'static str),
    #[error("Layout has no fields")]
    EmptyLayout,
    #[error("Field #{index} has zero width")]
    ZeroWidth { index: usize },
    #[error("Layout has {widths} field widths but {columns} column names")]
    ColumnCountMismatch { widths: usize, columns: usize },
    #[error("Unknown encoding '{label}' for {key}")]
    UnknownEncoding { key: &'static str, label: String },
    #[error("Encoding '{0}' cannot be used for output")]
    UnsupportedOutputEncoding(String),
}

impl LayoutSpec {
    /// Checks the structural rules of a layout.
    ///
    /// # Rules
    ///
    /// - at least one field
    /// - every width is positive
    /// - one column name per width
    /// - the output encoding supports writing
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.field_widths.is_empty() {
            return Err(ConfigError::EmptyLayout);
        }

        if let Some(index) = self.field_widths.iter().position(|&w| w == 0) {
            return Err(ConfigError::ZeroWidth { index });
        }

        if self.field_widths.len() != self.column_names.len() {
            return Err(ConfigError::ColumnCountMismatch {
                widths: self.field_widths.len(),
                columns: self.column_names.len(),
            });
        }

        if !self.output_encoding.can_encode() {
            return Err(ConfigError::UnsupportedOutputEncoding(
                self.output_encoding.name().to_string(),
            ));
        }

        Ok(())
    }
}
