//! Error types for loading layouts and converting files.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::layout::ConfigError;

/// Coarse classification of an [`Error`].
///
/// Lets callers react to the failure category without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad or missing layout specification.
    Configuration,
    /// The fixed-width input does not exist.
    NotFound,
    /// Read or write failure, including encoding mismatches.
    Io,
}

/// Main error of the conversion pipeline.
#[derive(Debug, Error)]
pub enum Error {
    // === Layout ===
    /// The layout specification could not be loaded.
    #[error("Invalid layout specification: {0}")]
    Configuration(#[from] ConfigError),

    // === Input ===
    /// The fixed-width input file does not exist.
    #[error("Fixed-width file '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// Reading or decoding the input failed.
    #[error("Failed to read from '{}': {source}", path.display())]
    Read {
        /// Input path.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: io::Error,
    },

    // === Output ===
    /// Opening, encoding or writing the output failed.
    #[error("Failed to write to '{}': {source}", path.display())]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Returns the category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Read { .. } | Self::Write { .. } => ErrorKind::Io,
        }
    }
}

/// Shorthand Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
