//! Fixed-width to CSV conversion.
//!
//! Runs the two steps of a conversion in sequence: the whole input is
//! parsed into records first, then the records are written out. The output
//! file is only touched once parsing has succeeded.

use std::path::Path;

use tracing::{info, warn};

use crate::{error::Result, layout::LayoutSpec, reader, writer};

/// Outcome of a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Number of data rows written (one per input line).
    pub records: usize,
    /// Whether a header row precedes the data rows.
    pub header_written: bool,
}

/// Converts the fixed-width file at `input` into a CSV file at `output`.
///
/// Failures are logged at `WARN` level and returned to the caller.
pub fn process(
    layout: &LayoutSpec,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<ConvertSummary> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let result = reader::parse_file(input, layout)
        .and_then(|records| writer::write_file(output, &records, layout));

    match result {
        Ok(records) => {
            info!(
                input = %input.display(),
                output = %output.display(),
                records,
                "fixed-width file processing completed"
            );
            Ok(ConvertSummary { records, header_written: layout.include_header() })
        }
        Err(e) => {
            warn!(input = %input.display(), output = %output.display(), "{e}");
            Err(e)
        }
    }
}

/// A loaded layout, reusable across conversions.
///
/// # Example
///
/// ```ignore
/// use fixed_width::convert::Converter;
///
/// let converter = Converter::from_spec_file("data/spec.json")?;
/// let summary = converter.process("data/fixed_width.txt", "data/output.csv")?;
/// println!("{} records", summary.records);
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    layout: LayoutSpec,
}

impl Converter {
    pub fn new(layout: LayoutSpec) -> Self {
        Self { layout }
    }

    /// Loads the layout from a JSON specification file.
    ///
    /// Fails before any input or output file is accessed.
    pub fn from_spec_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(LayoutSpec::load(path)?))
    }

    #[must_use]
    pub fn layout(&self) -> &LayoutSpec {
        &self.layout
    }

    /// See [`process`].
    pub fn process(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<ConvertSummary> {
        process(&self.layout, input, output)
    }
}
