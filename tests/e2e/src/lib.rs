//! # e2e-tests - end-to-end tests of the `fw2csv` CLI
//!
//! ## Fixtures
//!
//! Test files live in `fixtures/`:
//! - `spec.json` — six-field layout, windows-1252 input, UTF-8 output
//! - `records_cp1252.txt` — fixed-width input with CRLF line endings and a blank line
//! - `records_expected.csv` — expected conversion of `records_cp1252.txt`
//! - `spec_header_string.json` — layout with `"IncludeHeader": "True"`

use std::{fs, io, path::Path, path::PathBuf};

use anyhow::{Context, Result};

/// Path of the fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Path of a fixture by file name.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Builds line `index` of a sample file.
///
/// Every field is filled with one repeated letter: `A` for line 0,
/// `B` for line 1, wrapping after `Z`.
pub fn sample_line(widths: &[usize], index: usize) -> String {
    let letter = char::from(b'A' + (index % 26) as u8);
    widths.iter().map(|&w| letter.to_string().repeat(w)).collect()
}

/// Writes `count` sample lines to `path`, each terminated by `\n`.
pub fn write_sample_file(path: &Path, widths: &[usize], count: usize) -> io::Result<()> {
    let content: String = (0..count).map(|i| sample_line(widths, i) + "\n").collect();
    fs::write(path, content)
}

/// Writes a layout specification with the given widths and column names.
pub fn write_spec(path: &Path, widths: &[usize], names: &[&str], include_header: bool) -> Result<()> {
    let widths: Vec<String> = widths.iter().map(ToString::to_string).collect();
    let names: Vec<String> = names.iter().map(|n| format!("\"{n}\"")).collect();
    let spec = format!(
        r#"{{
    "ColumnNames": [{}],
    "Offsets": [{}],
    "FixedWidthEncoding": "windows-1252",
    "IncludeHeader": {include_header},
    "DelimitedEncoding": "utf-8"
}}
"#,
        names.join(", "),
        widths.join(", "),
    );
    fs::write(path, spec).with_context(|| format!("write spec {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_lines_cycle_letters() {
        assert_eq!(sample_line(&[7, 2], 0), "AAAAAAAAA");
        assert_eq!(sample_line(&[1, 2], 1), "BBB");
        assert_eq!(sample_line(&[1], 26), "A");
    }

    #[test]
    fn fixtures_exist() {
        for name in ["spec.json", "records_cp1252.txt", "records_expected.csv"] {
            assert!(fixture(name).is_file(), "missing fixture {name}");
        }
    }
}
