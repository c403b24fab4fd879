//! Character encodings for the fixed-width input and the delimited output.
//!
//! Labels are resolved with the WHATWG rules implemented by `encoding_rs`, so
//! `windows-1252`, `cp1252`, `latin1`, `utf-8` and `utf8` are all accepted.
//! Decoding and encoding are strict: malformed input and unmappable output
//! characters are reported as [`io::ErrorKind::InvalidData`]. For
//! windows-1252 that includes the five bytes the code page leaves undefined.

use std::{borrow::Cow, fmt, io};

use encoding_rs::Encoding;

/// Bytes with no character in the Windows code page 1252 table.
const WINDOWS_1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// A resolved character encoding.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Charset(&'static Encoding);

impl Charset {
    /// UTF-8.
    pub const UTF_8: Self = Self(&encoding_rs::UTF_8_INIT);

    /// Windows code page 1252 (also the target of `latin1` / `iso-8859-1`).
    pub const WINDOWS_1252: Self = Self(&encoding_rs::WINDOWS_1252_INIT);

    /// Resolves an encoding label, ignoring case and surrounding whitespace.
    ///
    /// ```
    /// use fixed_width::charset::Charset;
    ///
    /// assert_eq!(Charset::for_label("Windows-1252"), Some(Charset::WINDOWS_1252));
    /// assert_eq!(Charset::for_label("utf8"), Some(Charset::UTF_8));
    /// assert_eq!(Charset::for_label("klingon"), None);
    /// ```
    #[must_use]
    pub fn for_label(label: &str) -> Option<Self> {
        Encoding::for_label(label.trim().as_bytes()).map(Self)
    }

    /// Canonical name of the encoding.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Whether text can be written in this encoding.
    ///
    /// UTF-16 and `replacement` can only be decoded.
    #[must_use]
    pub fn can_encode(&self) -> bool {
        self.0.output_encoding() == self.0
    }

    /// Decodes `bytes` without BOM sniffing and without replacement characters.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> io::Result<Cow<'a, str>> {
        if *self == Self::WINDOWS_1252 {
            if let Some(offset) = bytes.iter().position(|b| WINDOWS_1252_UNDEFINED.contains(b)) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "byte 0x{:02X} at offset {offset} is undefined in {}",
                        bytes[offset],
                        self.name()
                    ),
                ));
            }
        }
        self.0.decode_without_bom_handling_and_without_replacement(bytes).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("stream is not valid {}", self.name()),
            )
        })
    }

    /// Encodes `text`, failing if a character has no mapping in this encoding.
    pub fn encode<'a>(&self, text: &'a str) -> io::Result<Cow<'a, [u8]>> {
        let (bytes, _, had_errors) = self.0.encode(text);
        if had_errors {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("text cannot be represented in {}", self.name()),
            ));
        }
        Ok(bytes)
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::UTF_8
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Charset").field(&self.name()).finish()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
