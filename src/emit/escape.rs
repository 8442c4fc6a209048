//! Unicode escaping of generated source.
//!
//! Every UTF-16 code unit is written as a `\uXXXX` escape, so the output is
//! plain ASCII and reads the same under any source encoding the compiler
//! assumes.

use std::fmt::Write as _;
use std::io::{self, Write};

/// Escapes every character of `text` to its `\uXXXX` form.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() * 6);
    for unit in text.encode_utf16() {
        let _ = write!(escaped, "\\u{unit:04X}");
    }
    escaped
}

/// Decodes a fully escaped stream produced by [`escape`].
///
/// Returns `None` if the input contains anything but well-formed escapes.
#[must_use]
pub fn unescape(escaped: &str) -> Option<String> {
    let mut units = Vec::with_capacity(escaped.len() / 6);
    let mut rest = escaped;
    while !rest.is_empty() {
        let hex = rest.strip_prefix("\\u")?.get(..4)?;
        units.push(u16::from_str_radix(hex, 16).ok()?);
        rest = &rest[6..];
    }
    char::decode_utf16(units).collect::<Result<String, _>>().ok()
}

/// A writer that escapes all text passing through it.
pub struct UnicodeEscaper<W: Write> {
    inner: W,
}

impl<W: Write> UnicodeEscaper<W> {
    /// Wraps `inner`.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Escapes and writes `text`.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(escape(text).as_bytes())
    }

    /// Flushes the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
