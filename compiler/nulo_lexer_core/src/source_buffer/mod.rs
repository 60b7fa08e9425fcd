//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the scanner detects end-of-input by looking at the current byte
//! instead of comparing against a length at every step. The total buffer
//! size is rounded up to the next 64-byte boundary.
//!
//! # Interior Null Bytes
//!
//! Source text may legally contain `\0`. Those bytes are content, not
//! end-of-input: the [`Cursor`] compares its position against the source
//! length before treating a zero byte as the sentinel. Drivers that want to
//! warn about them can ask for [`SourceBuffer::interior_nulls`].

use crate::{Cursor, Scanner, Tokens};

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// The buffer is held as a `String`: the sentinel and padding are `'\0'`
/// characters, so every slice taken on a character boundary of the original
/// source is valid UTF-8 without any unchecked conversion.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source..., '\0' sentinel, '\0' padding...]`.
    buf: String,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source code.
    ///
    /// # File Size
    ///
    /// Sources larger than `u32::MAX` bytes are not supported: `source_len`
    /// saturates at `u32::MAX`. The driver (`nuloc`) rejects oversized files
    /// before they reach this point.
    pub fn new(source: &str) -> Self {
        let source_len = source.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = String::with_capacity(padded_len);
        buf.push_str(source);
        buf.extend(std::iter::repeat_n('\0', padded_len - source_len));

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// Returns the source text (without sentinel or padding).
    pub fn as_str(&self) -> &str {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    /// Returns the full buffer including sentinel and padding.
    ///
    /// The byte at index [`len()`](Self::len) is the sentinel (`0x00`).
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Create a [`Scanner`] positioned at byte 0, line 1.
    pub fn scanner(&self) -> Scanner<'_> {
        Scanner::new(self.cursor())
    }

    /// Pull-based token stream over this buffer, ending with `EndOfInput`.
    pub fn tokens(&self) -> Tokens<'_> {
        self.scanner().tokens()
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Number of lines in the source: one more than the number of `\n` bytes.
    ///
    /// Matches the line the scanner reports for its final `EndOfInput` token.
    pub fn line_count(&self) -> usize {
        memchr::memchr_iter(b'\n', self.as_bytes()).count() + 1
    }

    /// Byte positions of null bytes (U+0000) within the source content.
    ///
    /// Uses `memchr` instead of a byte-at-a-time loop.
    pub fn interior_nulls(&self) -> Vec<u32> {
        memchr::memchr_iter(0, self.as_bytes())
            .filter_map(|pos| u32::try_from(pos).ok())
            .collect()
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

#[cfg(test)]
mod tests;
