//! Token tags and the token value handed to drivers.

use std::fmt;

/// Reserved word recognized by the scanner.
///
/// The text of each keyword lives in the table in [`crate::keywords`];
/// adding a keyword is a new variant plus one table row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `func`
    Func,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: &'static [Keyword] = &[Keyword::Func];

    /// Source spelling of this keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Func => "func",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a scanned token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Letter or `_` followed by letters, digits, or `_`; not a keyword.
    Identifier,
    /// Run of decimal digits. No sign, decimal point, or exponent.
    Number,
    /// Any other single character.
    Symbol,
    /// Identifier-shaped span that exactly matches the keyword table.
    Keyword(Keyword),
    /// Zero-length marker produced once the source is exhausted.
    EndOfInput,
}

impl TokenKind {
    /// Human-readable name for display and diagnostics.
    #[inline]
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Symbol => "symbol",
            TokenKind::Keyword(_) => "keyword",
            TokenKind::EndOfInput => "end of input",
        }
    }

    /// Returns `true` for the end-of-input marker.
    #[inline]
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, TokenKind::EndOfInput)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified, positioned span of source text.
///
/// `text` borrows from the [`SourceBuffer`](crate::SourceBuffer) the token
/// was scanned from, so the buffer must outlive every token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The lexeme: source text from the token start to the cursor.
    pub text: &'a str,
    /// Line (1-based) on which the token's first character was consumed.
    pub line: u32,
    /// Byte offset of `text` within the source.
    pub offset: u32,
}

impl<'a> Token<'a> {
    #[inline]
    pub fn new(kind: TokenKind, text: &'a str, line: u32, offset: u32) -> Self {
        Token {
            kind,
            text,
            line,
            offset,
        }
    }

    /// Length of the lexeme in bytes.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "lexemes are slices of a source whose length fits in u32"
    )]
    pub fn len(&self) -> u32 {
        self.text.len() as u32
    }

    /// Returns `true` for zero-length tokens (only `EndOfInput`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset one past the end of the lexeme.
    #[inline]
    pub fn end(&self) -> u32 {
        self.offset + self.len()
    }
}
