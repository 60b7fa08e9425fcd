//! Hand-written scanner producing one [`Token`] per call.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and never
//! allocates. Every byte is classifiable, so there is no error path: a call
//! to [`Scanner::next_token`] always yields a token.
//!
//! # Design
//!
//! Whitespace is skipped before each token and drives the line counter.
//! Dispatch looks at the lead byte only. Identifiers and numbers consume a
//! maximal run (maximal munch); keywords are resolved on the finished
//! identifier span. Everything else is a single-character symbol.

use tracing::trace;

use crate::cursor::Cursor;
use crate::keywords;
use crate::tag::{Token, TokenKind};

/// Scanner state: the cursor triple `token_start`, `current`, `line`.
///
/// `current` is the position of the wrapped [`Cursor`]. The state only moves
/// forward; a fresh scan needs a fresh `Scanner` over the same buffer.
#[derive(Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Byte offset where the token being scanned began.
    token_start: u32,
    /// 1-based line of `current`.
    line: u32,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner from a cursor, on line 1.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            token_start: cursor.pos(),
            cursor,
            line: 1,
        }
    }

    /// Produce the next token.
    ///
    /// Returns `EndOfInput` with empty text when the source is exhausted.
    /// Subsequent calls after that continue to return `EndOfInput`.
    #[inline]
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();
        self.token_start = self.cursor.pos();

        if self.cursor.is_eof() {
            return self.end_of_input();
        }

        let kind = match self.cursor.current() {
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(),
            b'0'..=b'9' => self.number(),
            _ => self.symbol(),
        };
        self.make_token(kind)
    }

    /// Consume the scanner into a token stream that ends with `EndOfInput`.
    pub fn tokens(self) -> Tokens<'a> {
        Tokens {
            scanner: self,
            finished: false,
        }
    }

    /// Current 1-based line number.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Start offset of the most recently scanned token.
    #[inline]
    pub fn token_start(&self) -> u32 {
        self.token_start
    }

    /// Offset of the next unconsumed byte.
    #[inline]
    pub fn current(&self) -> u32 {
        self.cursor.pos()
    }

    /// Returns `true` once only whitespace (or nothing) remains.
    ///
    /// Does not consume anything; the next call to
    /// [`next_token`](Self::next_token) returns `EndOfInput` exactly when
    /// this is `true`.
    pub fn is_at_end(&self) -> bool {
        let mut probe = self.cursor;
        probe.eat_while(is_whitespace);
        probe.is_eof()
    }

    // ─── Whitespace ───────────────────────────────────────────────

    /// Skip spaces, tabs, carriage returns, and line feeds.
    ///
    /// Only `\n` advances the line counter; a lone `\r` is plain whitespace.
    /// The sentinel stops the loop.
    #[inline]
    fn skip_whitespace(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' | b'\r' | b'\t' => self.cursor.advance(),
                b'\n' => {
                    self.line += 1;
                    self.cursor.advance();
                }
                _ => break,
            }
        }
    }

    // ─── EOF ──────────────────────────────────────────────────────

    fn end_of_input(&self) -> Token<'a> {
        trace!(line = self.line, offset = self.token_start, "end of input");
        Token::new(TokenKind::EndOfInput, "", self.line, self.token_start)
    }

    // ─── Identifiers & Keywords ───────────────────────────────────

    #[inline]
    fn identifier(&mut self) -> TokenKind {
        self.cursor.advance(); // consume first char (already validated)
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(self.token_start);
        keywords::lookup(text).map_or(TokenKind::Identifier, TokenKind::Keyword)
    }

    // ─── Numbers ──────────────────────────────────────────────────

    fn number(&mut self) -> TokenKind {
        self.cursor.advance();
        self.cursor.eat_while(|b| b.is_ascii_digit());
        TokenKind::Number
    }

    // ─── Symbols ──────────────────────────────────────────────────

    /// One character, whatever it is. Non-ASCII characters are consumed
    /// whole so the lexeme stays valid UTF-8.
    fn symbol(&mut self) -> TokenKind {
        self.cursor.advance_char();
        TokenKind::Symbol
    }

    fn make_token(&self, kind: TokenKind) -> Token<'a> {
        let token = Token::new(
            kind,
            self.cursor.slice_from(self.token_start),
            self.line,
            self.token_start,
        );
        trace!(
            kind = %token.kind.display_name(),
            line = token.line,
            offset = token.offset,
            len = token.len(),
            "token"
        );
        token
    }
}

/// Pull-based token stream over a [`Scanner`].
///
/// Yields every token up to and including the first `EndOfInput`, then
/// returns `None` forever.
#[derive(Debug)]
pub struct Tokens<'a> {
    scanner: Scanner<'a>,
    finished: bool,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.finished {
            return None;
        }
        let tok = self.scanner.next_token();
        self.finished = tok.kind.is_end_of_input();
        Some(tok)
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
/// The sentinel byte (0x00) maps to `false`, naturally terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is a valid identifier continuation byte.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Returns `true` for bytes skipped between tokens.
#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\r' | b'\t' | b'\n')
}

/// Convenience function: scan a buffer and collect every token.
///
/// The returned `Vec` always ends with exactly one `EndOfInput` token.
/// For streaming access, use [`SourceBuffer::tokens`](crate::SourceBuffer::tokens).
pub fn tokenize(buf: &crate::SourceBuffer) -> Vec<Token<'_>> {
    let tokens: Vec<Token<'_>> = buf.tokens().collect();
    tracing::debug!(
        count = tokens.len(),
        source_len = buf.len(),
        "tokenized source"
    );
    tokens
}
