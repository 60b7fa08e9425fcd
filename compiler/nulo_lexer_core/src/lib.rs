//! Standalone scanner for the Nulo language.
//!
//! Turns source text into a flat stream of classified tokens: identifiers,
//! numbers, single-character symbols, keywords, and an end-of-input marker.
//!
//! ```
//! use nulo_lexer_core::{Keyword, SourceBuffer, TokenKind};
//!
//! let buf = SourceBuffer::new("func main() {}");
//! let mut scanner = buf.scanner();
//! let first = scanner.next_token();
//! assert_eq!(first.kind, TokenKind::Keyword(Keyword::Func));
//! assert_eq!(first.text, "func");
//! assert_eq!(first.line, 1);
//! ```
//!
//! The scanner never fails. Tokens borrow their text from the
//! [`SourceBuffer`], which must outlive them.

mod cursor;
pub mod keywords;
mod scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use scanner::{tokenize, Scanner, Tokens};
pub use source_buffer::SourceBuffer;
pub use tag::{Keyword, Token, TokenKind};
