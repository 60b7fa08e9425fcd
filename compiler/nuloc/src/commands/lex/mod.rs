//! `lex` command: scan a file and display its token stream.

use std::path::PathBuf;

use nulo_lexer_core::{tokenize, SourceBuffer, Token};
use tracing::warn;

use super::read_source;
use crate::error::{CliError, ReadError};

/// Options for `nulo lex <file> [--offsets]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOptions {
    /// Source file to scan.
    pub path: PathBuf,
    /// Append each token's byte offset to its line.
    pub show_offsets: bool,
}

impl LexOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LexOptions {
            path: path.into(),
            show_offsets: false,
        }
    }

    /// Parse the arguments following `lex`.
    ///
    /// Flags may appear before or after the path.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut path = None;
        let mut show_offsets = false;

        for arg in args {
            if arg == "--offsets" {
                show_offsets = true;
            } else if arg.starts_with('-') {
                return Err(CliError::UnknownOption(arg.clone()));
            } else if path.is_none() {
                path = Some(PathBuf::from(arg));
            } else {
                return Err(CliError::UnexpectedArgument(arg.clone()));
            }
        }

        let path = path.ok_or(CliError::MissingPath)?;
        Ok(LexOptions { path, show_offsets })
    }
}

/// Read, scan, and render the file named by `options`.
pub fn lex_file(options: &LexOptions) -> Result<String, ReadError> {
    let source = read_source(&options.path)?;
    let name = options.path.display().to_string();
    Ok(lex_source(&name, &source, options.show_offsets))
}

/// Scan `source` and render a header plus one line per token.
#[tracing::instrument(level = "debug", skip_all, fields(name = %name, len = source.len()))]
pub fn lex_source(name: &str, source: &str, show_offsets: bool) -> String {
    let buf = SourceBuffer::new(source);

    let nulls = buf.interior_nulls();
    if let Some(first) = nulls.first() {
        warn!(
            count = nulls.len(),
            first = *first,
            "source contains null bytes; scanning them as symbols"
        );
    }

    let tokens = tokenize(&buf);
    let mut out = format!("Tokens for '{name}' ({} tokens):\n", tokens.len());
    out.push_str(&render_tokens(&tokens, show_offsets));
    out.push('\n');
    out
}

/// Render tokens one per line: line number, kind, and lexeme.
///
/// The lexeme is omitted for `EndOfInput`. Lines are joined with `\n`
/// without a trailing newline.
pub fn render_tokens(tokens: &[Token<'_>], show_offsets: bool) -> String {
    tokens
        .iter()
        .map(|tok| render_token(tok, show_offsets))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_token(tok: &Token<'_>, show_offsets: bool) -> String {
    let text = if tok.kind.is_end_of_input() {
        String::new()
    } else {
        format!(" {:?}", tok.text)
    };
    let offset = if show_offsets {
        format!(" @{}", tok.offset)
    } else {
        String::new()
    };
    format!(
        "  {:>4}  {:<12}{text}{offset}",
        tok.line,
        tok.kind.display_name()
    )
}
