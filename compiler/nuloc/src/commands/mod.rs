//! Command handlers for the `nulo` CLI.
//!
//! Each submodule implements a CLI command. Shared utilities like
//! `read_source` live here in the module root.

use std::path::Path;

use crate::error::ReadError;

mod lex;

pub use lex::{lex_file, lex_source, render_tokens, LexOptions};

/// Read a source file into memory.
///
/// Maps I/O failures onto user-facing [`ReadError`] messages and rejects
/// files too large for the scanner's `u32` offsets.
pub fn read_source(path: &Path) -> Result<String, ReadError> {
    let content = std::fs::read_to_string(path).map_err(|e| ReadError::from_io(path, e))?;
    if u32::try_from(content.len()).is_err() {
        return Err(ReadError::TooLarge {
            path: path.to_path_buf(),
            len: content.len(),
        });
    }
    Ok(content)
}
