//! Driver errors.
//!
//! The scanner itself cannot fail; everything here belongs to the I/O and
//! argument-handling glue around it.

use std::path::PathBuf;

/// Failure to load a source file into memory.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied reading '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("'{}' contains invalid UTF-8 data", path.display())]
    InvalidUtf8 { path: PathBuf },

    /// Sources are addressed with `u32` offsets.
    #[error("'{}' is too large to scan ({len} bytes, limit {} bytes)", path.display(), u32::MAX)]
    TooLarge { path: PathBuf, len: usize },

    #[error("error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReadError {
    /// Classify an I/O error from reading `path`.
    #[cold]
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => ReadError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => ReadError::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => ReadError::InvalidUtf8 { path },
            _ => ReadError::Io { path, source },
        }
    }
}

/// Invalid command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    #[error("missing file path")]
    MissingPath,

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// Any failure of a driver command.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Cli(#[from] CliError),

    #[error(transparent)]
    Read(#[from] ReadError),
}
