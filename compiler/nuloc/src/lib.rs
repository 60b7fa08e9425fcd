//! Nulo toolchain driver.
//!
//! Thin I/O glue around `nulo_lexer_core`: reading source files, parsing
//! command-line options, rendering token streams, and logging setup.

pub mod commands;
pub mod error;
mod tracing_setup;

pub use error::{CliError, DriverError, ReadError};
pub use tracing_setup::init_tracing;
