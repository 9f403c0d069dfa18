//! Driver-level errors: the CLI's own I/O failures, distinct from the L
//! diagnostics [`crate::compile`] returns as data rather than as `Err`
//! (§6a "L-source diagnostics are *not* represented as Rust `Error`
//! values ... because the pipeline's contract is 'collect and report',
//! not 'fail fast'").

use std::path::PathBuf;
use thiserror::Error;

/// Errors the `lcorec` binary can fail with, outside of L's own
/// diagnostic report.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Reading the input source file failed.
    #[error("failed to read '{path}': {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the generated source (or the error log) failed.
    #[error("failed to write '{path}': {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input compiled with diagnostics — the CLI's own signal to
    /// exit non-zero, distinct from an I/O failure. The report itself
    /// has already been written to stdout/stderr by the caller.
    #[error("compilation failed")]
    CompilationFailed,
}
