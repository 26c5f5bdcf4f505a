//! # Error Handling
//!
//! Errors raised by the built-in [`App`](crate::app::App). They are defined
//! with `thiserror`; every variant names the path involved so the single
//! `Error: ...` line printed by the shell is enough to diagnose the failure.
//!
//! The underlying I/O error is kept as the `source` rather than repeated in
//! the message; the shell prints the whole chain with `{:#}`.
//!
//! The shell itself does not inspect these variants. It receives them through
//! the [`Application`](crate::app::Application) seam as an opaque
//! `anyhow::Error`.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for fortmatic-auth operations
#[derive(Error, Debug)]
pub enum Error {
    /// The input could not be read.
    #[error("failed to read input {}", display_path(path, "<stdin>"))]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output could not be written.
    #[error("failed to write output {}", display_path(path, "<stdout>"))]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

fn display_path(path: &std::path::Path, stream: &str) -> String {
    if path.as_os_str().is_empty() {
        stream.to_string()
    } else {
        format!("'{}'", path.display())
    }
}
