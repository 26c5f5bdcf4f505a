//! # Application Handle
//!
//! The shell knows the application only through the [`Application`] trait: one
//! handle is built from the `verbose` flag and its `run` operation is called
//! once with the input and output paths.
//!
//! [`App`] is the implementation the binary links by default. It copies the
//! bytes of `input` to `output` unchanged:
//!
//! - an empty `input` path reads standard input
//! - an empty `output` path writes standard output
//! - an existing output file is truncated
//!
//! Any other collaborator can be used instead by implementing [`Application`]
//! and handing its constructor to [`shell::run`](crate::shell::run).

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use log::{log, Level};

use crate::error::{Error, Result};

/// The single capability the shell needs from an application.
pub trait Application {
    /// Process `input` into `output`.
    ///
    /// Paths are passed exactly as given on the command line, including
    /// empty ones.
    fn run(&self, input: &Path, output: &Path) -> anyhow::Result<()>;
}

/// Pass-through application: writes the input bytes to the output unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct App {
    verbose: bool,
}

impl App {
    /// Create a handle. `verbose` promotes progress messages from `debug`
    /// to `info`.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn progress_level(&self) -> Level {
        if self.verbose {
            Level::Info
        } else {
            Level::Debug
        }
    }

    /// Copy `input` to `output`, returning the number of bytes written.
    pub fn copy(&self, input: &Path, output: &Path) -> Result<usize> {
        let level = self.progress_level();

        log!(level, "Reading input from {}", describe(input, "stdin"));
        let data = read_input(input)?;

        log!(level, "Writing {} bytes to {}", data.len(), describe(output, "stdout"));
        write_output(output, &data)?;

        Ok(data.len())
    }
}

impl Application for App {
    fn run(&self, input: &Path, output: &Path) -> anyhow::Result<()> {
        self.copy(input, output)?;
        Ok(())
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    let read = if path.as_os_str().is_empty() {
        let mut data = Vec::new();
        io::stdin().lock().read_to_end(&mut data).map(|_| data)
    } else {
        fs::read(path)
    };
    read.map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    let written = if path.as_os_str().is_empty() {
        let mut stdout = io::stdout().lock();
        stdout.write_all(data).and_then(|()| stdout.flush())
    } else {
        fs::write(path, data)
    };
    written.map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

fn describe(path: &Path, stream: &str) -> String {
    if path.as_os_str().is_empty() {
        stream.to_string()
    } else {
        path.display().to_string()
    }
}
