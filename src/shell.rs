//! # CLI Shell
//!
//! Turns one process invocation into one application call and an exit code.
//!
//! The binary parses its arguments into [`Flags`] and hands them to [`run`]
//! together with an application constructor. `run` builds exactly one handle
//! from `verbose`, calls it exactly once with `input` and `output`, and maps
//! the outcome:
//!
//! - success: [`exit_codes::SUCCESS`], nothing logged
//! - failure: one `Error: <message>` record at `error` level, then
//!   [`exit_codes::ERROR`]
//!
//! There is no retry and no distinction between kinds of failure. Logger setup
//! belongs to the caller (see [`crate::logging`]).

use std::path::PathBuf;

use log::error;

use crate::app::Application;
use crate::exit_codes;

/// The parsed command-line options for a single invocation.
///
/// Paths are carried verbatim; an empty path is a valid value and is passed
/// through to the application unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    pub verbose: bool,
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Build the application with `new_app(flags.verbose)`, run it once, and
/// return the process exit code.
pub fn run<A, F>(flags: &Flags, new_app: F) -> u8
where
    A: Application,
    F: FnOnce(bool) -> A,
{
    let app = new_app(flags.verbose);
    match app.run(&flags.input, &flags.output) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            error!("Error: {:#}", e);
            exit_codes::ERROR
        }
    }
}
