//! # fortmatic-auth CLI
//!
//! This is the binary entry point for the `fortmatic-auth` command-line tool.
//!
//! Its responsibilities are:
//! - Parsing command-line arguments using `clap` (Go-style `-flag` spelling
//!   included).
//! - Installing the logger.
//! - Handing the parsed flags to the shell, which runs the application once
//!   and decides the exit code.
//!
//! The behavior lives in the `fortmatic_auth` library crate; the binary is a
//! thin wrapper around it.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use log::debug;

use fortmatic_auth::app::App;
use fortmatic_auth::{logging, shell};

fn main() -> ExitCode {
    let cli = cli::Cli::parse_from(cli::normalize_args(std::env::args_os()));
    let ignored = cli.ignored_args().len();
    let flags = cli.into_flags();

    logging::init(flags.verbose);
    if ignored > 0 {
        debug!("Ignoring {} positional argument(s)", ignored);
    }

    ExitCode::from(shell::run(&flags, App::new))
}
