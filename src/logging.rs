//! # Logging Setup
//!
//! Installs `env_logger` as the `log` backend for the binary. Records go to
//! stderr.
//!
//! The filter defaults to `warn`, or `info` when `--verbose` is given. It can
//! be overridden with `FORTMATIC_AUTH_LOG` using the usual `env_logger`
//! directive syntax (e.g. `FORTMATIC_AUTH_LOG=debug`), and colors with
//! `FORTMATIC_AUTH_LOG_STYLE`.
//!
//! Error records are printed as the bare message, so a failed run ends with a
//! single `Error: <message>` line. Everything else is prefixed with its level
//! and target.
//!
//! The shell's error records are always enabled: a `FORTMATIC_AUTH_LOG`
//! directive can narrow or silence everything else, but not the failure line.

use std::io::{self, Write};

use env_logger::fmt::Formatter;
use env_logger::{Builder, Env, Target};
use log::{Level, LevelFilter, Record};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "FORTMATIC_AUTH_LOG";

/// Environment variable holding the log color style.
pub const LOG_STYLE_ENV: &str = "FORTMATIC_AUTH_LOG_STYLE";

/// Module whose error records bypass the user filter.
const SHELL_MODULE: &str = "fortmatic_auth::shell";

/// Default filter directive for the given verbosity.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "info"
    } else {
        "warn"
    }
}

/// Install the global logger. Calling this more than once is harmless; later
/// calls are ignored.
pub fn init(verbose: bool) {
    let env = Env::new()
        .filter_or(LOG_ENV, default_filter(verbose))
        .write_style(LOG_STYLE_ENV);

    let _ = Builder::from_env(env)
        .filter_module(SHELL_MODULE, LevelFilter::Error)
        .target(Target::Stderr)
        .format(format_record)
        .try_init();
}

fn format_record(buf: &mut Formatter, record: &Record<'_>) -> io::Result<()> {
    match record.level() {
        Level::Error => writeln!(buf, "{}", record.args()),
        level => writeln!(buf, "[{} {}] {}", level, record.target(), record.args()),
    }
}
