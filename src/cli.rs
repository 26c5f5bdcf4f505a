//! CLI argument parsing

use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

use fortmatic_auth::shell::Flags;

/// Long flags that may also be spelled with a single dash (`-verbose`,
/// `-input=a.txt`), as the Go `flag` package accepts them.
const SINGLE_DASH_FLAGS: &[&str] = &["verbose", "input", "output", "help", "version"];

/// Run the fortmatic-auth application on an input and output path
#[derive(Parser, Debug)]
#[command(name = "fortmatic-auth")]
#[command(version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(
        long,
        env = "FORTMATIC_AUTH_VERBOSE",
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    verbose: bool,

    /// Input file path
    #[arg(long, value_name = "FILE", env = "FORTMATIC_AUTH_INPUT")]
    input: Option<OsString>,

    /// Output file path
    #[arg(long, value_name = "FILE", env = "FORTMATIC_AUTH_OUTPUT")]
    output: Option<OsString>,

    /// Arguments left over after the first non-flag; accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, value_name = "ARGS")]
    rest: Vec<OsString>,
}

impl Cli {
    /// Positional arguments that were accepted but are not used.
    pub fn ignored_args(&self) -> &[OsString] {
        &self.rest
    }

    /// Convert the parsed arguments into the flag set handed to the shell.
    /// Omitted paths become empty paths.
    pub fn into_flags(self) -> Flags {
        Flags {
            verbose: self.verbose,
            input: self.input.map(PathBuf::from).unwrap_or_default(),
            output: self.output.map(PathBuf::from).unwrap_or_default(),
        }
    }
}

/// Rewrite Go-style single-dash long flags to the double-dash form clap
/// expects. Anything after a bare `--` is left untouched, as are single-dash
/// arguments that do not name a known flag.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut terminated = false;

    for arg in args {
        let arg: OsString = arg.into();
        if !terminated {
            if arg == "--" {
                terminated = true;
            } else if let Some(promoted) = arg.to_str().and_then(promote_single_dash) {
                normalized.push(OsString::from(promoted));
                continue;
            }
        }
        normalized.push(arg);
    }

    normalized
}

fn promote_single_dash(arg: &str) -> Option<String> {
    let rest = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_FLAGS
        .contains(&name)
        .then(|| format!("-{}", arg))
}
