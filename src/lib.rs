//! # fortmatic-auth Library
//!
//! This library holds everything the `fortmatic-auth` binary does besides
//! argument parsing. The binary is a thin shell: it parses three flags,
//! constructs one application handle, runs it once, and maps the outcome to a
//! process exit code.
//!
//! ## Quick Example
//!
//! ```
//! use fortmatic_auth::app::App;
//! use fortmatic_auth::exit_codes;
//! use fortmatic_auth::shell::{self, Flags};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let input = dir.path().join("in.txt");
//! let output = dir.path().join("out.txt");
//! std::fs::write(&input, "payload").unwrap();
//!
//! let flags = Flags {
//!     verbose: false,
//!     input: input.clone(),
//!     output: output.clone(),
//! };
//! assert_eq!(shell::run(&flags, App::new), exit_codes::SUCCESS);
//! assert_eq!(std::fs::read_to_string(&output).unwrap(), "payload");
//! ```
//!
//! ## Core Concepts
//!
//! - **Shell (`shell`)**: the `Flags` handed over by the CLI and the `run`
//!   function that drives one application invocation.
//! - **Application (`app`)**: the `Application` trait the shell calls, and the
//!   built-in `App` pass-through implementation.
//! - **Errors (`error`, `exit_codes`)**: the library error type and the exit
//!   codes the binary returns.
//! - **Logging (`logging`)**: `env_logger` setup for the binary.

pub mod app;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod shell;
