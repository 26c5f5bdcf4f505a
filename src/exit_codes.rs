//! Process exit codes returned by the `fortmatic-auth` binary.
//!
//! - `0`: the application ran successfully
//! - `1`: the application returned an error
//! - `2`: invalid command-line usage (reported by clap before anything runs)

/// Successful termination
pub const SUCCESS: u8 = 0;

/// The application returned an error
pub const ERROR: u8 = 1;

/// Command line usage error
pub const USAGE: u8 = 2;
