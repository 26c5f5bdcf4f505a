//! Shared test utilities for E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_file("a.txt", "hello");
//!     fixture.command().arg("-input=a.txt").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    pub use super::TestFixture;
}

/// Environment variables the binary reads. They are cleared on every command
/// so the developer's shell cannot leak into a test.
pub const ENV_VARS: [&str; 5] = [
    "FORTMATIC_AUTH_VERBOSE",
    "FORTMATIC_AUTH_INPUT",
    "FORTMATIC_AUTH_OUTPUT",
    "FORTMATIC_AUTH_LOG",
    "FORTMATIC_AUTH_LOG_STYLE",
];

/// A test fixture that provides a temporary working directory.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new().with_file("a.txt", "hello world");
///
/// fixture.command()
///     .args(["-input=a.txt", "-output=b.txt"])
///     .assert()
///     .success();
/// fixture.child("b.txt").assert("hello world");
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add a binary file with the given path and content.
    #[allow(dead_code)]
    pub fn with_binary_file(self, path: &str, content: &[u8]) -> Self {
        self.temp_dir
            .child(path)
            .write_binary(content)
            .expect("Failed to write binary file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory with a
    /// clean environment.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("fortmatic-auth");
        cmd.current_dir(self.path());
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
