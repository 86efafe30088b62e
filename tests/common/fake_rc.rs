//! A fake `rc` executable for exercising the daemon client without a
//! live rtags daemon.
//!
//! Each helper writes a small shell script into a temp directory and
//! points the client at it, so the full spawn/timeout/exit-code path is
//! covered by real process execution.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::time::Duration;

use tempfile::TempDir;

use rtags_bridge::rtags::RtagsClient;

/// A canned `rc` double living in a temp directory.
pub struct FakeRc {
    dir: TempDir,
}

impl FakeRc {
    /// Creates a fake rc from a raw shell script body.
    pub fn from_script(body: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let script_path = dir.path().join("rc");
        fs::write(&script_path, format!("#!/bin/sh\n{body}\n")).expect("failed to write script");

        let mut perms = fs::metadata(&script_path)
            .expect("failed to stat script")
            .permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script_path, perms).expect("failed to chmod script");

        Self { dir }
    }

    /// A fake rc that prints `stdout` and exits 0, regardless of the
    /// query it receives.
    pub fn with_output(stdout: &str) -> Self {
        let fake = Self::from_script(r#"cat "$(dirname "$0")/stdout""#);
        fs::write(fake.dir.path().join("stdout"), stdout).expect("failed to write stdout file");
        fake
    }

    /// A fake rc that prints nothing and exits 0 ("nothing found").
    pub fn empty() -> Self {
        Self::from_script("exit 0")
    }

    /// A fake rc that fails with the given exit code and stderr text.
    pub fn failing(code: i32, stderr: &str) -> Self {
        Self::from_script(&format!("echo '{stderr}' >&2\nexit {code}"))
    }

    /// A fake rc that sleeps longer than any reasonable test timeout.
    pub fn hanging() -> Self {
        Self::from_script("sleep 30")
    }

    /// A fake rc that echoes its arguments to stdout, for asserting on
    /// the exact query the client built.
    pub fn echoing_args() -> Self {
        Self::from_script(r#"echo "$@""#)
    }

    /// Path to the fake rc executable.
    pub fn command(&self) -> String {
        self.dir.path().join("rc").display().to_string()
    }

    /// Builds a client pointed at this fake rc.
    pub fn client(&self) -> RtagsClient {
        RtagsClient::builder().rc_command(self.command()).build()
    }

    /// Builds a client pointed at this fake rc with a short timeout.
    pub fn client_with_timeout(&self, timeout: Duration) -> RtagsClient {
        RtagsClient::builder()
            .rc_command(self.command())
            .request_timeout(timeout)
            .build()
    }
}
