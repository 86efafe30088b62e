//! rtags daemon client implementation.
//!
//! Each query spawns one short-lived `rc` process, waits for it under the
//! configured request timeout, and maps the three possible outcomes:
//! structured output on success, empty output for "nothing found", and a
//! typed [`RtagsError`] for every transport failure (spawn error, timeout,
//! non-zero exit, unparseable output).
//!
//! # Example
//!
//! ```ignore
//! use rtags_bridge::rtags::{Position, RtagsClient};
//!
//! let client = RtagsClient::builder().rc_command("rc").build();
//! let pos = Position::new("/src/main.cpp", 12, 5);
//! let references = client.find_references(&pos).await?;
//! ```

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tracing::debug;

use crate::error::RtagsError;

use super::RtagsResult;
use super::types::{Location, Position, parse_location_lines};

/// Configuration for building an rtags client.
#[derive(Debug, Clone)]
pub struct RtagsClientConfig {
    /// Command used to invoke the rtags query client.
    pub rc_command: String,
    /// Extra arguments prepended to every query (e.g. `--socket-file`).
    pub rc_args: Vec<String>,
    /// Timeout applied to each query.
    pub request_timeout: Duration,
}

impl Default for RtagsClientConfig {
    fn default() -> Self {
        Self {
            rc_command: "rc".to_string(),
            rc_args: Vec::new(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Builder for constructing an rtags client.
#[derive(Debug, Default)]
pub struct RtagsClientBuilder {
    config: RtagsClientConfig,
}

impl RtagsClientBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rc command.
    #[must_use]
    pub fn rc_command(mut self, command: impl Into<String>) -> Self {
        self.config.rc_command = command.into();
        self
    }

    /// Sets extra arguments prepended to every query.
    #[must_use]
    pub fn rc_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.config.rc_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the per-query timeout.
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Builds the rtags client.
    ///
    /// No process is spawned here; queries spawn `rc` on demand.
    pub fn build(self) -> RtagsClient {
        RtagsClient {
            config: self.config,
        }
    }
}

/// Client for the rtags daemon's query interface.
///
/// One method per query kind. Location-shaped queries return parsed
/// [`Location`] lists; informational queries return the daemon's text
/// unchanged, with the empty string meaning "nothing found".
#[derive(Debug)]
pub struct RtagsClient {
    config: RtagsClientConfig,
}

impl RtagsClient {
    /// Creates a new builder for constructing an rtags client.
    pub fn builder() -> RtagsClientBuilder {
        RtagsClientBuilder::new()
    }

    /// Creates a client from an existing configuration.
    pub fn from_config(config: RtagsClientConfig) -> Self {
        Self { config }
    }

    /// Finds all references to the symbol at the given position.
    /// ## Errors
    pub async fn find_references(&self, pos: &Position) -> RtagsResult<Vec<Location>> {
        let output = self.run(&["--references", &pos.to_string()]).await?;
        parse_location_lines(&output)
    }

    /// Finds virtual overrides of the function at the given position.
    /// ## Errors
    pub async fn find_virtuals(&self, pos: &Position) -> RtagsResult<Vec<Location>> {
        let output = self
            .run(&["--references", &pos.to_string(), "--find-virtuals"])
            .await?;
        parse_location_lines(&output)
    }

    /// Resolves the location the symbol at the given position points at.
    ///
    /// Zero results means the daemon knows nothing about the position;
    /// more than one means the target is ambiguous and the caller should
    /// present a list instead of jumping.
    /// ## Errors
    pub async fn follow_location(&self, pos: &Position) -> RtagsResult<Vec<Location>> {
        let output = self.run(&["--follow-location", &pos.to_string()]).await?;
        parse_location_lines(&output)
    }

    /// Gets the daemon's textual description of the symbol at the given
    /// position, one line per item.
    /// ## Errors
    pub async fn symbol_info(&self, pos: &Position) -> RtagsResult<Vec<String>> {
        let output = self.run(&["--symbol-info", &pos.to_string()]).await?;
        Ok(output
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Gets the preprocessed source of the given file.
    /// ## Errors
    pub async fn preprocess_file(&self, path: &Path) -> RtagsResult<String> {
        self.run(&["--preprocess", &path.display().to_string()])
            .await
    }

    /// Asks the daemon for the include line that would provide `symbol`
    /// to the given file.
    ///
    /// An empty string means the daemon found no suitable include; that
    /// is a valid answer, not a failure.
    /// ## Errors
    pub async fn include_file(&self, path: &Path, symbol: &str) -> RtagsResult<String> {
        let output = self
            .run(&[
                "--current-file",
                &path.display().to_string(),
                "--include-file",
                symbol,
            ])
            .await?;
        Ok(output.trim().to_string())
    }

    /// Dumps the class hierarchy around the symbol at the given position.
    ///
    /// An empty string means the daemon found no hierarchy there.
    /// ## Errors
    pub async fn class_hierarchy(&self, pos: &Position) -> RtagsResult<String> {
        let output = self.run(&["--class-hierarchy", &pos.to_string()]).await?;
        Ok(output.trim_end().to_string())
    }

    /// Queries file dependencies for the given path.
    ///
    /// `filter` selects the relation kind; the empty string asks for the
    /// daemon's default relation. The string is passed through unmodified
    /// and unvalidated: a keyword the daemon rejects surfaces as a
    /// [`RtagsError::QueryFailed`] like any other rejected query.
    /// ## Errors
    pub async fn dependencies(&self, path: &Path, filter: &str) -> RtagsResult<String> {
        let path_arg = path.display().to_string();
        let mut args = vec!["--dependencies", path_arg.as_str()];
        if !filter.is_empty() {
            args.push(filter);
        }
        let output = self.run(&args).await?;
        Ok(output.trim_end().to_string())
    }

    /// Runs one `rc` query and returns its stdout.
    ///
    /// All transport failure modes are mapped here, so callers only see
    /// [`RtagsError`] values.
    async fn run(&self, args: &[&str]) -> RtagsResult<String> {
        debug!(rc = %self.config.rc_command, ?args, "running rc query");

        let mut cmd = async_process::Command::new(&self.config.rc_command);
        cmd.args(&self.config.rc_args)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = tokio::time::timeout(self.config.request_timeout, async {
            cmd.output()
                .await
                .map_err(|e| RtagsError::SpawnFailed(format!("'{}': {}", self.config.rc_command, e)))
        })
        .await
        .map_err(|_| RtagsError::Timeout(self.config.request_timeout))??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(RtagsError::QueryFailed {
                code: output.status.code().unwrap_or(-1),
                stderr,
            });
        }

        String::from_utf8(output.stdout)
            .map_err(|e| RtagsError::MalformedOutput(format!("non-UTF-8 output: {e}")))
    }
}
