//! Error types for the rtags-bridge crate.
//!
//! This module defines all error types used throughout the application,
//! organized by subsystem: the rtags daemon client (transport) and the
//! editor command layer.
//!
//! The governing rule is that transport failures stop at the client
//! boundary as [`RtagsError`] values; the adapter renders them as user
//! messages and nothing ever crosses into the host editor as a panic.

use std::time::Duration;

use thiserror::Error;

/// Errors produced by the rtags daemon client.
///
/// Every variant is a transport failure. A daemon response that is valid
/// but empty ("nothing found") is never an error; it comes back as an
/// empty location list or empty string.
#[derive(Debug, Error)]
pub enum RtagsError {
    /// The `rc` query client could not be started at all.
    #[error("failed to start rc: {0}")]
    SpawnFailed(String),

    /// The query exceeded the configured request timeout.
    #[error("rc query timed out after {0:?}")]
    Timeout(Duration),

    /// The daemon rejected the query (non-zero exit from `rc`).
    #[error("rc query failed (exit code {code}): {stderr}")]
    QueryFailed {
        /// Exit code reported by `rc`, or -1 when killed by a signal.
        code: i32,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// The daemon answered with output the client could not parse.
    #[error("malformed rc output: {0}")]
    MalformedOutput(String),

    /// IO error while talking to the query client.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced by the editor command layer before (or while)
/// dispatching to the daemon client.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The invoked command name is not in the registry.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A required command argument was omitted.
    #[error("command '{command}' requires an argument")]
    MissingArgument {
        /// The command that was invoked.
        command: String,
    },

    /// More arguments were supplied than the command accepts.
    #[error("command '{command}' takes at most {max} argument(s)")]
    TooManyArguments {
        /// The command that was invoked.
        command: String,
        /// The maximum number of arguments the command accepts.
        max: usize,
    },

    /// A daemon query failed during command execution.
    #[error("rtags error: {0}")]
    Rtags(#[from] RtagsError),
}

/// A unified error type for the entire application.
#[derive(Debug, Error)]
pub enum Error {
    /// Daemon-client error.
    #[error("rtags error: {0}")]
    Rtags(#[from] RtagsError),

    /// Command-layer error.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for rtags-bridge operations.
pub type Result<T> = std::result::Result<T, Error>;
