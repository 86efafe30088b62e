//! rtags-bridge - Entry Point
//!
//! Headless driver for the bridge: runs exactly one editor command
//! against the rtags daemon with a terminal-backed surface, so the
//! bridge can be exercised (and scripted) without a live editor.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use rtags_bridge::config::{BridgeConfig, CONFIG_FILE_NAME};
use rtags_bridge::editor::{CommandRegistry, EditorAdapter, TerminalSurface};
use rtags_bridge::rtags::{Position, RtagsClient};

/// Bridge editor commands to the rtags source indexing daemon.
#[derive(Parser, Debug)]
#[command(name = "rtags-bridge")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Command to run: find-references, find-virtuals, jump-to,
    /// symbol-info, preprocess, find-include-file, class-hierarchy,
    /// dependencies.
    #[arg(required_unless_present = "init_config")]
    command: Option<String>,

    /// Arguments for the command (e.g. a symbol for find-include-file,
    /// a filter for dependencies).
    args: Vec<String>,

    /// Cursor location as path, path:line, or path:line:column.
    #[arg(short = 'a', long, default_value = ".")]
    at: String,

    /// rc command to use (overrides the config file).
    #[arg(long)]
    rc: Option<String>,

    /// Extra argument passed to every rc invocation (repeatable).
    #[arg(long = "rc-arg")]
    rc_args: Vec<String>,

    /// Per-query timeout in seconds (overrides the config file).
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Path to the config file.
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Write a starter config file and exit.
    #[arg(long)]
    init_config: bool,

    /// Log level: trace, debug, info, warn, error.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    /// Parses the log level string into a tracing Level.
    fn parse_log_level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            other => bail!("invalid log level: {}", other),
        }
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(level: Level) -> Result<()> {
    // Respect RUST_LOG but provide a default level. Logs go to stderr so
    // stdout stays clean for query output.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rtags_bridge={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_target(true),
        )
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    Ok(())
}

/// Parses the `--at` argument: `path`, `path:line`, or
/// `path:line:column`, with line and column defaulting to 1.
fn parse_cursor(at: &str) -> Position {
    let mut fields = at.rsplitn(3, ':');
    let last = fields.next();
    let mid = fields.next();
    let rest = fields.next();

    match (rest, mid, last) {
        (Some(path), Some(line), Some(column)) => {
            if let (Ok(line), Ok(column)) = (line.parse(), column.parse()) {
                return Position::new(path, line, column);
            }
        }
        (None, Some(path), Some(line)) => {
            if let Ok(line) = line.parse() {
                return Position::new(path, line, 1);
            }
        }
        _ => {}
    }
    Position::new(at, 1, 1)
}

/// Main entry point.
#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = args.parse_log_level()?;
    init_tracing(log_level)?;

    if args.init_config {
        BridgeConfig::write_default(&args.config)?;
        info!(config = %args.config.display(), "wrote starter config");
        return Ok(());
    }

    let mut config = BridgeConfig::load(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    if let Some(rc) = args.rc {
        config.rc_command = rc;
    }
    if !args.rc_args.is_empty() {
        config.rc_args = args.rc_args;
    }
    if let Some(secs) = args.timeout_secs {
        config.request_timeout_secs = secs;
    }

    let cursor = parse_cursor(&args.at);
    debug!(%cursor, rc = %config.rc_command, "dispatching command");

    let client = RtagsClient::from_config(config.to_client_config());
    let surface = TerminalSurface::new(cursor);
    let mut adapter = EditorAdapter::new(surface, client);
    let registry = CommandRegistry::new();

    // Unknown commands and arity violations fail the process; daemon
    // failures were already rendered as messages by the adapter.
    let Some(command) = args.command else {
        bail!("no command given");
    };
    registry
        .dispatch(&mut adapter, &command, &args.args)
        .await?;

    Ok(())
}
