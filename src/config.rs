//! Configuration for locating and talking to the rtags daemon.
//!
//! The bridge reads an optional `.rtags-bridge.json` file so deployments
//! can point it at a non-default `rc` binary or socket without touching
//! editor bindings. Absence of the file means defaults; a file that
//! exists but does not parse is an error, not a silent fallback.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::rtags::RtagsClientConfig;

/// Default name of the config file, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".rtags-bridge.json";

fn default_rc_command() -> String {
    "rc".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Deployment-level settings for the bridge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BridgeConfig {
    /// Command used to invoke the rtags query client.
    #[serde(default = "default_rc_command")]
    pub rc_command: String,
    /// Extra arguments prepended to every query.
    #[serde(default)]
    pub rc_args: Vec<String>,
    /// Per-query timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            rc_command: default_rc_command(),
            rc_args: Vec::new(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl BridgeConfig {
    /// Loads configuration from `path`, falling back to defaults when
    /// the file does not exist.
    ///
    /// ## Errors
    /// Returns an error when the file exists but cannot be read or
    /// parsed.
    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("invalid {}: {}", path.display(), e)))
    }

    /// Writes a starter config file with default values.
    ///
    /// The write is atomic (temp file + rename). Refuses to overwrite an
    /// existing file.
    ///
    /// ## Errors
    /// Returns an error when the file already exists or IO fails.
    pub fn write_default(path: &Path) -> Result<(), Error> {
        if path.exists() {
            return Err(Error::Config(format!(
                "{} already exists; remove it first to regenerate",
                path.display()
            )));
        }

        let json = serde_json::to_string_pretty(&Self::default())
            .map_err(|e| Error::Config(format!("failed to serialize config: {e}")))?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, path)?;
        Ok(())
    }

    /// Converts the deployment settings into a client configuration.
    pub fn to_client_config(&self) -> RtagsClientConfig {
        RtagsClientConfig {
            rc_command: self.rc_command.clone(),
            rc_args: self.rc_args.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}
