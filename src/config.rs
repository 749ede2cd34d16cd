//! Configuration for the external discovery and transfer commands.
//!
//! Command paths are deployment configuration, not code: the defaults point
//! at the mconnect gnome-shell extension's `share.js` helper, and a
//! `config.toml` under the XDG config directory overrides them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// An external command: program plus fixed leading arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandConfig {
    /// Program to execute
    pub program: String,

    /// Arguments passed before any per-invocation arguments
    #[serde(default)]
    pub args: Vec<String>,
}

/// Integration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Command printing `"<name>: <id>"` lines, one per reachable device
    #[serde(default = "default_discovery_command")]
    pub discovery: CommandConfig,

    /// Command initiating a share, invoked with `--device <id> --share <path>`
    #[serde(default = "default_transfer_command")]
    pub transfer: CommandConfig,

    /// Upper bound on discovery, which blocks the menu-open path
    #[serde(default = "default_discovery_timeout_ms")]
    pub discovery_timeout_ms: u64,
}

fn helper_script() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from(".local/share"))
        .join("gnome-shell/extensions/mconnect@andyholmes.github.io/share.js")
        .to_string_lossy()
        .into_owned()
}

fn default_discovery_command() -> CommandConfig {
    CommandConfig {
        program: "gjs".to_string(),
        args: vec![helper_script(), "-l".to_string()],
    }
}

fn default_transfer_command() -> CommandConfig {
    CommandConfig {
        program: "gjs".to_string(),
        args: vec![helper_script()],
    }
}

fn default_discovery_timeout_ms() -> u64 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            discovery: default_discovery_command(),
            transfer: default_transfer_command(),
            discovery_timeout_ms: default_discovery_timeout_ms(),
        }
    }
}

impl Config {
    /// Load configuration from file, using defaults if not found
    pub fn load() -> Result<Self> {
        let config_path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("mconnect-send")
            .join("config.toml");

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            let config: Config = toml::from_str(&contents)
                .context("Failed to parse config file")?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Discovery time bound as a [`Duration`]
    pub fn discovery_timeout(&self) -> Duration {
        Duration::from_millis(self.discovery_timeout_ms)
    }
}
