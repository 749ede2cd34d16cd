//! Device discovery via the external helper command.

use crate::config::CommandConfig;
use crate::device::{parse_device_list, Device};
use crate::error::{DiscoveryError, Result};
use std::process::Stdio;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// Runs the external discovery command and parses its output.
///
/// Stateless apart from the configured command and time bound; every call
/// spawns a fresh process and returns a fresh snapshot.
#[derive(Debug, Clone)]
pub struct DeviceLister {
    command: CommandConfig,
    time_bound: Duration,
}

impl DeviceLister {
    /// Create a lister for the given command
    pub fn new(command: CommandConfig, time_bound: Duration) -> Self {
        Self {
            command,
            time_bound,
        }
    }

    /// Enumerate reachable, trusted devices.
    ///
    /// Returns devices in the order the command printed them; callers must
    /// not assume that order is stable across calls. An empty list is the
    /// normal "no devices reachable" state, not an error.
    ///
    /// Discovery blocks the host's menu-open path, so the call is bounded by
    /// the configured timeout; on expiry the child is killed and
    /// [`DiscoveryError::Timeout`] is returned.
    pub async fn list_devices(&self) -> Result<Vec<Device>> {
        debug!(program = %self.command.program, "running discovery command");

        let mut cmd = tokio::process::Command::new(&self.command.program);
        cmd.args(&self.command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let output = timeout(self.time_bound, cmd.output())
            .await
            .map_err(|_| DiscoveryError::Timeout(self.time_bound))?
            .map_err(|e| {
                DiscoveryError::ProcessFailure(format!(
                    "failed to launch `{}`: {}",
                    self.command.program, e
                ))
            })?;

        if !output.status.success() {
            return Err(DiscoveryError::ProcessFailure(format!(
                "`{}` exited with {}",
                self.command.program, output.status
            )));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| DiscoveryError::ParseFailure("output is not valid UTF-8".to_string()))?;

        let devices = parse_device_list(&stdout)?;
        debug!(count = devices.len(), "discovery finished");
        Ok(devices)
    }
}
