//! Error handling for device discovery.
//!
//! Only discovery-time failures are surfaced to the host: transfer launches
//! are fire-and-forget and their failures are logged where they occur.

use std::time::Duration;
use thiserror::Error;

/// Result type for discovery and menu construction.
pub type Result<T> = std::result::Result<T, DiscoveryError>;

/// Errors that can occur while enumerating reachable devices.
///
/// A selection that must not be offered the send action is not an error; it
/// is reported as menu absence (see [`crate::menu::MenuBuilder`]).
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// The discovery command could not be launched or terminated abnormally.
    #[error("discovery command failed: {0}")]
    ProcessFailure(String),

    /// Discovery output did not match the expected `"<name>: <id>"` format.
    ///
    /// The whole call fails; partial results are never returned.
    #[error("malformed device record: {0:?}")]
    ParseFailure(String),

    /// The discovery command did not finish within the configured bound.
    #[error("discovery command timed out after {0:?}")]
    Timeout(Duration),
}
