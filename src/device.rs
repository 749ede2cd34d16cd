//! Device records and the discovery output parser.

use crate::error::{DiscoveryError, Result};

/// Separator between the name and id fields of a device record.
const RECORD_SEPARATOR: &str = ": ";

/// One reachable, trusted device as reported by the discovery command.
///
/// Constructed fresh on every discovery call and never cached; `name` is a
/// display string and not guaranteed unique, `id` is unique within one
/// discovery snapshot and addresses the device in the transfer command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    /// Human-readable display name
    pub name: String,

    /// Opaque identifier used by the transfer command
    pub id: String,
}

impl Device {
    /// Create a new device record
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

/// Parse the discovery command's stdout into device records.
///
/// Empty lines are dropped; every remaining line must contain `": "` and is
/// split on its first occurrence. A line without the separator fails the
/// whole call with [`DiscoveryError::ParseFailure`] rather than producing a
/// partial list. No output at all is the normal "no devices reachable" state
/// and yields an empty list.
pub fn parse_device_list(output: &str) -> Result<Vec<Device>> {
    let mut devices = Vec::new();

    for line in output.lines().filter(|line| !line.is_empty()) {
        let (name, id) = line
            .split_once(RECORD_SEPARATOR)
            .ok_or_else(|| DiscoveryError::ParseFailure(line.to_string()))?;
        devices.push(Device::new(name, id));
    }

    Ok(devices)
}
