//! Transfer dispatch and the completion notification.

use crate::config::CommandConfig;
use crate::device::Device;
use crate::i18n::Catalog;
use crate::notify;
use crate::selection::FileSelection;
use tracing::{debug, warn};

/// Icon for the "sending" notification
pub const NOTIFY_ICON: &str = "send-to-symbolic";

const BODY_SINGULAR: &str = "Sending {num} file";
const BODY_PLURAL: &str = "Sending {num} files";

/// Launches one transfer per selected file, fire-and-forget.
///
/// Stateless apart from the configured transfer command; transfers are never
/// awaited, aggregated or cancelled once launched.
#[derive(Debug, Clone)]
pub struct Sender {
    command: CommandConfig,
}

impl Sender {
    /// Create a sender for the given transfer command
    pub fn new(command: CommandConfig) -> Self {
        Self { command }
    }

    /// Notification body for a batch of `count` files, pluralized on
    /// `count == 1` vs `count != 1`.
    pub fn sending_body(catalog: &Catalog, count: usize) -> String {
        catalog
            .ngettext(BODY_SINGULAR, BODY_PLURAL, count as u64)
            .replace("{num}", &count.to_string())
    }

    /// Send every file in `selection` to `device`, then show one
    /// notification addressed to the device.
    ///
    /// Each transfer is an independent detached launch; the child handle is
    /// discarded and completion is never checked. A launch failure is logged
    /// and the remaining files are still dispatched.
    pub async fn send(&self, selection: &FileSelection, device: &Device, catalog: &Catalog) {
        for entry in selection.entries() {
            let Some(path) = entry.local_path() else {
                warn!(uri = %entry.uri, "skipping entry without a local path");
                continue;
            };

            let mut cmd = tokio::process::Command::new(&self.command.program);
            cmd.args(&self.command.args)
                .arg("--device")
                .arg(&device.id)
                .arg("--share")
                .arg(&path);

            match cmd.spawn() {
                Ok(child) => {
                    debug!(
                        pid = ?child.id(),
                        path = %path.display(),
                        device = %device.id,
                        "transfer launched"
                    );
                }
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        device = %device.id,
                        "failed to launch transfer command: {e}"
                    );
                }
            }
        }

        let body = Self::sending_body(catalog, selection.len());
        notify::show(&device.name, &body, NOTIFY_ICON);
    }
}
