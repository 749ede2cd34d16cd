//! Desktop notification display.

use notify_rust::{Notification, Timeout};
use tracing::{debug, warn};

/// Application name for notifications
const APP_NAME: &str = "mconnect-send";

/// Notification timeout (5 seconds)
const TIMEOUT_MS: u32 = 5000;

/// Show a transient desktop notification.
///
/// Fire-and-forget: no acknowledgement is consumed and a failure to display
/// is logged, never raised.
pub fn show(title: &str, body: &str, icon: &str) {
    debug!("showing notification: {} - {}", title, body);

    if let Err(e) = Notification::new()
        .appname(APP_NAME)
        .summary(title)
        .body(body)
        .icon(icon)
        .timeout(Timeout::Milliseconds(TIMEOUT_MS))
        .show()
    {
        warn!("failed to show notification: {}", e);
    }
}
