//! Context-menu construction.

use crate::device::Device;
use crate::discovery::DeviceLister;
use crate::error::Result;
use crate::i18n::Catalog;
use crate::selection::FileSelection;
use tracing::debug;

/// Icon for the top-level entry and each device entry
pub const MENU_ICON: &str = "smartphone-symbolic";

/// Top-level label, translated through the catalog at build time
pub const MENU_LABEL: &str = "Send To Mobile Device";

/// One submenu entry, bound to a single device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Entry identity, derived from the device id; display names may collide
    pub id: String,

    /// Label shown to the user (the device name)
    pub label: String,

    /// Icon name
    pub icon: String,

    /// Device this entry dispatches to on activation
    pub device: Device,
}

/// The rendered two-level menu: one top-level entry owning the device list.
#[derive(Debug, Clone)]
pub struct MenuDescriptor {
    /// Top-level label
    pub label: String,

    /// Top-level icon name
    pub icon: String,

    /// One entry per device, in discovery order
    pub items: Vec<MenuItem>,
}

/// Decides whether the send action is offered and renders the menu.
pub struct MenuBuilder<'a> {
    lister: &'a DeviceLister,
    catalog: &'a Catalog,
}

impl<'a> MenuBuilder<'a> {
    /// Create a builder over a lister and a string catalog
    pub fn new(lister: &'a DeviceLister, catalog: &'a Catalog) -> Self {
        Self { lister, catalog }
    }

    /// Build the context menu for a selection, or `None` when the action
    /// should not appear.
    ///
    /// The selection gate runs before discovery: an empty selection, a
    /// directory, or a non-local URI suppresses the menu regardless of which
    /// devices are reachable. A successful discovery with zero devices also
    /// suppresses the menu silently, while a discovery failure propagates to
    /// the caller so the host can report it.
    pub async fn build_menu(&self, selection: &FileSelection) -> Result<Option<MenuDescriptor>> {
        if !selection.is_sendable() {
            debug!("selection not sendable, suppressing menu");
            return Ok(None);
        }

        let devices = self.lister.list_devices().await?;
        if devices.is_empty() {
            debug!("no devices reachable, suppressing menu");
            return Ok(None);
        }

        let items = devices
            .into_iter()
            .map(|device| MenuItem {
                id: format!("mconnect-send::device::{}", device.id),
                label: device.name.clone(),
                icon: MENU_ICON.to_string(),
                device,
            })
            .collect();

        Ok(Some(MenuDescriptor {
            label: self.catalog.gettext(MENU_LABEL),
            icon: MENU_ICON.to_string(),
            items,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CommandConfig;
    use crate::error::DiscoveryError;
    use crate::selection::FileEntry;
    use std::time::Duration;

    const TIME_BOUND: Duration = Duration::from_secs(2);

    fn lister_printing(output: &str) -> DeviceLister {
        DeviceLister::new(
            CommandConfig {
                program: "printf".to_string(),
                args: vec!["%s".to_string(), output.to_string()],
            },
            TIME_BOUND,
        )
    }

    fn broken_lister() -> DeviceLister {
        DeviceLister::new(
            CommandConfig {
                program: "/nonexistent/mconnect-helper".to_string(),
                args: vec![],
            },
            TIME_BOUND,
        )
    }

    fn local_files(n: usize) -> FileSelection {
        (0..n)
            .map(|i| FileEntry::file(format!("file:///tmp/file-{i}.txt")))
            .collect()
    }

    #[tokio::test]
    async fn test_menu_shape() {
        let lister = lister_printing("Pixel 7: abcd-1234\nDesk PC: ef01-5678\n");
        let catalog = Catalog::source();

        let menu = MenuBuilder::new(&lister, &catalog)
            .build_menu(&local_files(2))
            .await
            .unwrap()
            .expect("menu should be offered");

        assert_eq!(menu.label, MENU_LABEL);
        assert_eq!(menu.icon, MENU_ICON);
        assert_eq!(menu.items.len(), 2);
        assert_eq!(menu.items[0].label, "Pixel 7");
        assert_eq!(menu.items[1].label, "Desk PC");
        assert_ne!(menu.items[0].id, menu.items[1].id);
        assert!(menu.items[0].id.contains("abcd-1234"));
    }

    #[tokio::test]
    async fn test_colliding_names_stay_distinguishable() {
        let lister = lister_printing("Pixel: id-1\nPixel: id-2\n");
        let catalog = Catalog::source();

        let menu = MenuBuilder::new(&lister, &catalog)
            .build_menu(&local_files(1))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(menu.items[0].label, menu.items[1].label);
        assert_ne!(menu.items[0].id, menu.items[1].id);
    }

    #[tokio::test]
    async fn test_zero_devices_suppresses_menu_without_error() {
        let lister = lister_printing("");
        let catalog = Catalog::source();

        let menu = MenuBuilder::new(&lister, &catalog)
            .build_menu(&local_files(1))
            .await
            .unwrap();

        assert!(menu.is_none());
    }

    #[tokio::test]
    async fn test_discovery_failure_propagates() {
        let lister = broken_lister();
        let catalog = Catalog::source();

        let err = MenuBuilder::new(&lister, &catalog)
            .build_menu(&local_files(1))
            .await
            .unwrap_err();

        assert!(matches!(err, DiscoveryError::ProcessFailure(_)));
    }

    #[tokio::test]
    async fn test_selection_gate_precedes_discovery() {
        // A broken lister must not matter when the gate already suppresses.
        let lister = broken_lister();
        let catalog = Catalog::source();
        let builder = MenuBuilder::new(&lister, &catalog);

        let with_dir = FileSelection::new(vec![
            FileEntry::file("file:///tmp/a.txt"),
            FileEntry::directory("file:///tmp/dir"),
        ]);
        assert!(builder.build_menu(&with_dir).await.unwrap().is_none());

        let remote = FileSelection::new(vec![FileEntry::file("sftp://host/a.txt")]);
        assert!(builder.build_menu(&remote).await.unwrap().is_none());

        let empty = FileSelection::default();
        assert!(builder.build_menu(&empty).await.unwrap().is_none());
    }
}
