//! Host-facing surface: the two entry points a file-manager adapter calls.

use crate::config::Config;
use crate::device::Device;
use crate::discovery::DeviceLister;
use crate::error::Result;
use crate::i18n::Catalog;
use crate::menu::{MenuBuilder, MenuDescriptor};
use crate::selection::FileSelection;
use crate::send::Sender;
use async_trait::async_trait;

/// Narrow interface between the core and a host file-manager adapter.
///
/// The host calls [`file_menu`](MenuProvider::file_menu) once per
/// context-menu construction and [`activate`](MenuProvider::activate) once
/// per chosen submenu entry, passing back the selection it captured when the
/// menu was built. No state is carried between the two calls.
#[async_trait]
pub trait MenuProvider {
    /// Menu for the current selection, or `None` to suppress the action.
    ///
    /// Discovery failures are returned so the host can report them; they
    /// also mean no menu.
    async fn file_menu(&self, selection: &FileSelection) -> Result<Option<MenuDescriptor>>;

    /// A submenu entry bound to `device` was activated for `selection`.
    ///
    /// Post-activation failures are terminal where they occur and are not
    /// reported back through this path.
    async fn activate(&self, selection: &FileSelection, device: &Device);
}

/// Composition root wiring discovery, menu construction and sending
/// together from a single [`Config`].
pub struct ShareExtension {
    lister: DeviceLister,
    sender: Sender,
    catalog: Catalog,
}

impl ShareExtension {
    /// Build the extension with the catalog for the current locale
    pub fn new(config: Config) -> Self {
        Self::with_catalog(config, Catalog::from_env())
    }

    /// Build the extension with an explicit catalog
    pub fn with_catalog(config: Config, catalog: Catalog) -> Self {
        let lister = DeviceLister::new(config.discovery.clone(), config.discovery_timeout());
        let sender = Sender::new(config.transfer);

        Self {
            lister,
            sender,
            catalog,
        }
    }
}

#[async_trait]
impl MenuProvider for ShareExtension {
    async fn file_menu(&self, selection: &FileSelection) -> Result<Option<MenuDescriptor>> {
        MenuBuilder::new(&self.lister, &self.catalog)
            .build_menu(selection)
            .await
    }

    async fn activate(&self, selection: &FileSelection, device: &Device) {
        self.sender.send(selection, device, &self.catalog).await;
    }
}
