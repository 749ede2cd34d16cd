//! Context-menu integration for sending files to paired mobile devices via
//! MConnect/KDE Connect.
//!
//! The crate performs no networking and no pairing of its own. An external
//! helper command enumerates reachable, trusted devices and initiates
//! transfers; this crate turns that command's output into a two-level
//! context menu for a host file manager, dispatches one fire-and-forget
//! transfer launch per selected file on activation, and shows a desktop
//! notification.
//!
//! ## Pipeline
//!
//! 1. The host asks for menu items for the current [`FileSelection`].
//! 2. [`MenuBuilder`] gates the selection (local regular files only), runs
//!    the [`DeviceLister`] and renders a [`MenuDescriptor`] with one entry
//!    per device, or suppresses the menu.
//! 3. On activation, [`Sender`] launches the transfer command once per file
//!    and shows a single pluralized notification.
//!
//! [`ShareExtension`] wires the three together behind the narrow
//! [`MenuProvider`] trait a host adapter implements against.

pub mod config;
pub mod device;
pub mod discovery;
pub mod error;
pub mod i18n;
pub mod menu;
pub mod notify;
pub mod provider;
pub mod selection;
pub mod send;

pub use config::{CommandConfig, Config};
pub use device::{parse_device_list, Device};
pub use discovery::DeviceLister;
pub use error::{DiscoveryError, Result};
pub use i18n::Catalog;
pub use menu::{MenuBuilder, MenuDescriptor, MenuItem};
pub use provider::{MenuProvider, ShareExtension};
pub use selection::{file_uri, FileEntry, FileSelection};
pub use send::Sender;
