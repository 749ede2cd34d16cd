use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mconnect_send::{
    file_uri, Config, DeviceLister, FileEntry, FileSelection, MenuProvider, ShareExtension,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "mconnect-send")]
#[command(about = "Send files to a paired mobile device via MConnect/KDE Connect")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List reachable, trusted devices
    List,

    /// Show the context menu that would be offered for the given files
    Menu {
        /// Files the user would have selected
        files: Vec<PathBuf>,
    },

    /// Send files to a device
    Send {
        /// Target device, by id or name as printed by `list`
        #[arg(long)]
        device: String,

        /// Files to send
        files: Vec<PathBuf>,
    },
}

fn selection_from_paths(paths: &[PathBuf]) -> Result<FileSelection> {
    let mut entries = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path
            .canonicalize()
            .with_context(|| format!("cannot resolve {}", path.display()))?;
        let uri = file_uri(&path);

        entries.push(if path.is_dir() {
            FileEntry::directory(uri)
        } else {
            FileEntry::file(uri)
        });
    }

    Ok(FileSelection::new(entries))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load configuration")?;
    let lister = DeviceLister::new(config.discovery.clone(), config.discovery_timeout());
    let extension = ShareExtension::new(config);

    match cli.command {
        Command::List => {
            for device in lister.list_devices().await? {
                println!("{}: {}", device.name, device.id);
            }
        }

        Command::Menu { files } => {
            let selection = selection_from_paths(&files)?;
            match extension.file_menu(&selection).await? {
                Some(menu) => {
                    println!("{}", menu.label);
                    for item in &menu.items {
                        println!("  {} ({})", item.label, item.device.id);
                    }
                }
                None => info!("no menu would be offered for this selection"),
            }
        }

        Command::Send { device, files } => {
            let selection = selection_from_paths(&files)?;
            anyhow::ensure!(
                selection.is_sendable(),
                "only local regular files can be sent"
            );

            let target = lister
                .list_devices()
                .await?
                .into_iter()
                .find(|d| d.id == device || d.name == device)
                .with_context(|| format!("no reachable device matches '{device}'"))?;

            info!("sending {} file(s) to {}", selection.len(), target.name);
            extension.activate(&selection, &target).await;
        }
    }

    Ok(())
}
