use anyhow::Result;
use clap::Subcommand;
use editor_jumper::IdeDescriptor;

use super::{load_config, platform_arg};

#[derive(Subcommand)]
pub enum IdeAction {
    /// Add a custom IDE
    Add {
        /// Unique id, e.g. Fleet
        id: String,
        /// Application bundle, script or command for the platform
        path: String,
        /// Name shown in lists
        #[arg(long)]
        name: Option<String>,
        /// macos, windows or linux [default: current platform]
        #[arg(long)]
        platform: Option<String>,
    },
    /// Hide an IDE from the selection list
    Hide { id: String },
    /// Show a hidden IDE again
    Show { id: String },
    /// Remove a custom IDE
    Remove { id: String },
    /// Set the path of an IDE, or clear it when PATH is omitted
    SetPath {
        id: String,
        path: Option<String>,
        /// macos, windows or linux [default: current platform]
        #[arg(long)]
        platform: Option<String>,
    },
}

pub fn cmd_ide(action: IdeAction) -> Result<()> {
    let mut config = load_config()?;
    match action {
        IdeAction::Add {
            id,
            path,
            name,
            platform,
        } => {
            let platform = platform_arg(platform.as_deref())?;
            let mut ide = IdeDescriptor::custom(&id, platform, &path);
            ide.display_name = name.unwrap_or_default();
            config.add_ide(ide, platform)?;
            eprintln!("Added {id}");
        }
        IdeAction::Hide { id } => {
            config.set_hidden(&id, true)?;
            eprintln!("Hid {id}; selected IDE is {}", config.selected_ide);
        }
        IdeAction::Show { id } => {
            config.set_hidden(&id, false)?;
            eprintln!("{id} is visible again");
        }
        IdeAction::Remove { id } => {
            config.remove_ide(&id)?;
            eprintln!("Removed {id}");
        }
        IdeAction::SetPath { id, path, platform } => {
            let platform = platform_arg(platform.as_deref())?;
            let cleared = path.is_none();
            config.set_path(&id, platform, path)?;
            if cleared {
                eprintln!("Cleared {platform} path for {id}; the default will be used");
            } else {
                eprintln!("Updated {platform} path for {id}");
            }
        }
    }
    config.save()
}
