use anyhow::{bail, Result};
use clap::Subcommand;
use editor_jumper::config::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration to disk
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Set a configuration value (e.g. launch.column tab-expanded)
    Set { key: String, value: String },
    /// Get a configuration value (e.g. xcode.grace)
    Get { key: String },
}

pub fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = super::load_config()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => println!("{}", Config::path()?.display()),
        ConfigAction::Init { force } => {
            let path = Config::path()?;
            if path.exists() && !force {
                bail!("{} already exists; pass --force to overwrite it", path.display());
            }
            let mut config = Config::default();
            config.ensure_xcode(editor_jumper::Platform::current());
            config.save_to(&path)?;
            println!("Wrote default config to {}", path.display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = super::load_config()?;
            config.set_value(&key, &value)?;
            config.save()?;
            println!("Set {key} = {}", config.get_value(&key)?);
        }
        ConfigAction::Get { key } => println!("{}", super::load_config()?.get_value(&key)?),
    }
    Ok(())
}
