pub mod config;
pub mod ide;
pub mod open;
pub mod prompt;
pub mod select;

use anyhow::Result;
use editor_jumper::{Config, Platform};

/// Load the config and repair it for this machine: a dangling selection is
/// reset and macOS gets its Xcode entry. Repairs are written back.
pub fn load_config() -> Result<Config> {
    let mut config = Config::load()?;
    let repaired = config.ensure_xcode(Platform::current()) | config.ensure_selection();
    if repaired {
        config.save()?;
    }
    Ok(config)
}

/// Parse a `--platform` value, defaulting to the current platform.
pub fn platform_arg(value: Option<&str>) -> Result<Platform> {
    match value {
        None => Ok(Platform::current()),
        Some(key) => Platform::from_key(key)
            .ok_or_else(|| anyhow::anyhow!("Unknown platform: {key} (expected macos, windows or linux)")),
    }
}
