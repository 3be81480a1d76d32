use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use super::{Config, ReadinessMode};
use crate::target::ColumnConvention;

impl Config {
    /// Default location of the config file.
    ///
    /// # Errors
    ///
    /// Fails when the home directory cannot be determined.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("editor-jumper").join("config.toml"))
    }

    /// Load from [`Config::path`], or defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, or defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Write to [`Config::path`].
    ///
    /// # Errors
    ///
    /// Fails when the file or its directory cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Write to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Fails when the file or its directory cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Get a config value by dot-separated key path
    ///
    /// # Errors
    ///
    /// Fails for an unknown key.
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "selected_ide" => Ok(self.selected_ide.clone()),
            "launch.column" => Ok(self.launch.column.key().to_string()),
            "launch.tab_width" => Ok(self.launch.tab_width.to_string()),
            "xcode.readiness" => Ok(self.xcode.readiness.key().to_string()),
            "xcode.grace" => Ok(humantime::format_duration(self.xcode.grace).to_string()),
            _ => bail!("Unknown config key: {key}"),
        }
    }

    /// Set a config value by dot-separated key path
    ///
    /// # Errors
    ///
    /// Fails for an unknown key or a value that does not parse.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "selected_ide" => self.select_ide(value)?,
            "launch.column" => {
                self.launch.column = ColumnConvention::from_key(value).with_context(|| {
                    format!("Invalid column convention: {value} (expected char-offset or tab-expanded)")
                })?;
            }
            "launch.tab_width" => {
                let width: u32 = value
                    .parse()
                    .with_context(|| format!("Invalid tab width: {value}"))?;
                if width == 0 {
                    bail!("Tab width must be at least 1");
                }
                self.launch.tab_width = width;
            }
            "xcode.readiness" => {
                self.xcode.readiness = ReadinessMode::from_key(value).with_context(|| {
                    format!("Invalid readiness: {value} (expected probe-once, fixed-delay or immediate)")
                })?;
            }
            "xcode.grace" => {
                self.xcode.grace = humantime::parse_duration(value)
                    .with_context(|| format!("Invalid duration: {value}"))?;
            }
            _ => bail!("Unknown config key: {key}"),
        }
        Ok(())
    }
}
