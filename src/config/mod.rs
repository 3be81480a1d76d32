mod ides;
mod ops;


use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ide::{DefaultPathTable, IdeDescriptor};
use crate::launcher::{Readiness, DEFAULT_GRACE};
use crate::target::{ColumnConvention, DEFAULT_TAB_WIDTH};

/// Persisted settings: the IDE list, the selection and launch tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Id of the IDE used by `open`.
    pub selected_ide: String,
    /// Cursor conversion settings.
    pub launch: LaunchConfig,
    /// Xcode sequencing settings.
    pub xcode: XcodeConfig,
    /// Configured IDEs, in display order.
    pub ides: Vec<IdeDescriptor>,
}

/// How editor cursor positions are converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Column convention for cursor offsets.
    pub column: ColumnConvention,
    /// Tab width used by the `tab-expanded` convention.
    pub tab_width: u32,
}

/// Readiness strategy names as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadinessMode {
    /// Probe the process table and wait only after a cold start.
    #[default]
    ProbeOnce,
    /// Always wait for the grace period.
    FixedDelay,
    /// Never wait.
    Immediate,
}

impl ReadinessMode {
    /// Key used in the config file.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ProbeOnce => "probe-once",
            Self::FixedDelay => "fixed-delay",
            Self::Immediate => "immediate",
        }
    }

    /// Parse a config key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "probe-once" => Some(Self::ProbeOnce),
            "fixed-delay" => Some(Self::FixedDelay),
            "immediate" => Some(Self::Immediate),
            _ => None,
        }
    }
}

/// How the two-step Xcode launch waits for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XcodeConfig {
    /// When to open the file after starting Xcode.
    pub readiness: ReadinessMode,
    /// Wait after a cold start, e.g. `"3s"`.
    #[serde(with = "humantime_serde")]
    pub grace: Duration,
}

impl Default for Config {
    fn default() -> Self {
        let ides: Vec<IdeDescriptor> = DefaultPathTable::builtin_ids()
            .map(IdeDescriptor::builtin)
            .collect();
        Self {
            selected_ide: ides.first().map(|i| i.id.clone()).unwrap_or_default(),
            launch: LaunchConfig::default(),
            xcode: XcodeConfig::default(),
            ides,
        }
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            column: ColumnConvention::default(),
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl Default for XcodeConfig {
    fn default() -> Self {
        Self {
            readiness: ReadinessMode::default(),
            grace: DEFAULT_GRACE,
        }
    }
}

impl XcodeConfig {
    /// The strategy value handed to the launcher.
    #[must_use]
    pub const fn readiness(&self) -> Readiness {
        match self.readiness {
            ReadinessMode::ProbeOnce => Readiness::ProbeOnce { grace: self.grace },
            ReadinessMode::FixedDelay => Readiness::FixedDelay(self.grace),
            ReadinessMode::Immediate => Readiness::Immediate,
        }
    }
}
