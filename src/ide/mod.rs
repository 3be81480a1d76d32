mod defaults;

#[cfg(test)]
mod tests;

pub use defaults::{DefaultPathTable, XCODE_BUNDLE, XCODE_ID};

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Per-platform command values. Empty strings are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformPaths {
    /// Application bundle or script path on macOS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macos: Option<String>,
    /// Command or executable path on Windows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows: Option<String>,
    /// Command or executable path on Linux.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linux: Option<String>,
}

impl PlatformPaths {
    /// The value for `platform`, if set and not blank. Returned as stored.
    #[must_use]
    pub fn get(&self, platform: Platform) -> Option<&str> {
        let value = match platform {
            Platform::MacOs => self.macos.as_deref(),
            Platform::Windows => self.windows.as_deref(),
            Platform::Linux => self.linux.as_deref(),
        };
        value.filter(|v| !v.trim().is_empty())
    }

    /// Replace the value for `platform`; an empty value clears it.
    pub fn set(&mut self, platform: Platform, value: Option<String>) {
        let value = value.filter(|v| !v.trim().is_empty());
        match platform {
            Platform::MacOs => self.macos = value,
            Platform::Windows => self.windows = value,
            Platform::Linux => self.linux = value,
        }
    }

    /// Same value on Windows and Linux, nothing on macOS.
    #[must_use]
    pub fn command(name: &str) -> Self {
        Self {
            macos: None,
            windows: Some(name.to_string()),
            linux: Some(name.to_string()),
        }
    }
}

/// A configured external IDE.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeDescriptor {
    /// Unique key, e.g. `IDEA` or `GoLand`.
    pub id: String,
    /// Label shown in lists. Falls back to the id when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    /// User-defined entry that has no row in the default table.
    #[serde(default)]
    pub is_custom: bool,
    /// Left out of the selection list.
    #[serde(default)]
    pub hidden: bool,
    /// User overrides, one per platform.
    #[serde(default)]
    pub paths: PlatformPaths,
}

impl IdeDescriptor {
    /// A built-in (non-custom) entry without overrides.
    #[must_use]
    pub fn builtin(id: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: String::new(),
            is_custom: false,
            hidden: false,
            paths: PlatformPaths::default(),
        }
    }

    /// A custom entry with a single override for `platform`.
    #[must_use]
    pub fn custom(id: &str, platform: Platform, path: &str) -> Self {
        let mut paths = PlatformPaths::default();
        paths.set(platform, Some(path.to_string()));
        Self {
            id: id.to_string(),
            display_name: String::new(),
            is_custom: true,
            hidden: false,
            paths,
        }
    }

    /// The name to show to the user.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.id
        } else {
            &self.display_name
        }
    }

    /// The user override for `platform`, if any.
    #[must_use]
    pub fn override_for(&self, platform: Platform) -> Option<&str> {
        self.paths.get(platform)
    }

    /// Whether this entry is launched through the two-step Xcode sequence.
    #[must_use]
    pub fn is_xcode(&self) -> bool {
        self.id.eq_ignore_ascii_case(XCODE_ID)
    }
}
