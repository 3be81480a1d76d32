use serde::{Deserialize, Serialize};

/// Operating systems with distinct launch conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Application bundles launched through `open -a`.
    #[serde(rename = "macos")]
    MacOs,
    /// Bare commands need a `cmd /c` wrapper.
    Windows,
    /// Direct invocation. Also used for other unix targets.
    Linux,
}

impl Platform {
    /// The platform this binary was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Linux
        }
    }

    /// Key used in config files and on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::MacOs => "macos",
            Self::Windows => "windows",
            Self::Linux => "linux",
        }
    }

    /// Parse a platform key, accepting common aliases as well.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "macos" | "mac" | "darwin" => Some(Self::MacOs),
            "windows" | "win" | "win32" => Some(Self::Windows),
            "linux" => Some(Self::Linux),
            _ => None,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// True when `value` names a file path rather than a bare command.
#[must_use]
pub fn is_path_like(value: &str) -> bool {
    value.contains('/') || value.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_aliases() {
        assert_eq!(Platform::from_key("darwin"), Some(Platform::MacOs));
        assert_eq!(Platform::from_key("Win32"), Some(Platform::Windows));
        assert_eq!(Platform::from_key("linux"), Some(Platform::Linux));
        assert_eq!(Platform::from_key("plan9"), None);
    }

    #[test]
    fn test_key_round_trips_through_from_key() {
        for p in [Platform::MacOs, Platform::Windows, Platform::Linux] {
            assert_eq!(Platform::from_key(p.key()), Some(p));
        }
    }

    #[test]
    fn test_is_path_like() {
        assert!(is_path_like("/usr/local/bin/idea"));
        assert!(is_path_like(r"C:\JetBrains\idea64.exe"));
        assert!(!is_path_like("idea"));
    }
}
