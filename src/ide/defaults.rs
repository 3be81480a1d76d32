use std::path::{Path, PathBuf};

use crate::platform::Platform;
use crate::probe::PathProbe;

use super::PlatformPaths;

/// Id of the Xcode entry, which only exists on macOS.
pub const XCODE_ID: &str = "Xcode";

/// Where Xcode is installed by the App Store.
pub const XCODE_BUNDLE: &str = "/Applications/Xcode.app";

/// Built-in JetBrains IDEs: id, Windows/Linux command, macOS bundle candidates
/// in preference order.
const BUILTIN: &[(&str, &str, &[&str])] = &[
    (
        "IDEA",
        "idea",
        &[
            "IntelliJ IDEA Ultimate.app",
            "IntelliJ IDEA.app",
            "IntelliJ IDEA CE.app",
            "IntelliJ IDEA Community Edition.app",
        ],
    ),
    ("WebStorm", "webstorm", &["WebStorm.app"]),
    (
        "PyCharm",
        "pycharm",
        &[
            "PyCharm Professional Edition.app",
            "PyCharm.app",
            "PyCharm CE.app",
            "PyCharm Community Edition.app",
        ],
    ),
    ("GoLand", "goland", &["GoLand.app"]),
    ("CLion", "clion", &["CLion.app"]),
    ("PhpStorm", "phpstorm", &["PhpStorm.app"]),
    ("RubyMine", "rubymine", &["RubyMine.app"]),
    ("Rider", "rider", &["Rider.app"]),
    ("Android Studio", "studio", &["Android Studio.app"]),
];

/// Static mapping from IDE id to default per-platform commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultPathTable {
    entries: Vec<(String, PlatformPaths)>,
}

impl DefaultPathTable {
    /// Ids of the built-in JetBrains entries, in display order.
    pub fn builtin_ids() -> impl Iterator<Item = &'static str> {
        BUILTIN.iter().map(|&(id, _, _)| id)
    }

    /// Build the table, searching for macOS bundles through `probe`. Without
    /// a bundle the macOS default is the bare command, left for the resolver
    /// to locate as a launcher script.
    #[must_use]
    pub fn detect(probe: &dyn PathProbe) -> Self {
        let search_dirs = mac_app_dirs(probe);
        let entries = BUILTIN
            .iter()
            .map(|&(id, command, bundles)| {
                let mut paths = PlatformPaths::command(command);
                paths.macos = Some(
                    find_mac_bundle(&search_dirs, bundles, probe)
                        .map_or_else(|| command.to_string(), |p| p.to_string_lossy().into_owned()),
                );
                (id.to_string(), paths)
            })
            .collect();
        Self { entries }
    }

    /// Build the table from explicit rows. Used by tests and embedders.
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, PlatformPaths)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Default value for `id` on `platform`.
    #[must_use]
    pub fn lookup(&self, id: &str, platform: Platform) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .and_then(|(_, paths)| paths.get(platform))
    }

    /// Whether a row exists for `id`.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == id)
    }

    /// Add the Xcode row on macOS when it is missing. Returns true if the
    /// table changed.
    pub fn ensure_xcode(&mut self, platform: Platform) -> bool {
        if platform != Platform::MacOs || self.contains(XCODE_ID) {
            return false;
        }
        let paths = PlatformPaths {
            macos: Some(XCODE_BUNDLE.to_string()),
            ..PlatformPaths::default()
        };
        self.entries.push((XCODE_ID.to_string(), paths));
        tracing::debug!("added Xcode to the default path table");
        true
    }
}

fn mac_app_dirs(probe: &dyn PathProbe) -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from("/Applications")];
    if let Some(home) = probe.home_dir() {
        dirs.push(home.join("Applications"));
    }
    dirs
}

/// First existing `.app` bundle, searching every directory for every name.
fn find_mac_bundle(dirs: &[PathBuf], names: &[&str], probe: &dyn PathProbe) -> Option<PathBuf> {
    dirs.iter()
        .flat_map(|dir| {
            names
                .iter()
                .filter(|name| Path::new(name).extension().is_some_and(|e| e == "app"))
                .map(move |name| dir.join(name))
        })
        .find(|candidate| probe.exists(candidate))
}
