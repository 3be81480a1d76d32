use std::path::{Path, PathBuf};

use crate::platform::Platform;

const SYSTEM_DIRS: &[&str] = &["/usr/local/bin", "/usr/bin", "/opt/homebrew/bin"];

/// Directories scanned, in order, for a bare command that `which` missed.
/// Ends with the JetBrains Toolbox script directory for `platform`.
#[must_use]
pub fn install_dirs(platform: Platform, home: Option<&Path>) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = SYSTEM_DIRS.iter().map(PathBuf::from).collect();
    let Some(home) = home else {
        return dirs;
    };

    dirs.push(home.join("bin"));
    dirs.push(home.join(".local").join("bin"));
    match platform {
        Platform::MacOs => dirs.push(
            home.join("Library")
                .join("Application Support")
                .join("JetBrains")
                .join("Toolbox")
                .join("scripts"),
        ),
        Platform::Linux => dirs.push(
            home.join(".local")
                .join("share")
                .join("JetBrains")
                .join("Toolbox")
                .join("scripts"),
        ),
        Platform::Windows => {}
    }
    dirs
}
