mod search;


pub use search::install_dirs;

use std::path::{Path, PathBuf};

use crate::error::LaunchError;
use crate::ide::{DefaultPathTable, IdeDescriptor};
use crate::platform::{is_path_like, Platform};
use crate::probe::PathProbe;

/// How a resolved command has to be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// A macOS `.app` directory.
    Bundle,
    /// A file path: an executable or a launcher script.
    Script,
    /// A bare name left for the shell's `PATH` lookup.
    Command,
}

/// Outcome of resolving an IDE on one platform. Recomputed for every launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    /// The value to execute.
    pub executable_path: String,
    /// The value names a file path rather than a bare command.
    pub is_absolute_path: bool,
    /// Launch style implied by the value.
    pub kind: CommandKind,
}

impl ResolvedCommand {
    fn classify(value: &str) -> Self {
        let kind = if is_bundle(value) {
            CommandKind::Bundle
        } else if is_path_like(value) {
            CommandKind::Script
        } else {
            CommandKind::Command
        };
        Self {
            executable_path: value.to_string(),
            is_absolute_path: kind != CommandKind::Command,
            kind,
        }
    }
}

/// Turns IDE descriptors into launchable commands.
pub struct Resolver<'a> {
    table: &'a DefaultPathTable,
    probe: &'a dyn PathProbe,
}

impl<'a> Resolver<'a> {
    /// Resolver over `table`, checking the filesystem through `probe`.
    #[must_use]
    pub fn new(table: &'a DefaultPathTable, probe: &'a dyn PathProbe) -> Self {
        Self { table, probe }
    }

    /// Resolve `ide` for `platform`.
    ///
    /// A user override always wins and is returned as written. Default table
    /// values that are bare command names get upgraded to a full path when
    /// one can be found (except on Windows, where `cmd` does the lookup).
    /// On macOS the result must be an application bundle or a located
    /// launcher script; a bare default that cannot be located counts as
    /// unconfigured.
    ///
    /// # Errors
    ///
    /// [`LaunchError::Unconfigured`] when no command is known, and
    /// [`LaunchError::InvalidPlatformPath`] for an unusable macOS value.
    pub fn resolve(
        &self,
        ide: &IdeDescriptor,
        platform: Platform,
    ) -> Result<ResolvedCommand, LaunchError> {
        if let Some(value) = ide.override_for(platform) {
            tracing::debug!(ide = %ide.id, %platform, value, "using configured override");
            return require_launchable(ide, platform, ResolvedCommand::classify(value), false);
        }

        let Some(value) = self.table.lookup(&ide.id, platform) else {
            return Err(LaunchError::Unconfigured {
                ide: ide.id.clone(),
            });
        };

        if platform != Platform::Windows && !is_path_like(value) {
            if let Some(found) = self.locate(value, platform) {
                tracing::debug!(ide = %ide.id, command = value, path = %found.display(), "located command");
                let resolved = ResolvedCommand::classify(&found.to_string_lossy());
                return require_launchable(ide, platform, resolved, true);
            }
            if platform == Platform::MacOs {
                tracing::debug!(ide = %ide.id, command = value, "no bundle or launcher script found");
                return Err(LaunchError::Unconfigured {
                    ide: ide.id.clone(),
                });
            }
            tracing::debug!(ide = %ide.id, command = value, "command not found, leaving it to PATH");
        }

        require_launchable(ide, platform, ResolvedCommand::classify(value), false)
    }

    /// Find a full path for the bare command `name`.
    fn locate(&self, name: &str, platform: Platform) -> Option<PathBuf> {
        let direct = Path::new(name);
        if direct.is_absolute() && self.probe.exists(direct) {
            return Some(direct.to_path_buf());
        }
        if let Some(found) = self.probe.which(name) {
            return Some(found);
        }
        let home = self.probe.home_dir();
        install_dirs(platform, home.as_deref())
            .into_iter()
            .map(|dir| dir.join(name))
            .find(|candidate| self.probe.exists(candidate))
    }
}

fn require_launchable(
    ide: &IdeDescriptor,
    platform: Platform,
    resolved: ResolvedCommand,
    located: bool,
) -> Result<ResolvedCommand, LaunchError> {
    if platform == Platform::MacOs && resolved.kind != CommandKind::Bundle && !located {
        return Err(LaunchError::InvalidPlatformPath {
            ide: ide.id.clone(),
            path: resolved.executable_path,
        });
    }
    Ok(resolved)
}

fn is_bundle(value: &str) -> bool {
    Path::new(value.trim_end_matches(['/', '\\']))
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("app"))
}
