use std::path::{Path, PathBuf};

/// Read-only view of the filesystem used while resolving commands.
pub trait PathProbe {
    /// Whether `path` exists (file, directory or bundle).
    fn exists(&self, path: &Path) -> bool;

    /// `which`-style lookup of a bare command on `PATH`.
    fn which(&self, name: &str) -> Option<PathBuf>;

    /// Home directory of the current user.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl PathProbe for SystemProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn which(&self, name: &str) -> Option<PathBuf> {
        match which::which(name) {
            Ok(found) => Some(found),
            Err(e) => {
                tracing::trace!(name, error = %e, "which lookup failed");
                None
            }
        }
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::{HashMap, HashSet};
    use std::path::{Path, PathBuf};

    use super::PathProbe;

    /// In-memory probe: a set of existing paths plus a `which` table.
    #[derive(Debug, Default)]
    pub struct FakeProbe {
        pub existing: HashSet<PathBuf>,
        pub on_path: HashMap<String, PathBuf>,
        pub home: Option<PathBuf>,
    }

    impl FakeProbe {
        pub fn new() -> Self {
            Self {
                home: Some(PathBuf::from("/home/dev")),
                ..Self::default()
            }
        }

        pub fn with_file(mut self, path: &str) -> Self {
            self.existing.insert(PathBuf::from(path));
            self
        }

        pub fn with_which(mut self, name: &str, path: &str) -> Self {
            self.on_path.insert(name.to_string(), PathBuf::from(path));
            self
        }
    }

    impl PathProbe for FakeProbe {
        fn exists(&self, path: &Path) -> bool {
            self.existing.contains(path)
        }

        fn which(&self, name: &str) -> Option<PathBuf> {
            self.on_path.get(name).cloned()
        }

        fn home_dir(&self) -> Option<PathBuf> {
            self.home.clone()
        }
    }
}
