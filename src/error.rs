use thiserror::Error;

/// Failures on the way from an IDE selection to a running process.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// No command could be resolved for the IDE on this platform.
    #[error("Path for {ide} is not configured")]
    Unconfigured {
        /// Id of the IDE that needs configuration.
        ide: String,
    },

    /// A macOS value that is neither an `.app` bundle nor a lookup script.
    #[error("{path} is not an application bundle (.app) for {ide}")]
    InvalidPlatformPath {
        /// Id of the offending IDE.
        ide: String,
        /// The value that was rejected.
        path: String,
    },

    /// The OS refused to start the process.
    #[error("failed to start {program}: {source}")]
    ProcessSpawnFailure {
        /// Program that was being spawned.
        program: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The process started but exited unsuccessfully.
    #[error("{program} exited with {status}{}", stderr_suffix(.stderr))]
    ProcessFailed {
        /// Program that exited.
        program: String,
        /// Exit status as reported by the OS.
        status: std::process::ExitStatus,
        /// Captured stderr, trimmed.
        stderr: String,
    },

    /// A path that `cmd /c` would rewrite no matter how it is quoted.
    #[error("{arg} cannot be passed through cmd: it contains '%' or '\"'")]
    UnsafeShellArgument {
        /// The offending argument.
        arg: String,
    },

    /// There is no project root to open.
    #[error("No workspace folder is open")]
    NoWorkspaceOpen,

    /// The selected id matches no configured IDE.
    #[error("Unknown IDE: {0}")]
    UnknownIde(String),

    /// A file URI could not be converted into a local path.
    #[error("Not a local file: {0}")]
    NotALocalFile(String),
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

impl LaunchError {
    /// Whether the user should be offered the configuration flow instead of
    /// a plain error message.
    #[must_use]
    pub const fn needs_configuration(&self) -> bool {
        matches!(self, Self::Unconfigured { .. })
    }
}
