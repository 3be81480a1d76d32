mod quote;


pub use quote::{cmd_escape, cmd_quote_path, quote_path};

use std::fmt;
use std::path::Path;

use crate::error::LaunchError;
use crate::platform::Platform;
use crate::resolver::{CommandKind, ResolvedCommand};
use crate::target::LaunchTarget;

/// The macOS launcher for application bundles.
pub const BUNDLE_LAUNCHER: &str = "open";

/// Shell used to resolve bare commands on Windows.
pub const WINDOWS_SHELL: &str = "cmd";

/// Xcode's command-line helper for opening a file at a line.
pub const XED: &str = "xed";

/// One argument of an [`Invocation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// Flags, numbers and bare command names.
    Plain(String),
    /// A filesystem path; quoted in the string form.
    Path(String),
}

impl Arg {
    fn path(path: &Path) -> Self {
        Self::Path(path.to_string_lossy().into_owned())
    }

    /// The raw argument value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(s) | Self::Path(s) => s,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(s) => f.write_str(s),
            Self::Path(s) => f.write_str(&quote_path(s)),
        }
    }
}

/// A process to start, kept as an argument array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to execute.
    pub program: String,
    /// Arguments after the program.
    pub args: Vec<Arg>,
    /// Arguments after `/c` form a single command line that the shell parses.
    pub shell: bool,
    /// The program hands off to another process and exits, so its status is
    /// worth waiting for.
    pub exits_promptly: bool,
}

impl Invocation {
    fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            shell: false,
            exits_promptly: false,
        }
    }

    fn plain(mut self, arg: impl Into<String>) -> Self {
        self.args.push(Arg::Plain(arg.into()));
        self
    }

    fn path(mut self, path: &Path) -> Self {
        self.args.push(Arg::path(path));
        self
    }

    /// Raw argument values, in order.
    #[must_use]
    pub fn argv(&self) -> Vec<&str> {
        self.args.iter().map(Arg::as_str).collect()
    }

    /// The command line that `cmd /c` should interpret: every argument after
    /// the leading `/c`. Plain words are caret-escaped and paths quoted.
    /// Empty for non-shell invocations.
    ///
    /// # Errors
    ///
    /// [`LaunchError::UnsafeShellArgument`] for a path containing `%` or `"`.
    pub fn shell_line(&self) -> Result<String, LaunchError> {
        if !self.shell {
            return Ok(String::new());
        }
        let words = self
            .args
            .iter()
            .skip(1)
            .map(|arg| match arg {
                Arg::Plain(word) => Ok(cmd_escape(word)),
                Arg::Path(path) => cmd_quote_path(path),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(words.join(" "))
    }

    /// Whether the invocation carries cursor flags.
    #[must_use]
    pub fn has_position(&self) -> bool {
        self.args
            .iter()
            .any(|a| matches!(a, Arg::Plain(s) if s == "--line" || s == "--column"))
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        if let (true, Some(first), Ok(line)) = (self.shell, self.args.first(), self.shell_line()) {
            return write!(f, " {first} {line}");
        }
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Assemble the process invocation for opening `target` with `resolved`.
///
/// The trailing arguments are always
/// `<projectRoot> [--line L --column C] [<filePath>]`; what precedes them
/// depends on the platform and on whether the command is a bare name.
#[must_use]
pub fn build(resolved: &ResolvedCommand, target: &LaunchTarget, platform: Platform) -> Invocation {
    let head = match platform {
        Platform::MacOs => {
            let mut inv = Invocation::new(BUNDLE_LAUNCHER)
                .plain("-a")
                .path(Path::new(&resolved.executable_path))
                .plain("--args");
            inv.exits_promptly = true;
            inv
        }
        Platform::Windows if resolved.kind == CommandKind::Command => {
            let mut inv = Invocation::new(WINDOWS_SHELL)
                .plain("/c")
                .plain(resolved.executable_path.clone());
            // `idea.bat` and friends run the JVM in the foreground, so the
            // shell lives as long as the IDE.
            inv.shell = true;
            inv
        }
        Platform::Windows | Platform::Linux => Invocation::new(&resolved.executable_path),
    };
    append_target(head, target)
}

fn append_target(mut inv: Invocation, target: &LaunchTarget) -> Invocation {
    inv = inv.path(target.project_root());
    if let Some(file) = target.file_path() {
        if let Some((line, column)) = target.position() {
            inv = inv
                .plain("--line")
                .plain(line.to_string())
                .plain("--column")
                .plain(column.to_string());
        }
        inv = inv.path(file);
    }
    inv
}

/// First Xcode step: open the project folder in the bundle.
#[must_use]
pub fn build_xcode_project(resolved: &ResolvedCommand, target: &LaunchTarget) -> Invocation {
    let mut inv = Invocation::new(BUNDLE_LAUNCHER)
        .plain("-a")
        .path(Path::new(&resolved.executable_path))
        .path(target.project_root());
    inv.exits_promptly = true;
    inv
}

/// Second Xcode step: focus the file, at the cursor line when known.
/// `None` without a file. Xcode has no column argument.
#[must_use]
pub fn build_xcode_file(target: &LaunchTarget) -> Option<Invocation> {
    let file = target.file_path()?;
    let mut inv = Invocation::new(XED);
    if let Some((line, _)) = target.position() {
        inv = inv.plain("--line").plain(line.to_string());
    }
    inv = inv.path(file);
    inv.exits_promptly = true;
    Some(inv)
}
