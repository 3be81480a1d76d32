//! Open the file under the cursor, at the same line and column, in a
//! JetBrains IDE or Xcode.
//!
//! The pipeline is: [`config`] picks an IDE, [`resolver`] turns it into a
//! command for the current [`platform`], [`invocation`] builds the argument
//! list for a [`target`], and [`launcher`] starts the processes. [`app`]
//! wires these together behind a [`app::Host`].

/// Launch entry point and the host abstraction.
pub mod app;
/// Persisted settings and the IDE list operations.
pub mod config;
/// Typed launch errors.
pub mod error;
/// IDE descriptors and the default path table.
pub mod ide;
/// Argument lists for starting an IDE.
pub mod invocation;
/// Process spawning and the Xcode sequence.
pub mod launcher;
/// Operating system detection.
pub mod platform;
/// Filesystem and `PATH` lookups.
pub mod probe;
/// Turning an IDE entry into a launchable command.
pub mod resolver;
/// What to open: project, file and cursor position.
pub mod target;

pub use app::{App, Host, JumpOutcome, JumpRequest, PromptChoice};
pub use config::Config;
pub use error::LaunchError;
pub use ide::IdeDescriptor;
pub use platform::Platform;
pub use target::LaunchTarget;
