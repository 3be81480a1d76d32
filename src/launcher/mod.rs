mod system;
mod xcode;

#[cfg(test)]
pub(crate) mod fake;

#[cfg(test)]
mod tests;

pub use system::{SystemProcessTable, SystemSpawner};
pub use xcode::{Readiness, XcodeSequence, DEFAULT_GRACE};

use std::time::Duration;

use async_trait::async_trait;

use crate::error::LaunchError;
use crate::ide::IdeDescriptor;
use crate::invocation::{self, Invocation};
use crate::platform::Platform;
use crate::resolver::ResolvedCommand;
use crate::target::LaunchTarget;

/// Starts external processes.
#[async_trait]
pub trait Spawner: Send + Sync {
    /// Start `invocation`. Programs that exit promptly are waited for and a
    /// non-zero status is an error; anything else is detached.
    async fn spawn(&self, invocation: &Invocation) -> Result<(), LaunchError>;
}

/// Answers whether an application is already running.
#[async_trait]
pub trait ProcessTable: Send + Sync {
    /// Whether a process named `app_name` is in the process table.
    async fn is_running(&self, app_name: &str) -> bool;
}

/// Progress of one launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchState {
    /// Nothing spawned yet.
    Idle,
    /// The IDE or project is being started.
    Launching,
    /// Giving the freshly started application time to come up.
    WaitingForReady,
    /// Focusing the file inside the running application.
    OpeningFile,
    /// Every step succeeded.
    Done,
    /// A step failed; later steps were skipped.
    Failed,
}

/// What a finished launch went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    /// States visited, in order, ending in `Done`.
    pub states: Vec<LaunchState>,
    /// Time spent waiting for readiness.
    pub delay: Duration,
}

/// A launch that stopped at a failed step.
#[derive(Debug)]
pub struct LaunchFailure {
    /// States visited, in order, ending in `Failed`.
    pub states: Vec<LaunchState>,
    /// Why the step failed.
    pub error: LaunchError,
}

impl LaunchFailure {
    fn at(mut states: Vec<LaunchState>, error: LaunchError) -> Self {
        tracing::debug!(state = ?states.last(), error = %error, "launch failed");
        states.push(LaunchState::Failed);
        Self { states, error }
    }
}

/// The processes needed to open one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchPlan {
    /// One process.
    Single(Invocation),
    /// Open the project in Xcode, then the file.
    Xcode(XcodeSequence),
}

impl LaunchPlan {
    /// Plan the launch of `ide` on `platform`.
    #[must_use]
    pub fn new(
        ide: &IdeDescriptor,
        resolved: &ResolvedCommand,
        target: &LaunchTarget,
        platform: Platform,
        readiness: Readiness,
    ) -> Self {
        if platform == Platform::MacOs && ide.is_xcode() {
            Self::Xcode(XcodeSequence::new(resolved, target, readiness))
        } else {
            Self::Single(invocation::build(resolved, target, platform))
        }
    }

    /// Every invocation the plan may issue, in order.
    #[must_use]
    pub fn invocations(&self) -> Vec<&Invocation> {
        match self {
            Self::Single(inv) => vec![inv],
            Self::Xcode(seq) => seq.invocations(),
        }
    }
}

/// Runs launch plans against a spawner and a process table.
pub struct Launcher {
    spawner: Box<dyn Spawner>,
    processes: Box<dyn ProcessTable>,
}

impl Launcher {
    /// Launcher over the given collaborators.
    #[must_use]
    pub fn new(spawner: Box<dyn Spawner>, processes: Box<dyn ProcessTable>) -> Self {
        Self { spawner, processes }
    }

    /// Launcher that starts real processes.
    #[must_use]
    pub fn system() -> Self {
        Self::new(Box::new(SystemSpawner), Box::new(SystemProcessTable))
    }

    /// Execute `plan`. A failed step aborts the rest.
    ///
    /// # Errors
    ///
    /// A [`LaunchFailure`] with the states reached before the failing step.
    pub async fn launch(&self, plan: &LaunchPlan) -> Result<LaunchReport, LaunchFailure> {
        match plan {
            LaunchPlan::Single(inv) => self.launch_single(inv).await,
            LaunchPlan::Xcode(seq) => {
                seq.run(self.spawner.as_ref(), self.processes.as_ref())
                    .await
            }
        }
    }

    async fn launch_single(&self, inv: &Invocation) -> Result<LaunchReport, LaunchFailure> {
        let mut states = vec![LaunchState::Idle];
        if let Err(e) = inv.shell_line() {
            return Err(LaunchFailure::at(states, e));
        }

        states.push(LaunchState::Launching);
        tracing::info!(command = %inv, "launching");
        if let Err(e) = self.spawner.spawn(inv).await {
            return Err(LaunchFailure::at(states, e));
        }
        states.push(LaunchState::Done);
        Ok(LaunchReport {
            states,
            delay: Duration::ZERO,
        })
    }
}
