use std::path::Path;
use std::time::Duration;

use crate::invocation::{build_xcode_file, build_xcode_project, Invocation};
use crate::resolver::ResolvedCommand;
use crate::target::LaunchTarget;

use super::{LaunchFailure, LaunchReport, LaunchState, ProcessTable, Spawner};

/// Grace period given to a cold-started Xcode before the file is opened.
pub const DEFAULT_GRACE: Duration = Duration::from_secs(3);

/// How long to wait between starting Xcode and opening the file.
///
/// This is a heuristic, not a handshake: on a slow machine the file-open can
/// still arrive before Xcode accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// Never wait.
    Immediate,
    /// Always wait this long.
    FixedDelay(Duration),
    /// Check the process table once; wait `grace` only when the application
    /// was not already running.
    ProbeOnce {
        /// Wait applied after a cold start.
        grace: Duration,
    },
}

impl Default for Readiness {
    fn default() -> Self {
        Self::ProbeOnce {
            grace: DEFAULT_GRACE,
        }
    }
}

impl Readiness {
    async fn delay(self, processes: &dyn ProcessTable, app_name: &str) -> Duration {
        match self {
            Self::Immediate => Duration::ZERO,
            Self::FixedDelay(delay) => delay,
            Self::ProbeOnce { grace } => {
                if processes.is_running(app_name).await {
                    tracing::debug!(app_name, "already running, no wait");
                    Duration::ZERO
                } else {
                    grace
                }
            }
        }
    }
}

/// Two-step Xcode launch: open the project, then the file at a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XcodeSequence {
    app_name: String,
    project: Invocation,
    file: Option<Invocation>,
    readiness: Readiness,
}

impl XcodeSequence {
    /// Plan both steps for `target`.
    #[must_use]
    pub fn new(resolved: &ResolvedCommand, target: &LaunchTarget, readiness: Readiness) -> Self {
        let app_name = Path::new(resolved.executable_path.trim_end_matches('/'))
            .file_stem()
            .map_or_else(|| "Xcode".to_string(), |s| s.to_string_lossy().into_owned());
        Self {
            app_name,
            project: build_xcode_project(resolved, target),
            file: build_xcode_file(target),
            readiness,
        }
    }

    /// Process name probed in the process table.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The project step followed by the file step, if any.
    #[must_use]
    pub fn invocations(&self) -> Vec<&Invocation> {
        std::iter::once(&self.project).chain(&self.file).collect()
    }

    /// Run the sequence. The process table is consulted before the project
    /// is opened, since afterwards the application would always look alive.
    pub(super) async fn run(
        &self,
        spawner: &dyn Spawner,
        processes: &dyn ProcessTable,
    ) -> Result<LaunchReport, LaunchFailure> {
        let mut states = vec![LaunchState::Idle];

        let delay = match self.file {
            Some(_) => self.readiness.delay(processes, &self.app_name).await,
            None => Duration::ZERO,
        };

        states.push(LaunchState::Launching);
        tracing::info!(command = %self.project, "opening project in Xcode");
        if let Err(e) = spawner.spawn(&self.project).await {
            tracing::info!("project launch failed, skipping file");
            return Err(LaunchFailure::at(states, e));
        }

        let Some(file) = &self.file else {
            states.push(LaunchState::Done);
            return Ok(LaunchReport { states, delay });
        };

        if !delay.is_zero() {
            states.push(LaunchState::WaitingForReady);
            tracing::info!(delay = %humantime::format_duration(delay), "waiting for Xcode to start");
            tokio::time::sleep(delay).await;
        }

        states.push(LaunchState::OpeningFile);
        tracing::info!(command = %file, "opening file in Xcode");
        if let Err(e) = spawner.spawn(file).await {
            return Err(LaunchFailure::at(states, e));
        }

        states.push(LaunchState::Done);
        Ok(LaunchReport { states, delay })
    }
}
