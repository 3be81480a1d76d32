use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::LaunchError;
use crate::invocation::Invocation;

use super::{ProcessTable, Spawner};

/// Spawns real OS processes through `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpawner;

impl SystemSpawner {
    #[cfg_attr(not(windows), allow(clippy::unnecessary_wraps))]
    fn command(invocation: &Invocation) -> Result<Command, LaunchError> {
        let mut cmd = Command::new(&invocation.program);
        #[cfg(windows)]
        if invocation.shell {
            // cmd.exe does its own parsing; hand it the line exactly once.
            cmd.arg("/c").raw_arg(invocation.shell_line()?);
            return Ok(cmd);
        }
        cmd.args(invocation.argv());
        Ok(cmd)
    }
}

#[async_trait]
impl Spawner for SystemSpawner {
    async fn spawn(&self, invocation: &Invocation) -> Result<(), LaunchError> {
        let spawn_error = |source| LaunchError::ProcessSpawnFailure {
            program: invocation.program.clone(),
            source,
        };
        let mut cmd = Self::command(invocation)?;
        cmd.stdin(Stdio::null());

        if !invocation.exits_promptly {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
            let child = cmd.spawn().map_err(spawn_error)?;
            tracing::debug!(pid = ?child.id(), program = %invocation.program, "detached");
            return Ok(());
        }

        // `output` captures stdout and stderr itself.
        let output = cmd.output().await.map_err(spawn_error)?;
        if output.status.success() {
            return Ok(());
        }
        Err(LaunchError::ProcessFailed {
            program: invocation.program.clone(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// Queries the OS process list (`pgrep` on unix, `tasklist` on Windows).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessTable;

#[async_trait]
impl ProcessTable for SystemProcessTable {
    async fn is_running(&self, app_name: &str) -> bool {
        let probe = probe_command(app_name).output().await;
        match probe {
            Ok(output) => probe_matched(app_name, &output),
            Err(e) => {
                tracing::warn!(app_name, error = %e, "process probe failed, assuming not running");
                false
            }
        }
    }
}

#[cfg(not(windows))]
fn probe_command(app_name: &str) -> Command {
    let mut cmd = Command::new("pgrep");
    cmd.arg("-x").arg(app_name);
    cmd.stdin(Stdio::null());
    cmd
}

#[cfg(not(windows))]
fn probe_matched(_app_name: &str, output: &std::process::Output) -> bool {
    output.status.success()
}

#[cfg(windows)]
fn probe_command(app_name: &str) -> Command {
    let mut cmd = Command::new("tasklist");
    cmd.args(["/NH", "/FI"])
        .arg(format!("IMAGENAME eq {app_name}.exe"));
    cmd.stdin(Stdio::null());
    cmd
}

#[cfg(windows)]
fn probe_matched(app_name: &str, output: &std::process::Output) -> bool {
    let listing = String::from_utf8_lossy(&output.stdout).to_ascii_lowercase();
    output.status.success() && listing.contains(&format!("{}.exe", app_name.to_ascii_lowercase()))
}
