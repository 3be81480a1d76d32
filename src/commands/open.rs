use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use editor_jumper::{
    target::source_path, App, JumpOutcome, JumpRequest, Platform, PromptChoice,
};

use super::prompt::TerminalHost;

#[derive(Args)]
pub struct OpenArgs {
    /// File path or file:// URI; omit to open only the project
    #[arg(value_name = "TARGET")]
    pub target: Option<String>,

    /// 1-based line of the cursor
    #[arg(long)]
    pub line: Option<u32>,

    /// 1-based column of the cursor, counting characters
    #[arg(long)]
    pub column: Option<u32>,

    /// Open workspace folder; repeat for multi-root workspaces [default: current directory]
    #[arg(long = "root", value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// Use this IDE instead of the selected one
    #[arg(long)]
    pub ide: Option<String>,

    /// Print the commands that would run and exit
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn cmd_open(args: OpenArgs) -> Result<ExitCode> {
    let config = super::load_config()?;
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let request = build_request(args, &cwd)?;
    tracing::debug!(?request, "open request");

    let app = App::system(config, Box::new(TerminalHost::new(Platform::current())));
    // The host has already shown the error.
    let Ok(outcome) = app.jump(&request).await else {
        return Ok(ExitCode::FAILURE);
    };

    match outcome {
        JumpOutcome::Launched { ide, report } => {
            tracing::debug!(ide = %ide, states = ?report.states, delay = ?report.delay, "launch finished");
        }
        JumpOutcome::Planned { plan, .. } => {
            for invocation in plan.invocations() {
                println!("{invocation}");
            }
        }
        JumpOutcome::NeedsConfiguration { choice, .. } => {
            if choice == PromptChoice::Configure {
                eprintln!("Run the command again to open the file.");
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn build_request(args: OpenArgs, cwd: &Path) -> Result<JumpRequest> {
    let file = args
        .target
        .as_deref()
        .map(source_path)
        .transpose()?
        .map(|path| cwd.join(path));
    let roots = if args.roots.is_empty() {
        vec![cwd.to_path_buf()]
    } else {
        args.roots.into_iter().map(|root| cwd.join(root)).collect()
    };
    Ok(JumpRequest {
        ide: args.ide,
        file,
        line: args.line,
        column: args.column,
        roots,
        dry_run: args.dry_run,
    })
}
