//! Launch entry point: the context object that ties configuration, the
//! resolver, the launcher and the host together.


use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::LaunchError;
use crate::ide::{DefaultPathTable, IdeDescriptor};
use crate::launcher::{LaunchPlan, LaunchReport, Launcher};
use crate::platform::Platform;
use crate::probe::{PathProbe, SystemProbe};
use crate::resolver::{ResolvedCommand, Resolver};
use crate::target::{ColumnConvention, LaunchTarget};

/// Answer to the "not configured" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChoice {
    /// Open the configuration for the IDE.
    Configure,
    /// Do nothing.
    Cancel,
}

/// The user-facing side: messages, prompts and the configuration screen.
pub trait Host {
    /// Report a failure.
    fn show_error(&self, message: &str);

    /// Report progress or success.
    fn show_info(&self, message: &str);

    /// Ask whether to configure a missing path.
    fn prompt_configure(&self, message: &str) -> PromptChoice;

    /// Show the configuration with `highlight_ide` singled out.
    fn open_configuration(&self, highlight_ide: &str) -> anyhow::Result<()>;
}

/// One "open in IDE" request.
#[derive(Debug, Clone, Default)]
pub struct JumpRequest {
    /// IDE to use instead of the selected one.
    pub ide: Option<String>,
    /// File to focus.
    pub file: Option<PathBuf>,
    /// 1-based cursor line.
    pub line: Option<u32>,
    /// 1-based cursor column as a raw character offset.
    pub column: Option<u32>,
    /// Open workspace folders, in order.
    pub roots: Vec<PathBuf>,
    /// Build the plan without spawning anything.
    pub dry_run: bool,
}

/// How a request ended when nothing went wrong.
#[derive(Debug)]
pub enum JumpOutcome {
    /// The IDE was started.
    Launched {
        /// Id of the launched IDE.
        ide: String,
        /// What the launcher went through.
        report: LaunchReport,
    },
    /// Dry run: the plan that would have been executed.
    Planned {
        /// Id of the IDE.
        ide: String,
        /// Processes that would be spawned.
        plan: LaunchPlan,
    },
    /// No path was configured; the user was asked what to do.
    NeedsConfiguration {
        /// Id of the IDE lacking a path.
        ide: String,
        /// The user's answer.
        choice: PromptChoice,
    },
}

/// Owns everything a launch needs. Built once and passed to command handlers.
pub struct App {
    config: Config,
    table: DefaultPathTable,
    probe: Box<dyn PathProbe>,
    launcher: Launcher,
    host: Box<dyn Host>,
    platform: Platform,
}

impl App {
    /// Assemble an app from explicit collaborators.
    #[must_use]
    pub fn new(
        config: Config,
        table: DefaultPathTable,
        probe: Box<dyn PathProbe>,
        launcher: Launcher,
        host: Box<dyn Host>,
        platform: Platform,
    ) -> Self {
        Self {
            config,
            table,
            probe,
            launcher,
            host,
            platform,
        }
    }

    /// App for the current machine: real filesystem and real processes.
    #[must_use]
    pub fn system(config: Config, host: Box<dyn Host>) -> Self {
        let platform = Platform::current();
        let probe = SystemProbe;
        let mut table = DefaultPathTable::detect(&probe);
        table.ensure_xcode(platform);
        Self::new(config, table, Box::new(probe), Launcher::system(), host, platform)
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The platform launches are built for.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Resolve the command for `id` on this platform.
    ///
    /// # Errors
    ///
    /// See [`Resolver::resolve`].
    pub fn resolve(&self, id: &str) -> Result<ResolvedCommand, LaunchError> {
        let ide = self.ide(Some(id))?;
        Resolver::new(&self.table, self.probe.as_ref()).resolve(ide, self.platform)
    }

    /// Handle an "open in IDE" request.
    ///
    /// A missing path turns into a configuration prompt and is not an
    /// error. Every other failure is shown to the user and returned.
    ///
    /// # Errors
    ///
    /// Every [`LaunchError`] except `Unconfigured`, after it was shown.
    pub async fn jump(&self, request: &JumpRequest) -> Result<JumpOutcome, LaunchError> {
        let result = self.try_jump(request).await;
        if let Err(e) = &result {
            let label = request
                .ide
                .as_deref()
                .and_then(|id| self.config.find(id))
                .or_else(|| self.config.selected().ok())
                .map_or("IDE", IdeDescriptor::label);
            match e {
                LaunchError::UnknownIde(_) => self.host.show_error(&e.to_string()),
                LaunchError::NoWorkspaceOpen => self.host.show_error("Please open a project first"),
                _ => self.host.show_error(&format!("Unable to open {label}: {e}")),
            }
        }
        result
    }

    async fn try_jump(&self, request: &JumpRequest) -> Result<JumpOutcome, LaunchError> {
        let ide = self.ide(request.ide.as_deref())?;
        let column = request
            .file
            .as_deref()
            .and_then(|file| self.ide_column(file, request.line, request.column));
        let target = LaunchTarget::from_workspace(
            &request.roots,
            request.file.as_deref(),
            request.line,
            column,
        )?;

        let resolver = Resolver::new(&self.table, self.probe.as_ref());
        let resolved = match resolver.resolve(ide, self.platform) {
            Ok(resolved) => resolved,
            Err(e) if e.needs_configuration() => {
                let choice = self.prompt_for_configuration(ide);
                return Ok(JumpOutcome::NeedsConfiguration {
                    ide: ide.id.clone(),
                    choice,
                });
            }
            Err(e) => return Err(e),
        };

        let plan = LaunchPlan::new(
            ide,
            &resolved,
            &target,
            self.platform,
            self.config.xcode.readiness(),
        );
        if request.dry_run {
            return Ok(JumpOutcome::Planned {
                ide: ide.id.clone(),
                plan,
            });
        }

        let report = self.launcher.launch(&plan).await.map_err(|failure| {
            tracing::debug!(states = ?failure.states, "launch aborted");
            failure.error
        })?;
        self.host.show_info(&format!("Opened in {}", ide.label()));
        Ok(JumpOutcome::Launched {
            ide: ide.id.clone(),
            report,
        })
    }

    fn ide(&self, id: Option<&str>) -> Result<&IdeDescriptor, LaunchError> {
        match id {
            Some(id) => self
                .config
                .find(id)
                .ok_or_else(|| LaunchError::UnknownIde(id.to_string())),
            None => self.config.selected(),
        }
    }

    fn prompt_for_configuration(&self, ide: &IdeDescriptor) -> PromptChoice {
        let message = format!(
            "Path for {} is not configured. Would you like to configure it now?",
            ide.label()
        );
        let choice = self.host.prompt_configure(&message);
        if choice == PromptChoice::Configure {
            if let Err(e) = self.host.open_configuration(&ide.id) {
                self.host.show_error(&format!("Could not open configuration: {e:#}"));
            }
        }
        choice
    }

    /// Convert the raw cursor column according to the configured convention.
    /// Tab expansion needs the line text; if the file cannot be read the raw
    /// column is kept.
    fn ide_column(&self, file: &Path, line: Option<u32>, column: Option<u32>) -> Option<u32> {
        let column = column.filter(|&c| c > 0)?;
        if self.config.launch.column == ColumnConvention::CharOffset {
            return Some(column);
        }
        let Some(line) = line.filter(|&l| l > 0) else {
            return Some(column);
        };
        let text = match std::fs::read_to_string(file) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(file = %file.display(), error = %e, "cannot read line for tab expansion");
                return Some(column);
            }
        };
        let line_text = text.lines().nth((line - 1) as usize).unwrap_or_default();
        Some(ColumnConvention::TabExpanded.column(
            line_text,
            (column - 1) as usize,
            self.config.launch.tab_width,
        ))
    }
}
