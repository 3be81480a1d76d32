//! `ejump`: open the current file in a JetBrains IDE or Xcode from the
//! command line.

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{config::ConfigAction, ide::IdeAction, open::OpenArgs};

#[derive(Parser)]
#[command(
    name = "ejump",
    version,
    about = "Open the file under the cursor in a JetBrains IDE or Xcode"
)]
struct Cli {
    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a project, and optionally a file at a position, in the IDE
    Open(OpenArgs),

    /// List configured IDEs and the commands they resolve to
    List,

    /// Choose the IDE used by `open`
    Select {
        /// IDE id; prompts when omitted
        id: Option<String>,
    },

    /// Print the command an IDE resolves to on this machine
    Resolve {
        /// IDE id [default: the selected IDE]
        id: Option<String>,
    },

    /// Add, hide, remove or repoint IDEs
    Ide {
        #[command(subcommand)]
        action: IdeAction,
    },

    /// Manage ejump configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Open(args) => return commands::open::cmd_open(args).await,
        Commands::List => commands::select::cmd_list()?,
        Commands::Select { id } => commands::select::cmd_select(id)?,
        Commands::Resolve { id } => commands::select::cmd_resolve(id)?,
        Commands::Ide { action } => commands::ide::cmd_ide(action)?,
        Commands::Config { action } => commands::config::cmd_config(action)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "editor_jumper=debug,ejump=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
