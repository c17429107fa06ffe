//! ai-config-setup: copy Claude and Cursor configs into place

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use ai_config_setup::commands;

#[derive(Parser)]
#[command(name = "ai-config-setup")]
#[command(about = "Set up Claude and Cursor AI coding configs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively copy configs into place (default)
    Setup(SetupArgs),

    /// Run the sync validator and report its verdict
    Validate {
        /// Project directory containing scripts/validate-sync.sh
        #[arg(long)]
        project_dir: Option<PathBuf>,

        /// Output format: text or json (default: text)
        #[arg(long, short, default_value = "text")]
        format: String,
    },
}

#[derive(Args, Default)]
struct SetupArgs {
    /// Project directory containing claude/, cursor/ and scripts/ (default: current directory)
    #[arg(long)]
    project_dir: Option<PathBuf>,

    /// Directory to write .cursorrules into (default: current directory)
    #[arg(long)]
    target_dir: Option<PathBuf>,

    /// Claude config directory (default: ~/.claude)
    #[arg(long)]
    claude_dir: Option<PathBuf>,

    /// Configure every tool without prompting
    #[arg(short, long)]
    yes: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

impl Commands {
    /// Heading printed above an error that escapes the command
    fn failure_heading(&self) -> &'static str {
        match self {
            Self::Setup(_) => "Setup failed:",
            Self::Validate { .. } => "Validation failed:",
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Setup(args) => {
            let options = commands::setup::SetupOptions {
                project_dir: args.project_dir,
                target_dir: args.target_dir,
                claude_dir: args.claude_dir,
                yes: args.yes,
            };
            commands::setup::execute(options)?;
        }

        Commands::Validate {
            project_dir,
            format,
        } => {
            let format = commands::validate::OutputFormat::from_str(&format)
                .context("Invalid format. Use 'text' or 'json'")?;
            commands::validate::execute(project_dir, format)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli
        .command
        .unwrap_or(Commands::Setup(SetupArgs::default()));
    let heading = command.failure_heading();

    if let Err(err) = run(command) {
        eprintln!("{}", heading.red());
        eprintln!("{}", format!("{:#}", err).red());
        std::process::exit(1);
    }
}
