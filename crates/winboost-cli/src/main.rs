use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use winboost_core::{Config, TaskFilter};

mod commands;
mod components;
mod screens;
mod session;

use screens::Tab;

#[derive(Parser)]
#[command(name = "winboost-cli", version, about = "Winboost CLI: small wins, points and rewards")]
struct Cli {
    /// Config file (defaults to ~/.config/winboost/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Tint the energy bar with ANSI colors
    #[arg(long, global = true)]
    color: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session over stdin (the default)
    Shell,
    /// Render one screen of a fresh session and exit
    Screen {
        tab: Tab,
        /// Task list filter for the wins screen
        #[arg(long, default_value = "all")]
        filter: TaskFilter,
        /// Energy level to report before rendering
        #[arg(long)]
        energy: Option<i64>,
    },
    /// Dispatch JSON actions from stdin (one per line) and print the final state
    Replay,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("WINBOOST_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    tracing::debug!(path = %path.display(), "using config");

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => commands::shell::run(Config::load_from(&path)?, cli.color),
        Commands::Screen { tab, filter, energy } => {
            commands::screen::run(Config::load_from(&path)?, tab, filter, energy, cli.color)
        }
        Commands::Replay => commands::replay::run(Config::load_from(&path)?, std::io::stdin().lock()),
        Commands::Config { action } => commands::config::run(action, &path),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
