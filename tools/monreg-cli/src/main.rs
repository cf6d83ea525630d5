//! monreg CLI — inspect the monitor registry.
//!
//! Usage:
//!   monreg list [--json]        List monitors, primary first
//!   monreg resolve <INDEX>      Show adapter/output ids for a monitor
//!   monreg detail <INDEX>       Show geometry and rotation for a monitor
//!   monreg check                Report enumeration health

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use monreg_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "monreg",
    about = "Enumerate displays and map them to graphics-adapter outputs",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read displays from a JSON layout file instead of the OS
    #[arg(long, global = true)]
    layout: Option<PathBuf>,

    /// Configuration file (defaults to the per-user config location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List monitors, primary first
    List {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Show adapter/output identifiers for a monitor
    Resolve {
        /// Zero-based monitor index
        index: usize,
    },

    /// Show geometry and rotation for a monitor
    Detail {
        /// Zero-based monitor index
        index: usize,
    },

    /// Report enumeration health
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {e}"))?,
        None => AppConfig::load(),
    };
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    monreg_common::logging::init_logging(&config.logging);

    let (registry, report) = commands::open_registry(cli.layout.as_deref(), &config)?;

    match cli.command {
        Commands::List { json } => commands::list::run(&registry, json),
        Commands::Resolve { index } => commands::resolve::run(&registry, index),
        Commands::Detail { index } => commands::detail::run(&registry, index),
        Commands::Check => commands::check::run(&registry, &report),
    }
}
