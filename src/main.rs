//! Splitview CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Browse the built-in inventory (default command)
//! splitview
//! splitview browse --variant two-column
//!
//! # Browse your own data without auto-selection on navigation
//! splitview browse --catalog my-catalog.toml --no-auto-select
//!
//! # Print the data a layout shows
//! splitview list --variant simple --json
//!
//! # Show or create the configuration file
//! splitview config
//! splitview config --init
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/splitview/config.toml` on Linux). A missing file means
//! defaults; `--config FILE` points at another file.

use colored::Colorize;
use splitview::{
    SplitviewError,
    cli::{Cli, Commands},
    commands,
    config::SplitviewConfig,
    logging,
    ui::StdoutWriter,
};

type Result<T> = std::result::Result<T, SplitviewError>;

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let (mut config, config_path) = match &cli.config {
        Some(path) if path.exists() => (SplitviewConfig::load_from(path)?, path.clone()),
        Some(path) => (SplitviewConfig::default(), path.clone()),
        None => (SplitviewConfig::load()?, SplitviewConfig::config_path()?),
    };

    let command = cli.get_command();
    command.apply_overrides(&mut config);

    let _log_guard = logging::init(&config.log_filter);
    tracing::debug!(?command, variant = %config.variant, "starting");

    let output = StdoutWriter::new();
    let result = match command {
        Commands::Browse { .. } => commands::browse(&config),
        Commands::List { json, .. } => commands::list(&config, json, &output),
        Commands::Config { init, force } => {
            commands::config(&config, &config_path, init, force, &output)
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "command failed");
    }
    result
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }
}
