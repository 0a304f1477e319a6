//! Command-line interface definitions and parsing
//!
//! Defines the CLI structure for splitview using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive master/detail browser (default)
//! - **list**: Print the catalog as text or JSON
//! - **config**: Show the effective configuration or write defaults
//!
//! Command-line flags take precedence over the configuration file, which
//! takes precedence over built-in defaults.
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use splitview::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["splitview", "list", "--json"]);
//! assert!(matches!(cli.get_command(), Commands::List { json: true, .. }));
//! ```

use crate::browse::Variant;
use crate::config::SplitviewConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Layout and data source overrides shared by `browse` and `list`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutArgs {
    /// Layout preset (overrides config)
    #[arg(short = 'v', long = "variant", value_enum)]
    pub variant: Option<Variant>,

    /// TOML catalog to load instead of the built-in data (overrides config)
    #[arg(short = 'c', long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}

impl LayoutArgs {
    /// Apply the overrides on top of a loaded configuration
    pub fn apply_to(&self, config: &mut SplitviewConfig) {
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if let Some(catalog) = &self.catalog {
            config.catalog = Some(catalog.clone());
        }
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "splitview")]
#[command(about = "A terminal master/detail browser", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this configuration file instead of the default location
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive browser (default)
    #[command(visible_alias = "b")]
    Browse {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Keep the selection empty after switching category or search text
        #[arg(long = "no-auto-select")]
        no_auto_select: bool,
    },

    /// Print categories and items
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Emit JSON instead of text
        #[arg(long = "json")]
        json: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write a default configuration file
        #[arg(long = "init")]
        init: bool,

        /// Overwrite an existing file with --init
        #[arg(long = "force", requires = "init")]
        force: bool,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            layout: LayoutArgs::default(),
            no_auto_select: false,
        })
    }
}

impl Commands {
    /// Fold this command's flags into the configuration
    pub fn apply_overrides(&self, config: &mut SplitviewConfig) {
        match self {
            Self::Browse {
                layout,
                no_auto_select,
            } => {
                layout.apply_to(config);
                if *no_auto_select {
                    config.auto_select_on_navigate = false;
                }
            }
            Self::List { layout, .. } => layout.apply_to(config),
            Self::Config { .. } => {}
        }
    }
}
