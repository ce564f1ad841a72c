//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// Codebase project management: register projects, then start and stop them by name
#[derive(Parser, Debug)]
#[command(name = "proj", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database path (default: ~/.proj/projects.db)
    #[arg(long, global = true, env = "PROJ_DB")]
    pub db: Option<PathBuf>,

    /// Output summaries and errors as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no log output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project
    Init(InitArgs),

    /// Commit a config file change (reads ./proj.yml)
    Commit,

    /// Start your project
    Start {
        /// Project name
        name: String,
    },

    /// Stop your project
    Stop {
        /// Project name
        name: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Project name
    #[arg(long)]
    pub name: String,

    /// Project path
    #[arg(long)]
    pub path: PathBuf,

    /// Boot command
    #[arg(long)]
    pub command: String,

    /// Tear down command
    #[arg(long)]
    pub teardown: Option<String>,
}
