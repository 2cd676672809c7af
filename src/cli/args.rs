//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Scripted photo albums: composite trees of sets and photos
#[derive(Parser, Debug)]
#[command(name = "phototree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug logging (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute a command script
    Run {
        /// Script file, one command per line, terminated by Quit
        #[arg(value_hint = ValueHint::FilePath)]
        script: PathBuf,

        /// Name of the root set
        #[arg(long, default_value = "Album")]
        root: String,
    },

    /// Execute a script, then show the album as a tree
    Tree {
        /// Script file, one command per line, terminated by Quit
        #[arg(value_hint = ValueHint::FilePath)]
        script: PathBuf,

        /// Name of the root set
        #[arg(long, default_value = "Album")]
        root: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config path
    Path,
}
