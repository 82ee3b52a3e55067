//! CLI - Command-line argument parsing
//!
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fenrir offline survival console
#[derive(Parser)]
#[command(name = "fenrirctl")]
#[command(about = "Fenrir - offline first-aid triage and survival protocols", long_about = None)]
#[command(version = env!("FENRIR_VERSION"))]
#[command(long_version = concat!(env!("FENRIR_VERSION"), " (", env!("FENRIR_BUILD"), ")"))]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Config file (overrides ~/.config/fenrir/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive first-aid triage session
    Triage {
        /// Only accept node ids offered by the current question
        #[arg(long)]
        strict: bool,
    },

    /// Show a single triage node
    Show {
        /// Node id, e.g. ROOT or TOURNIQUET_APPLY
        id: String,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Ask the chat assistant (offline protocol bank unless --online)
    Ask {
        /// Pretend the remote assistant is reachable
        #[arg(long)]
        online: bool,

        /// Message text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Survival tip for the current weather
    Tip {
        /// Temperature reading, e.g. "31°C"
        #[arg(long, default_value = "")]
        temp: String,

        /// Condition text, e.g. "Lluvia ligera"
        #[arg(long, default_value = "")]
        condition: String,

        /// Selection seed (defaults to the clock)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Validate the built-in triage graph
    Validate,

    /// Print the built-in triage graph as JSON
    Export,

    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Set KEY (output.color, triage.strict_navigation) to VALUE
    Set { key: String, value: String },
}
