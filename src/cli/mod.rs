//! CLI argument parsing

mod delete;

use clap::{Parser, Subcommand};

use crate::config::{defaults, host};

pub use delete::DeleteArgs;

/// GitHub gist CLI
#[derive(Parser, Debug)]
#[command(name = "gistctl")]
#[command(version)]
#[command(about = "Manage GitHub gists from the command line", long_about = None)]
pub struct Cli {
    /// GitHub host (github.com or a GitHub Enterprise Server hostname)
    #[arg(short = 'H', long, global = true, env = host::ENV_VAR)]
    pub host: Option<String>,

    /// API token (overrides env vars and the gh hosts file)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: never prompt, fail instead
    #[arg(short, long, global = true, default_value_t = false)]
    pub batch: bool,

    /// API base URL, replacing the one derived from the host
    #[arg(long, global = true, hide = true, env = defaults::API_URL_ENV_VAR)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Delete a gist
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),
}
