//! gistctl - Manage GitHub gists from the command line
//!
//! Deletes a gist by ID, or lets you pick one of your recent gists
//! interactively when no ID is given.
//!
//! # Example
//!
//! ```bash
//! # Delete a gist by ID
//! gistctl delete 5b0e0062eb8e9654adad7bb1d81cc75f
//!
//! # Pick one of your recent gists to delete
//! gistctl delete
//!
//! # Against a GitHub Enterprise Server
//! gistctl delete 1234 --host ghe.example.com
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod gist;
pub mod ui;

pub use cli::{Cli, Command, DeleteArgs};
pub use config::Config;
pub use error::{GistError, Result};
pub use gist::{
    build_http_client, report_error, resolve_selector, run_delete, DeleteOptions, Gist,
    GistClient, HostResolver, TokenResolver,
};
pub use ui::{DialoguerPrompter, IoStreams, Prompter};
