//! Delete command arguments

use clap::Parser;

/// Arguments for 'delete' command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Gist ID to delete
    ///
    /// When omitted, pick one of your recent gists interactively.
    pub id: Option<String>,
}

impl DeleteArgs {
    /// Selector for resolution; empty means prompt
    pub fn selector(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }
}
