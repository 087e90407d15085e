//! Gist delete command handler

use std::io::Write;

use log::{debug, warn};

use crate::cli::{Cli, DeleteArgs};
use crate::config::Config;
use crate::error::{GistError, Result};
use crate::gist::resolver::resolve_selector;
use crate::gist::{build_http_client, GistClient};
use crate::ui::{DialoguerPrompter, IoStreams, Prompter};

/// Builds the HTTP client for an invocation
pub type HttpClientFactory = Box<dyn Fn() -> Result<reqwest::Client>>;

/// Loads host and credentials for an invocation
pub type ConfigFactory = Box<dyn Fn() -> Result<Config>>;

/// Everything the delete command needs, injected by the caller
pub struct DeleteOptions {
    /// Gist ID, or empty to choose interactively
    pub selector: String,
    pub http_client: HttpClientFactory,
    pub config: ConfigFactory,
    pub io: IoStreams,
    pub prompter: Box<dyn Prompter>,
}

impl DeleteOptions {
    /// Wire the real HTTP client, config loader and prompter from parsed arguments
    ///
    /// `--batch` turns off prompting even when attached to a terminal.
    pub fn from_cli(cli: &Cli, args: &DeleteArgs, mut io: IoStreams) -> Self {
        if cli.batch {
            io.set_stdin_tty(false);
        }

        let host = cli.host.clone();
        let token = cli.token.clone();
        let api_url = cli.api_url.clone();

        Self {
            selector: args.selector().to_string(),
            http_client: Box::new(build_http_client),
            config: Box::new(move || {
                Config::load(host.as_deref(), token.as_deref(), api_url.as_deref())
            }),
            io,
            prompter: Box::new(DialoguerPrompter),
        }
    }
}

/// Write a failed command's error to the error stream
pub fn report_error(io: &mut IoStreams, err: &GistError) {
    if let Err(e) = writeln!(io.err(), "error: {}", err) {
        warn!("Failed to write error output: {}", e);
    }
}

/// Run the delete gist command
///
/// Succeeds silently; errors are returned for the caller to render.
pub async fn run_delete(opts: &DeleteOptions) -> Result<()> {
    let config = (opts.config)()?;
    let http = (opts.http_client)()?;
    let client = GistClient::new(http, &config);

    debug!("Resolving gist selector {:?}", opts.selector);
    let prompter = if opts.io.can_prompt() {
        Some(&*opts.prompter)
    } else {
        None
    };
    let gist_id = resolve_selector(
        &opts.selector,
        &client,
        prompter,
        !opts.io.is_stderr_tty(),
    )
    .await?;

    debug!("Deleting gist {} on {}", gist_id, client.host());
    client.delete_gist(&gist_id).await?;

    debug!("Deleted gist {}", gist_id);
    Ok(())
}
