//! gistctl - main entry point

use clap::Parser;
use log::{debug, info};

use gistctl::{report_error, run_delete, Cli, Command, DeleteOptions, IoStreams};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting gistctl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: host={:?}, batch={}, command={:?}",
        cli.host, cli.batch, cli.command
    );

    match &cli.command {
        Command::Delete(args) => {
            let mut opts = DeleteOptions::from_cli(&cli, args, IoStreams::system());
            if let Err(e) = run_delete(&opts).await {
                report_error(&mut opts.io, &e);
                std::process::exit(1);
            }
        }
    }
}
