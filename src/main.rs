use anyhow::Context;
use clap::Parser;
use std::io;

use post_manager::api::HttpPostApi;
use post_manager::cli::{self, Cli};
use post_manager::logging;
use post_manager::store::{PostStore, StoreOptions};
use post_manager::ui;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.command.is_some() {
        logging::init_command_logging();
    } else {
        logging::init_view_logging();
    }

    let config = cli.load_config().context("Failed to load configuration")?;
    let api = HttpPostApi::new(&config.api).context("Failed to build HTTP client")?;
    tracing::info!(url = %api.collection_url(), "Using posts API");
    let store = PostStore::new(api, StoreOptions::from(&config));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    match cli.command {
        None => {
            let _enter = runtime.enter();
            ui::runtime::run(store, config.ui.tick_rate()).context("Terminal view failed")?;
        }
        Some(command) => {
            let mut stdout = io::stdout().lock();
            let outcome = runtime
                .block_on(cli::run_command(&store, command, &mut stdout))
                .context("Failed to write output")?;
            if outcome.error().is_some() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
