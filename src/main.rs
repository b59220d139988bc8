//! geobrief - cached country briefings from public data providers

use clap::Parser;

mod cache;
mod cli;
mod client;
mod collect;
mod config;
mod error;
mod models;
mod output;
mod report;

use cli::{CacheCommands, Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise warnings, or everything from this crate with `--debug`
fn init_logging(debug: bool) {
    let default_filter = if debug { "geobrief=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Collect { refresh } => cli::collect::run(&opts, refresh).await,
        Commands::Report {
            country,
            news,
            offline,
            refresh,
        } => cli::report::run(&opts, &country, news, offline, refresh).await,
        Commands::Countries => cli::countries::run(&opts),
        Commands::Cache(cache_cmd) => match cache_cmd {
            CacheCommands::Status => cli::cache::status(&opts),
            CacheCommands::Clear => cli::cache::clear(&opts),
            CacheCommands::Path => cli::cache::path(&opts),
        },
    }
}
