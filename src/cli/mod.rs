//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod args;
pub mod cache;
pub mod collect;
pub mod context;
pub mod countries;
pub mod init;
pub mod report;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

use crate::report::DEFAULT_NEWS_LIMIT;

/// geobrief - cached country briefings: currency, weather and news
#[derive(Parser, Debug)]
#[command(name = "geobrief")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, json)
    #[arg(
        long,
        global = true,
        env = "GEOBRIEF_FORMAT",
        default_value = "pretty",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "GEOBRIEF_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override cache directory
    #[arg(long, global = true, env = "GEOBRIEF_CACHE_DIR", hide_env = true)]
    pub cache_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true, env = "GEOBRIEF_DEBUG", hide_env = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set provider API keys and collection settings
    Init,

    /// Show configuration and cache status
    Status,

    /// Refresh every stale cache entry
    Collect {
        /// Treat every entry as stale
        #[arg(long)]
        refresh: bool,
    },

    /// Briefing for one country
    #[command(after_help = "EXAMPLES:\n  \
            geobrief report Aland              # Collect what is stale, then report\n  \
            geobrief report AX --news 5        # By alpha-2 code, five headlines\n  \
            geobrief report Aland --offline    # Cache only, no network\n  \
            geobrief report Aland --format json")]
    Report {
        /// Country name, alpha-2 code or alternative spelling
        country: String,

        /// Number of news items to show
        #[arg(long, default_value_t = DEFAULT_NEWS_LIMIT)]
        news: usize,

        /// Read the cache only, never contact providers
        #[arg(long, conflicts_with = "refresh")]
        offline: bool,

        /// Treat every entry as stale before reporting
        #[arg(long)]
        refresh: bool,
    },

    /// List countries in the cached country list
    Countries,

    /// Manage the local cache
    #[command(subcommand)]
    Cache(CacheCommands),
}

#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show cache statistics and entries
    Status,

    /// Remove every cached entry
    Clear,

    /// Print the cache directory
    Path,
}
