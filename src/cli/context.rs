//! Command execution context
//!
//! Loads configuration once, opens the cache and wires providers so each
//! command only deals with its own logic.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::CacheStore;
use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::Providers;
use crate::collect::{Orchestrator, RunSummary};
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, cache and runtime options
pub struct CommandContext {
    /// Loaded and validated configuration
    pub config: Config,
    /// Shared cache store, Arc-wrapped for the collectors
    pub store: Arc<CacheStore>,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config, resolve the cache directory and open the cache
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let cache_dir = resolve_cache_dir(opts, &config)?;
        log::debug!("Using cache at {}", cache_dir.display());
        let store = Arc::new(CacheStore::open_at(&cache_dir)?);

        Ok(Self {
            config,
            store,
            format: opts.format,
        })
    }

    /// Orchestrator over the real HTTP providers
    pub fn orchestrator(&self, force_refresh: bool) -> Result<Orchestrator> {
        let providers = Providers::from_config(&self.config)?;
        Ok(Orchestrator::new(
            &self.config,
            self.store.clone(),
            providers,
            force_refresh,
        ))
    }

    /// Run a collection pass behind a spinner (drawn only on a terminal)
    pub async fn collect(&self, orchestrator: &Orchestrator) -> RunSummary {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message("Collecting country data...");

        let summary = orchestrator.run().await;

        spinner.finish_and_clear();
        summary
    }
}

/// CLI/env override, then the config file, then the platform default
pub fn resolve_cache_dir(opts: &GlobalOptions, config: &Config) -> Result<PathBuf> {
    if let Some(dir) = opts.cache_dir_ref() {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = &config.cache_dir {
        return Ok(dir.clone());
    }
    Ok(CacheStore::default_dir()?)
}
