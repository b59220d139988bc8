//! Status command implementation

use colored::Colorize;

use crate::cache::{CacheStore, Category};
use crate::cli::context::resolve_cache_dir;
use crate::cli::{GlobalOptions, OutputFormat};
use crate::config::{Config, ProviderConfig};
use crate::error::Result;
use crate::output::formatters::{format_size, format_timestamp_local};

/// Display configuration and cache status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let config_path = Config::resolve_path(opts.config_ref())?;
    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            println!("\nRun {} to create a configuration file.", "geobrief init".cyan());
            return Ok(());
        }
    };
    let cache_dir = resolve_cache_dir(opts, &config)?;
    let providers = provider_list(&config);

    if opts.format == OutputFormat::Json {
        let json = serde_json::json!({
            "config_file": config_path.display().to_string(),
            "config_file_exists": config_path.exists(),
            "cache_dir": cache_dir.display().to_string(),
            "region": config.collect.region,
            "base_currency": config.collect.base_currency,
            "providers": providers
                .iter()
                .map(|(name, p)| (name.to_string(), p.api_key.is_some().into()))
                .collect::<serde_json::Map<String, serde_json::Value>>(),
            "ttl_secs": Category::ALL
                .iter()
                .map(|c| (c.to_string(), config.ttl.for_category(*c).as_secs().into()))
                .collect::<serde_json::Map<String, serde_json::Value>>(),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!("{}\n", "geobrief Configuration Status".bold());

    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not created, using defaults)".dimmed()
        );
    }
    println!(
        "Region: {}   Base currency: {}",
        config.collect.region.bold(),
        config.collect.base_currency.to_uppercase().bold()
    );
    println!();

    for (name, provider) in &providers {
        if provider.api_key.is_some() {
            println!("{} {} API key configured", "✓".green(), name);
        } else {
            println!("{} {} API key not configured", "✗".red(), name);
        }
        if let Some(url) = &provider.base_url {
            println!("  {} custom endpoint: {}", "○".dimmed(), url.cyan());
        }
    }
    if providers.iter().any(|(_, p)| p.api_key.is_none()) {
        println!("  → Run 'geobrief init' to configure");
    }

    println!();
    println!("Cache: {}", cache_dir.display().to_string().cyan());
    if cache_dir.exists() {
        let store = CacheStore::open_at(&cache_dir)?;
        let stats = store.stats()?;
        println!(
            "  {} entries, {}",
            stats.total_entries,
            format_size(stats.total_size_bytes)
        );
        if let Some(newest) = stats.newest_entry {
            println!("  last write {}", format_timestamp_local(newest));
        }
    } else {
        println!("  {} nothing collected yet", "○".dimmed());
    }

    println!();
    for category in Category::ALL {
        println!(
            "TTL {:<15} {}s",
            category.as_str(),
            config.ttl.for_category(category).as_secs()
        );
    }

    Ok(())
}

fn provider_list(config: &Config) -> [(&'static str, &ProviderConfig); 4] {
    let p = &config.providers;
    [
        ("country", &p.country),
        ("currency", &p.currency),
        ("weather", &p.weather),
        ("news", &p.news),
    ]
}
