//! Cache management commands

use colored::Colorize;

use crate::cli::context::resolve_cache_dir;
use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::models::CacheEntryDisplay;
use crate::output::formatters::{format_size, format_timestamp_local};
use crate::output::table::format_table;

/// Show cache status/statistics
pub fn status(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let stats = ctx.store.stats()?;
    let entries = ctx.store.entries()?;
    let path = ctx.store.root().display().to_string();

    match ctx.format {
        OutputFormat::Json => {
            let per_category: serde_json::Map<String, serde_json::Value> = stats
                .per_category
                .iter()
                .map(|(category, count)| (category.to_string(), (*count).into()))
                .collect();
            let json = serde_json::json!({
                "path": path,
                "total_entries": stats.total_entries,
                "total_size_bytes": stats.total_size_bytes,
                "total_size_human": format_size(stats.total_size_bytes),
                "oldest_entry": stats.oldest_entry.map(|t| t.to_rfc3339()),
                "newest_entry": stats.newest_entry.map(|t| t.to_rfc3339()),
                "per_category": per_category,
                "entries": entries
                    .iter()
                    .map(CacheEntryDisplay::from)
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Pretty => {
            println!("{}", "Cache Status".bold());
            println!("────────────────────────────────────────");
            println!("Location:       {}", path);
            println!("Entries:        {}", stats.total_entries);
            println!("Total size:     {}", format_size(stats.total_size_bytes));

            if let Some(oldest) = stats.oldest_entry {
                println!("Oldest entry:   {}", format_timestamp_local(oldest));
            }
            if let Some(newest) = stats.newest_entry {
                println!("Newest entry:   {}", format_timestamp_local(newest));
            }

            if !entries.is_empty() {
                let rows: Vec<CacheEntryDisplay> =
                    entries.iter().map(CacheEntryDisplay::from).collect();
                println!("\n{}", format_table(&rows));
            }
        }
    }

    Ok(())
}

/// Clear all cache entries
pub fn clear(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let stats = ctx.store.clear_all()?;

    match ctx.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "entries_removed": stats.entries_removed,
                "success": true,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Pretty => {
            if stats.entries_removed > 0 {
                println!("Cleared {} cache entries", stats.entries_removed);
            } else {
                println!("Cache was already empty");
            }
        }
    }

    Ok(())
}

/// Show cache path without creating it
pub fn path(opts: &GlobalOptions) -> Result<()> {
    let config = Config::load_at(opts.config_ref())?;
    let path = resolve_cache_dir(opts, &config)?;
    println!("{}", path.display());
    Ok(())
}
