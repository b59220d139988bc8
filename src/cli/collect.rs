//! Collect command implementation

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions};
use crate::collect::RunSummary;
use crate::error::Result;
use crate::models::CollectSummaryDisplay;
use crate::output::{emit, table::format_table};

pub async fn run(opts: &GlobalOptions, refresh: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let orchestrator = ctx.orchestrator(refresh)?;
    let summary = ctx.collect(&orchestrator).await;

    emit(ctx.format, &summary, || render(&summary))
}

fn render(summary: &RunSummary) -> String {
    let rows: Vec<CollectSummaryDisplay> = summary
        .categories()
        .into_iter()
        .map(CollectSummaryDisplay::from)
        .collect();

    let kept: usize = rows.iter().map(|r| r.kept).sum();
    let footer = if kept > 0 {
        format!(
            "{} {} entries could not be refreshed and keep their previous data (run with --debug for details)",
            "⚠".yellow(),
            kept
        )
    } else {
        format!("{} Cache is up to date", "✓".green())
    };

    format!(
        "{}\n{} locations\n{}",
        format_table(&rows),
        summary.locations,
        footer
    )
}
