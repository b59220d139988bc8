//! Report command implementation

use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::output::{emit, report::render};
use crate::report::LocationReport;

pub async fn run(
    opts: &GlobalOptions,
    country: &str,
    news_limit: usize,
    offline: bool,
    refresh: bool,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let orchestrator = ctx.orchestrator(refresh)?;

    if offline {
        log::debug!("Offline report, skipping collection");
    } else {
        ctx.collect(&orchestrator).await;
    }

    let report = LocationReport::assemble(&orchestrator, country, news_limit)?;
    emit(ctx.format, &report.view(), || render(&report))
}
