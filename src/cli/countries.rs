//! Countries command implementation

use crate::cli::{CommandContext, GlobalOptions};
use crate::collect::Collector;
use crate::error::Result;
use crate::models::CountryDisplay;
use crate::output::{emit, table::format_table};

/// List the cached country list without contacting any provider
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let orchestrator = ctx.orchestrator(false)?;

    let mut countries = orchestrator.country().read(&())?;
    countries.sort_by(|a, b| a.name.cmp(&b.name));

    let rows: Vec<CountryDisplay> = countries.iter().map(CountryDisplay::from).collect();
    emit(ctx.format, &rows, || format_table(&rows))
}
