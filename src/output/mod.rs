//! Output formatting for CLI results

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod report;
pub mod table;

/// Print `value` as wrapped JSON, or run `pretty` for the human format
pub fn emit<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    pretty: impl FnOnce() -> String,
) -> Result<()> {
    let output = match format {
        OutputFormat::Json => json::format_json(value)?,
        OutputFormat::Pretty => pretty(),
    };
    println!("{}", output);
    Ok(())
}
