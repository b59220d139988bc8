//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tables with colored headings
    #[default]
    Pretty,
    /// JSON wrapped with timestamp and version metadata
    Json,
}
