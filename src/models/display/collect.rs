//! Collection summary rows

use tabled::Tabled;

use crate::collect::CollectSummary;

#[derive(Debug, Clone, Tabled)]
pub struct CollectSummaryDisplay {
    #[tabled(rename = "CATEGORY")]
    pub category: String,

    #[tabled(rename = "FRESH")]
    pub fresh: usize,

    #[tabled(rename = "REFRESHED")]
    pub refreshed: usize,

    #[tabled(rename = "KEPT STALE")]
    pub kept: usize,
}

impl From<&CollectSummary> for CollectSummaryDisplay {
    fn from(summary: &CollectSummary) -> Self {
        Self {
            category: summary.category.to_string(),
            fresh: summary.fresh,
            refreshed: summary.refreshed,
            kept: summary.kept,
        }
    }
}
