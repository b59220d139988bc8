//! Report rows

use tabled::Tabled;

use crate::client::models::NewsItem;
use crate::output::formatters::format_timestamp_local;

/// A labelled value in a report section
#[derive(Debug, Clone, Tabled)]
pub struct FieldRow {
    #[tabled(rename = "FIELD")]
    pub field: String,

    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl FieldRow {
    pub fn new(field: &str, value: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Tabled)]
pub struct NewsDisplay {
    #[tabled(rename = "PUBLISHED")]
    pub published: String,

    #[tabled(rename = "SOURCE")]
    pub source: String,

    #[tabled(rename = "TITLE")]
    pub title: String,
}

impl From<&NewsItem> for NewsDisplay {
    fn from(item: &NewsItem) -> Self {
        Self {
            published: format_timestamp_local(item.published_at),
            source: item.source.clone(),
            title: item.title.clone(),
        }
    }
}
