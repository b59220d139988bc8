//! Cache entry rows

use chrono::Utc;
use serde::Serialize;
use tabled::Tabled;

use crate::cache::storage::EntryInfo;
use crate::output::formatters::{format_age, format_size, format_timestamp_local};

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CacheEntryDisplay {
    #[tabled(rename = "KEY")]
    pub key: String,

    #[tabled(rename = "WRITTEN")]
    pub written_at: String,

    #[tabled(rename = "AGE")]
    pub age: String,

    #[tabled(rename = "SIZE")]
    pub size: String,
}

impl From<&EntryInfo> for CacheEntryDisplay {
    fn from(entry: &EntryInfo) -> Self {
        Self {
            key: entry.key.to_string(),
            written_at: format_timestamp_local(entry.written_at),
            age: format_age(Utc::now() - entry.written_at),
            size: format_size(entry.size_bytes),
        }
    }
}
