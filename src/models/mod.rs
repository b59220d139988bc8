//! Display models for CLI output
//!
//! Row types that turn decoded records and cache metadata into table rows.

pub mod display;

pub use display::{
    CacheEntryDisplay, CollectSummaryDisplay, CountryDisplay, FieldRow, NewsDisplay,
};
