//! Display model implementations for table output

mod cache;
mod collect;
mod country;
mod report;

pub use cache::CacheEntryDisplay;
pub use collect::CollectSummaryDisplay;
pub use country::CountryDisplay;
pub use report::{FieldRow, NewsDisplay};
