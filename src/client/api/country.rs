//! Country registry trait

use async_trait::async_trait;

use super::Payload;
use crate::error::Result;

#[async_trait]
pub trait CountryApi: Send + Sync {
    /// Every country of the configured region
    async fn get_countries(&self) -> Result<Option<Payload>>;
}
