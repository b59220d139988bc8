//! News feed trait

use async_trait::async_trait;

use super::Payload;
use crate::error::Result;

#[async_trait]
pub trait NewsApi: Send + Sync {
    /// Latest articles mentioning `country`, newest first
    async fn get_news(&self, country: &str) -> Result<Option<Payload>>;
}
