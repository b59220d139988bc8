//! Exchange rate trait

use async_trait::async_trait;

use super::Payload;
use crate::error::Result;

#[async_trait]
pub trait CurrencyApi: Send + Sync {
    /// Latest rates quoted against `base`
    async fn get_rates(&self, base: &str) -> Result<Option<Payload>>;
}
