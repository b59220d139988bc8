//! Current weather trait

use async_trait::async_trait;

use super::Payload;
use crate::client::models::Location;
use crate::error::Result;

#[async_trait]
pub trait WeatherApi: Send + Sync {
    /// Current conditions at the location's capital
    async fn get_weather(&self, location: &Location) -> Result<Option<Payload>>;
}
