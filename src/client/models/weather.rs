//! Current weather at a capital

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DecodeError, FromPayload};

/// Current conditions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherInfo {
    /// Observation time
    pub date_time: DateTime<Utc>,
    /// Offset of the location from UTC, in seconds
    pub utc_timezone: i32,
    /// Celsius
    pub temp: f64,
    /// hPa
    pub pressure: i64,
    /// Percent
    pub humidity: i64,
    /// Metres per second
    pub wind_speed: f64,
    pub description: String,
    /// Metres
    pub visibility: i64,
}

/// OpenWeatherMap current-weather response
#[derive(Debug, Deserialize)]
struct OpenWeatherResponse {
    dt: i64,
    timezone: i32,
    main: MainBlock,
    wind: WindBlock,
    weather: Vec<ConditionBlock>,
    visibility: i64,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    pressure: i64,
    humidity: i64,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    description: String,
}

impl FromPayload for WeatherInfo {
    fn from_payload(payload: &[u8]) -> Result<Self, DecodeError> {
        let response: OpenWeatherResponse = serde_json::from_slice(payload)?;

        let description = response
            .weather
            .into_iter()
            .next()
            .map(|c| c.description)
            .ok_or_else(|| DecodeError::new("weather conditions list is empty"))?;

        let date_time = DateTime::from_timestamp(response.dt, 0)
            .ok_or_else(|| DecodeError::new(format!("invalid observation time {}", response.dt)))?;

        Ok(Self {
            date_time,
            utc_timezone: response.timezone,
            temp: response.main.temp,
            pressure: response.main.pressure,
            humidity: response.main.humidity,
            wind_speed: response.wind.speed,
            description,
            visibility: response.visibility,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::WEATHER_PAYLOAD;

    #[test]
    fn test_decode_weather() {
        let weather = WeatherInfo::from_payload(WEATHER_PAYLOAD.as_bytes()).unwrap();

        assert_eq!(weather.temp, 13.92);
        assert_eq!(weather.pressure, 1023);
        assert_eq!(weather.humidity, 54);
        assert_eq!(weather.wind_speed, 4.63);
        assert_eq!(weather.description, "scattered clouds");
        assert_eq!(weather.visibility, 10000);
        assert_eq!(weather.utc_timezone, 7200);
        assert_eq!(weather.date_time.timestamp(), 1677332220);
    }

    #[test]
    fn test_decode_rejects_empty_conditions() {
        let payload = br#"{"dt": 1, "timezone": 0, "main": {"temp": 1.0, "pressure": 1, "humidity": 1},
            "wind": {"speed": 1.0}, "weather": [], "visibility": 1}"#;
        let err = WeatherInfo::from_payload(payload).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_decode_rejects_missing_block() {
        let payload = br#"{"dt": 1, "timezone": 0, "wind": {"speed": 1.0},
            "weather": [{"description": "x"}], "visibility": 1}"#;
        assert!(WeatherInfo::from_payload(payload).is_err());
    }
}
