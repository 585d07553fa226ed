//! Weather and marine condition providers
//!
//! The request layer talks to a [`ConditionsProvider`]; the live implementation
//! fetches current weather from OpenWeatherMap, while the demo provider serves
//! static/randomized payloads when no API key is configured. Marine data has no
//! free upstream, so both providers synthesize it the same way.

use async_trait::async_trait;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::error::ShorelineError;
use crate::models::{Coordinate, TideStatus};
use crate::Result;

/// Current weather at a coordinate, units already converted for display
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    /// Air temperature in Celsius
    pub temperature_c: f64,
    /// Apparent temperature in Celsius
    pub feels_like_c: f64,
    /// Relative humidity percentage
    pub humidity: u8,
    /// Sustained wind speed in km/h
    pub wind_speed_kmh: f64,
    /// 16-point cardinal wind direction
    pub wind_direction: String,
    /// Short condition summary, e.g. "Clear"
    pub conditions: String,
    pub uv_index: u8,
}

/// Current sea state at a coordinate
#[derive(Debug, Clone, Serialize)]
pub struct MarineReport {
    /// Significant wave height in meters
    pub wave_height_m: f64,
    /// 8-point cardinal wave direction
    pub wave_direction: String,
    /// Water temperature in Celsius
    pub water_temp_c: f64,
    pub tide_status: TideStatus,
    /// Surface current speed in km/h
    pub current_speed_kmh: f64,
}

/// Source of current weather and marine conditions
#[async_trait]
pub trait ConditionsProvider: Send + Sync {
    async fn weather(&self, coordinate: &Coordinate) -> Result<WeatherReport>;
    async fn marine(&self, coordinate: &Coordinate) -> Result<MarineReport>;
}

/// Convert wind degrees to a 16-point cardinal direction
#[must_use]
pub fn wind_direction_to_cardinal(degrees: f64) -> &'static str {
    const DIRECTIONS: [&str; 16] = [
        "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
        "NW", "NNW",
    ];
    let index = (degrees / 22.5).round() as usize % 16;
    DIRECTIONS[index]
}

fn demo_marine_report() -> MarineReport {
    let mut rng = rand::rng();
    const WAVE_DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    MarineReport {
        wave_height_m: (rng.random_range(1.0..3.0) * 10.0_f64).round() / 10.0,
        wave_direction: WAVE_DIRECTIONS[rng.random_range(0..WAVE_DIRECTIONS.len())].to_string(),
        water_temp_c: 27.0 + rng.random_range(0.0..3.0),
        tide_status: if rng.random_bool(0.5) {
            TideStatus::High
        } else {
            TideStatus::Low
        },
        current_speed_kmh: (rng.random_range(0.0..5.0) * 10.0_f64).round() / 10.0,
    }
}

/// Static provider used when no weather API key is configured
pub struct DemoProvider;

#[async_trait]
impl ConditionsProvider for DemoProvider {
    async fn weather(&self, coordinate: &Coordinate) -> Result<WeatherReport> {
        coordinate.validate()?;
        Ok(WeatherReport {
            temperature_c: 30.0,
            feels_like_c: 32.0,
            humidity: 75,
            wind_speed_kmh: 18.0,
            wind_direction: "NE".to_string(),
            conditions: "Clear".to_string(),
            uv_index: 8,
        })
    }

    async fn marine(&self, coordinate: &Coordinate) -> Result<MarineReport> {
        coordinate.validate()?;
        Ok(demo_marine_report())
    }
}

/// Live weather client backed by the OpenWeatherMap current-weather API
pub struct OpenWeatherMapClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherMapClient {
    #[must_use]
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl ConditionsProvider for OpenWeatherMapClient {
    async fn weather(&self, coordinate: &Coordinate) -> Result<WeatherReport> {
        coordinate.validate()?;
        let url = format!(
            "{}/weather?lat={}&lon={}&units=metric&appid={}",
            self.base_url, coordinate.latitude, coordinate.longitude, self.api_key
        );
        debug!("Fetching current weather from OpenWeatherMap");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ShorelineError::api(format!("weather request failed: {e}")))?;
        if !response.status().is_success() {
            return Err(ShorelineError::api(format!(
                "weather request returned status {}",
                response.status()
            )));
        }
        let payload: openweathermap::CurrentResponse = response
            .json()
            .await
            .map_err(|e| ShorelineError::api(format!("malformed weather response: {e}")))?;

        Ok(WeatherReport {
            temperature_c: payload.main.temp.round(),
            feels_like_c: payload.main.feels_like.round(),
            humidity: payload.main.humidity,
            // API reports m/s
            wind_speed_kmh: (payload.wind.speed * 3.6).round(),
            wind_direction: wind_direction_to_cardinal(payload.wind.deg).to_string(),
            conditions: payload
                .weather
                .first()
                .map(|condition| condition.main.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            // The basic API has no UV endpoint; served as a fixed estimate
            uv_index: 8,
        })
    }

    async fn marine(&self, coordinate: &Coordinate) -> Result<MarineReport> {
        coordinate.validate()?;
        Ok(demo_marine_report())
    }
}

/// OpenWeatherMap API response structures
mod openweathermap {
    use serde::Deserialize;

    /// Current-weather response (the subset the app reads)
    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        pub main: MainData,
        pub wind: WindData,
        pub weather: Vec<ConditionData>,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainData {
        pub temp: f64,
        pub feels_like: f64,
        pub humidity: u8,
    }

    #[derive(Debug, Deserialize)]
    pub struct WindData {
        /// Wind speed in m/s
        pub speed: f64,
        /// Wind direction in degrees
        #[serde(default)]
        pub deg: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct ConditionData {
        pub main: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "N")]
    #[case(11.0, "N")]
    #[case(12.0, "NNE")]
    #[case(45.0, "NE")]
    #[case(90.0, "E")]
    #[case(180.0, "S")]
    #[case(270.0, "W")]
    #[case(350.0, "N")]
    #[case(360.0, "N")]
    fn test_wind_direction_to_cardinal(#[case] degrees: f64, #[case] expected: &str) {
        assert_eq!(wind_direction_to_cardinal(degrees), expected);
    }

    #[tokio::test]
    async fn test_demo_weather_payload() {
        let provider = DemoProvider;
        let coordinate = Coordinate::new(13.0827, 80.2707).unwrap();
        let report = provider.weather(&coordinate).await.unwrap();
        assert_eq!(report.temperature_c, 30.0);
        assert_eq!(report.wind_direction, "NE");
        assert_eq!(report.conditions, "Clear");
    }

    #[tokio::test]
    async fn test_demo_marine_ranges() {
        let provider = DemoProvider;
        let coordinate = Coordinate::new(13.0827, 80.2707).unwrap();
        for _ in 0..20 {
            let report = provider.marine(&coordinate).await.unwrap();
            assert!((1.0..=3.0).contains(&report.wave_height_m));
            assert!((27.0..30.0).contains(&report.water_temp_c));
            assert!((0.0..=5.0).contains(&report.current_speed_kmh));
        }
    }

    #[tokio::test]
    async fn test_invalid_coordinate_rejected_before_fetch() {
        let provider = DemoProvider;
        let invalid = Coordinate {
            latitude: 95.0,
            longitude: 0.0,
        };
        assert!(matches!(
            provider.weather(&invalid).await,
            Err(ShorelineError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_current_response_parsing() {
        let payload = r#"{
            "main": {"temp": 29.4, "feels_like": 33.1, "humidity": 74},
            "wind": {"speed": 5.1, "deg": 40},
            "weather": [{"main": "Clouds"}]
        }"#;
        let parsed: openweathermap::CurrentResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.main.humidity, 74);
        assert_eq!(parsed.wind.deg, 40.0);
        assert_eq!(parsed.weather[0].main, "Clouds");
    }
}
