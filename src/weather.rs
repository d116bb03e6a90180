//! Current-weather retrieval from OpenWeatherMap.
//!
//! Readings are requested in imperial units and normalized into a
//! [`WeatherSnapshot`]: temperatures and wind speed rounded to integers, the
//! description capitalized. A payload without the measurement block (or with
//! no condition entries) is reported as incomplete rather than patched over
//! with placeholder values.

use anyhow::Result;
use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::config::WeatherConfig;
use crate::error::WeatherError;
use crate::http;
use crate::models::WeatherSnapshot;

pub struct WeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> Result<Self> {
        Ok(WeatherClient {
            client: http::build_client()?,
            config,
        })
    }

    /// Current conditions for a city
    pub fn current(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        let place = format!("{},{}", city, self.config.country);
        let url = format!(
            "{}/data/2.5/weather?q={}&appid={}&units=imperial",
            self.config.base_url,
            urlencoding::encode(&place),
            self.config.api_key
        );

        let response: openweather::Response = http::get_json(&self.client, &url)?;
        let snapshot = normalize(response).ok_or_else(|| {
            warn!("No weather data found for: {}", city);
            WeatherError::Incomplete {
                city: city.to_string(),
            }
        })?;
        debug!("Weather for {}: {} at {}°F", city, snapshot.condition, snapshot.temp);
        Ok(snapshot)
    }
}

/// Convert a raw payload into a snapshot, or `None` when the measurement
/// block or the condition list is missing.
fn normalize(response: openweather::Response) -> Option<WeatherSnapshot> {
    let measurements = response.main?;
    let condition = response.weather.first()?;

    Some(WeatherSnapshot {
        temp: measurements.temp.round() as i32,
        feels_like: measurements.feels_like.round() as i32,
        condition: condition.main.clone(),
        description: capitalize(&condition.description),
        humidity: measurements.humidity,
        wind_speed: response
            .wind
            .and_then(|wind| wind.speed)
            .unwrap_or(0.0)
            .round() as i32,
    })
}

/// First character uppercased, the rest lowercased
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

mod openweather {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct Response {
        pub main: Option<Measurements>,
        #[serde(default)]
        pub weather: Vec<Condition>,
        pub wind: Option<Wind>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Measurements {
        pub temp: f64,
        pub feels_like: f64,
        pub humidity: u8,
    }

    #[derive(Debug, Deserialize)]
    pub struct Condition {
        pub main: String,
        pub description: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct Wind {
        pub speed: Option<f64>,
    }
}
