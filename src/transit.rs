//! Nearest-stop search against the MBTA v3 API.

use anyhow::Result;
use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::config::TransitConfig;
use crate::error::StopError;
use crate::http;
use crate::models::{Stop, WheelchairBoarding};

pub struct TransitClient {
    client: Client,
    config: TransitConfig,
}

impl TransitClient {
    pub fn new(config: TransitConfig) -> Result<Self> {
        Ok(TransitClient {
            client: http::build_client()?,
            config,
        })
    }

    /// Nearest stop to the given coordinates, using the provider's distance sort
    pub fn nearest_stop(&self, latitude: &str, longitude: &str) -> Result<Stop, StopError> {
        let url = format!(
            "{}/stops?api_key={}&filter[latitude]={}&filter[longitude]={}&sort=distance",
            self.config.base_url, self.config.api_key, latitude, longitude
        );

        let response: mbta::Response = http::get_json(&self.client, &url)?;
        let record = response.data.first().ok_or_else(|| {
            warn!("No station found near coordinates: {}, {}", latitude, longitude);
            StopError::NoneNearby {
                latitude: latitude.to_string(),
                longitude: longitude.to_string(),
            }
        })?;

        let code = record.attributes.wheelchair_boarding.unwrap_or(0);
        let stop = Stop {
            name: record.attributes.name.clone(),
            wheelchair_boarding: WheelchairBoarding::from_code(code),
        };
        debug!("Nearest stop to ({}, {}) is {}", latitude, longitude, stop.name);
        Ok(stop)
    }
}

mod mbta {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct Response {
        #[serde(default)]
        pub data: Vec<StopRecord>,
    }

    #[derive(Debug, Deserialize)]
    pub struct StopRecord {
        pub attributes: Attributes,
    }

    #[derive(Debug, Deserialize)]
    pub struct Attributes {
        pub name: String,
        pub wheelchair_boarding: Option<u8>,
    }
}
