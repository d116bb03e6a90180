//! The lookup pipeline.
//!
//! Chains the geocoder, the transit-stop search, and the weather client for
//! one place-name query and assembles the combined report. Each stage is a
//! precondition for the next, so the first failure ends the query; no partial
//! report is ever produced.

use anyhow::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::LookupError;
use crate::geocoding::Geocoder;
use crate::models::{PlaceDetails, StationDetails, StopReport};
use crate::transit::TransitClient;
use crate::weather::WeatherClient;

/// Sequences the three upstream adapters for one place-name query
pub struct StopFinder {
    geocoder: Geocoder,
    transit: TransitClient,
    weather: WeatherClient,
}

impl StopFinder {
    /// Build the adapter clients from the application config.
    ///
    /// The adapters use blocking HTTP clients, so this must be called outside
    /// the async runtime.
    pub fn new(config: AppConfig) -> Result<Self> {
        Ok(StopFinder {
            geocoder: Geocoder::new(config.geocoding)?,
            transit: TransitClient::new(config.transit)?,
            weather: WeatherClient::new(config.weather)?,
        })
    }

    /// Resolve a place name to its nearest stop and the current weather there
    pub fn find_stop_near(&self, place_name: &str) -> Result<StopReport, LookupError> {
        info!("Looking up '{}'", place_name);

        let place = self.geocoder.resolve(place_name)?;
        let stop = self
            .transit
            .nearest_stop(&place.latitude, &place.longitude)?;
        let weather = self.weather.current(&place.city)?;
        debug!("Assembling report for '{}'", place_name);

        Ok(StopReport {
            place_name: place_name.to_string(),
            location: PlaceDetails {
                city: place.city,
                lat: place.latitude,
                lon: place.longitude,
            },
            station: StationDetails {
                name: stop.name,
                wheelchair_accessible: stop.wheelchair_boarding.is_accessible(),
            },
            weather,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        })
    }
}

/// Wire shape for one query: either an error object or the full report,
/// never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LookupResponse {
    Failure { error: String },
    Success(StopReport),
}

impl LookupResponse {
    pub fn failure<S: Into<String>>(message: S) -> Self {
        LookupResponse::Failure {
            error: message.into(),
        }
    }
}

impl From<Result<StopReport, LookupError>> for LookupResponse {
    fn from(result: Result<StopReport, LookupError>) -> Self {
        match result {
            Ok(report) => LookupResponse::Success(report),
            Err(error) => LookupResponse::failure(error.user_message()),
        }
    }
}
