//! Forward geocoding through the Mapbox places API.
//!
//! Resolves a free-text place name into coordinates plus a city name. Only
//! the top-ranked feature of the response is consulted; there is no
//! multi-candidate disambiguation.

use anyhow::Result;
use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::config::GeocodingConfig;
use crate::error::GeocodeError;
use crate::http;
use crate::models::ResolvedPlace;

/// Client for the Mapbox forward-geocoding endpoint
pub struct Geocoder {
    client: Client,
    config: GeocodingConfig,
}

impl Geocoder {
    pub fn new(config: GeocodingConfig) -> Result<Self> {
        Ok(Geocoder {
            client: http::build_client()?,
            config,
        })
    }

    /// Resolve a place name to coordinates and a city name
    pub fn resolve(&self, place_name: &str) -> Result<ResolvedPlace, GeocodeError> {
        let url = format!(
            "{}/geocoding/v5/mapbox.places/{}.json?access_token={}&types=place,poi",
            self.config.base_url,
            urlencoding::encode(place_name),
            self.config.access_token
        );

        let response: mapbox::Response = http::get_json(&self.client, &url)?;
        let feature = response.features.first().ok_or_else(|| {
            warn!("No location found for: {}", place_name);
            GeocodeError::NoMatch {
                query: place_name.to_string(),
            }
        })?;

        // Mapbox orders the center as [longitude, latitude]
        let [longitude, latitude] = feature.center;
        let place = ResolvedPlace {
            city: city_of(feature),
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
        };
        debug!(
            "Resolved '{}' to {} at ({}, {})",
            place_name, place.city, place.latitude, place.longitude
        );
        Ok(place)
    }
}

/// Pick the city name for a feature: the first place-tagged context entry
/// wins, then the feature's own label, then "Unknown".
fn city_of(feature: &mapbox::Feature) -> String {
    feature
        .context
        .iter()
        .find(|entry| entry.id.starts_with("place."))
        .and_then(|entry| entry.text.clone())
        .or_else(|| feature.text.clone().filter(|label| !label.is_empty()))
        .unwrap_or_else(|| "Unknown".to_string())
}

mod mapbox {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct Response {
        #[serde(default)]
        pub features: Vec<Feature>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Feature {
        pub center: [f64; 2],
        pub text: Option<String>,
        #[serde(default)]
        pub context: Vec<ContextEntry>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ContextEntry {
        #[serde(default)]
        pub id: String,
        pub text: Option<String>,
    }
}
