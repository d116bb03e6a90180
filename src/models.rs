//! Normalized data model shared by the adapters, the orchestrator, and the
//! wire contract.
//!
//! Coordinates are carried as strings: they are display values extracted from
//! upstream payloads and no arithmetic is ever performed on them.

use serde::{Deserialize, Serialize};

/// A geocoded place: coordinates plus the resolved city name
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    pub city: String,
    pub latitude: String,
    pub longitude: String,
}

/// Wheelchair-boarding attribute of a stop, as coded by the transit provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelchairBoarding {
    /// Code 0: no information available
    NoInfo,
    /// Code 1: accessible
    Accessible,
    /// Code 2: not accessible
    Inaccessible,
}

impl WheelchairBoarding {
    /// Map the provider's numeric code; unrecognized codes count as no info
    #[must_use]
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => WheelchairBoarding::Accessible,
            2 => WheelchairBoarding::Inaccessible,
            _ => WheelchairBoarding::NoInfo,
        }
    }

    /// Only an explicit accessibility code counts as accessible
    #[must_use]
    pub fn is_accessible(self) -> bool {
        self == WheelchairBoarding::Accessible
    }
}

/// A transit stop as returned by the stop-search adapter
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub name: String,
    pub wheelchair_boarding: WheelchairBoarding,
}

/// Current weather normalized to imperial units and integer readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Temperature in °F, rounded
    pub temp: i32,
    /// Feels-like temperature in °F, rounded
    pub feels_like: i32,
    /// Primary condition label, e.g. "Clouds"
    pub condition: String,
    /// Capitalized human-readable description
    pub description: String,
    /// Relative humidity percentage
    pub humidity: u8,
    /// Wind speed in mph, rounded, zero when the provider omits it
    pub wind_speed: i32,
}

/// Location section of the success record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub city: String,
    pub lat: String,
    pub lon: String,
}

/// Station section of the success record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationDetails {
    pub name: String,
    pub wheelchair_accessible: bool,
}

/// The fully assembled success record for one place-name query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopReport {
    pub place_name: String,
    pub location: PlaceDetails,
    pub station: StationDetails,
    pub weather: WeatherSnapshot,
    /// Generation time, formatted `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
}
