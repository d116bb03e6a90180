//! `StopScout` - nearest MBTA stop and current weather for any place
//!
//! This library resolves a free-text place name through Mapbox geocoding,
//! finds the closest MBTA stop, fetches current conditions from
//! OpenWeatherMap, and assembles the three answers into one report.

pub mod config;
pub mod error;
pub mod geocoding;
mod http;
pub mod lookup;
pub mod models;
pub mod transit;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::AppConfig;
pub use error::{FetchError, GeocodeError, LookupError, StopError, WeatherError};
pub use geocoding::Geocoder;
pub use lookup::{LookupResponse, StopFinder};
pub use models::{ResolvedPlace, Stop, StopReport, WeatherSnapshot, WheelchairBoarding};
pub use transit::TransitClient;
pub use weather::WeatherClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
