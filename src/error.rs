//! Error types for the lookup pipeline.
//!
//! Each adapter has its own error enum tagging the failure reason; the
//! orchestrator-level [`LookupError`] wraps them and is the single point
//! translating failures into the fixed user-facing messages.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure classes of the shared HTTP-JSON fetcher
#[derive(Error, Debug)]
pub enum FetchError {
    /// Upstream answered with a non-success HTTP status
    #[error("HTTP error: {status}")]
    Http { status: StatusCode },

    /// Connection, DNS, TLS, or timeout failure
    #[error("network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// Response body was not valid JSON for the expected shape
    #[error("invalid JSON response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

/// Geocoding stage failures
#[derive(Error, Debug)]
pub enum GeocodeError {
    /// The provider returned no feature for the query
    #[error("no location found for: {query}")]
    NoMatch { query: String },

    /// The request itself failed
    #[error(transparent)]
    Upstream(#[from] FetchError),
}

/// Transit-stop stage failures
#[derive(Error, Debug)]
pub enum StopError {
    /// The provider returned no stop records near the coordinates
    #[error("no station found near ({latitude}, {longitude})")]
    NoneNearby { latitude: String, longitude: String },

    /// The request itself failed
    #[error(transparent)]
    Upstream(#[from] FetchError),
}

/// Weather stage failures
#[derive(Error, Debug)]
pub enum WeatherError {
    /// The provider answered but the payload lacks the core measurements
    #[error("incomplete weather data for: {city}")]
    Incomplete { city: String },

    /// The request itself failed
    #[error(transparent)]
    Upstream(#[from] FetchError),
}

/// Top-level lookup failure, one variant per pipeline stage
#[derive(Error, Debug)]
pub enum LookupError {
    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    #[error(transparent)]
    Station(#[from] StopError),

    #[error(transparent)]
    Weather(#[from] WeatherError),

    /// Failure outside the typed stages, e.g. a panicked lookup task
    #[error("unexpected error: {message}")]
    Unexpected { message: String },
}

impl LookupError {
    /// Create an unexpected error from any description
    pub fn unexpected<S: Into<String>>(message: S) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Get the user-facing message for this failure
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            LookupError::Geocode(_) => "Location not found".to_string(),
            LookupError::Station(_) => "No nearby stations found".to_string(),
            LookupError::Weather(_) => "Weather data not available".to_string(),
            LookupError::Unexpected { message } => format!("An error occurred: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocode_failures_share_user_message() {
        let no_match = LookupError::from(GeocodeError::NoMatch {
            query: "Atlantis".to_string(),
        });
        assert_eq!(no_match.user_message(), "Location not found");

        let upstream = LookupError::from(GeocodeError::Upstream(FetchError::Http {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }));
        assert_eq!(upstream.user_message(), "Location not found");
    }

    #[test]
    fn test_station_user_message() {
        let err = LookupError::from(StopError::NoneNearby {
            latitude: "42.35".to_string(),
            longitude: "-71.06".to_string(),
        });
        assert_eq!(err.user_message(), "No nearby stations found");
    }

    #[test]
    fn test_weather_user_message() {
        let err = LookupError::from(WeatherError::Incomplete {
            city: "Boston".to_string(),
        });
        assert_eq!(err.user_message(), "Weather data not available");
    }

    #[test]
    fn test_unexpected_carries_description() {
        let err = LookupError::unexpected("task panicked");
        assert_eq!(err.user_message(), "An error occurred: task panicked");
    }
}
