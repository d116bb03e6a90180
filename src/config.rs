//! Configuration for the upstream API clients and the web server.
//!
//! Everything is read once at startup from environment variables (a local
//! `.env` file is loaded first when present) and handed to the adapters'
//! constructors; nothing reads the environment afterwards.

use std::env;

use anyhow::{Context, Result, bail};

/// Root configuration, one section per adapter plus the server
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Mapbox geocoding settings
    pub geocoding: GeocodingConfig,
    /// MBTA stop-search settings
    pub transit: TransitConfig,
    /// OpenWeatherMap settings
    pub weather: WeatherConfig,
    /// Web server settings
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct GeocodingConfig {
    /// Mapbox access token
    pub access_token: String,
    /// Base URL of the geocoding API
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct TransitConfig {
    /// MBTA API key
    pub api_key: String,
    /// Base URL of the stops API
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key
    pub api_key: String,
    /// Base URL of the weather API
    pub base_url: String,
    /// Country qualifier appended to city queries
    pub country: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the web server listens on
    pub port: u16,
}

// Default value functions
fn default_geocoding_base_url() -> String {
    "https://api.mapbox.com".to_string()
}

fn default_transit_base_url() -> String {
    "https://api-v3.mbta.com".to_string()
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_weather_country() -> String {
    "US".to_string()
}

fn default_server_port() -> u16 {
    3000
}

fn env_or(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

impl AppConfig {
    /// Load configuration from environment variables and validate it
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(port) => port.parse().context("PORT env var must be a number")?,
            Err(_) => default_server_port(),
        };

        let config = Self {
            geocoding: GeocodingConfig {
                access_token: env::var("MAPBOX_TOKEN")
                    .context("Missing MAPBOX_TOKEN env var")?,
                base_url: env_or("MAPBOX_BASE_URL", default_geocoding_base_url()),
            },
            transit: TransitConfig {
                api_key: env::var("MBTA_API_KEY").context("Missing MBTA_API_KEY env var")?,
                base_url: env_or("MBTA_BASE_URL", default_transit_base_url()),
            },
            weather: WeatherConfig {
                api_key: env::var("WEATHER_API_KEY")
                    .context("Missing WEATHER_API_KEY env var")?,
                base_url: env_or("WEATHER_BASE_URL", default_weather_base_url()),
                country: env_or("WEATHER_COUNTRY", default_weather_country()),
            },
            server: ServerConfig { port },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate credentials and base URLs
    pub fn validate(&self) -> Result<()> {
        if self.geocoding.access_token.is_empty() {
            bail!("MAPBOX_TOKEN cannot be empty");
        }
        if self.transit.api_key.is_empty() {
            bail!("MBTA_API_KEY cannot be empty");
        }
        if self.weather.api_key.is_empty() {
            bail!("WEATHER_API_KEY cannot be empty");
        }

        for base_url in [
            &self.geocoding.base_url,
            &self.transit.base_url,
            &self.weather.base_url,
        ] {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                bail!("Base URL must be a valid HTTP or HTTPS URL, got: {base_url}");
            }
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            geocoding: GeocodingConfig {
                access_token: String::new(),
                base_url: default_geocoding_base_url(),
            },
            transit: TransitConfig {
                api_key: String::new(),
                base_url: default_transit_base_url(),
            },
            weather: WeatherConfig {
                api_key: String::new(),
                base_url: default_weather_base_url(),
                country: default_weather_country(),
            },
            server: ServerConfig {
                port: default_server_port(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.geocoding.access_token = "pk.test".to_string();
        config.transit.api_key = "mbta-test".to_string();
        config.weather.api_key = "owm-test".to_string();
        config
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.geocoding.base_url, "https://api.mapbox.com");
        assert_eq!(config.transit.base_url, "https://api-v3.mbta.com");
        assert_eq!(config.weather.base_url, "https://api.openweathermap.org");
        assert_eq!(config.weather.country, "US");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_validation_accepts_populated_config() {
        assert!(populated_config().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_credentials() {
        let mut config = populated_config();
        config.transit.api_key = String::new();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("MBTA_API_KEY"));
    }

    #[test]
    fn test_validation_rejects_non_http_base_url() {
        let mut config = populated_config();
        config.weather.base_url = "ftp://example.com".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Base URL"));
    }

    #[test]
    fn test_from_env_reads_variables() {
        // SAFETY: Test environment, setting test values only
        unsafe {
            env::set_var("MAPBOX_TOKEN", "pk.env-test");
            env::set_var("MBTA_API_KEY", "mbta-env-test");
            env::set_var("WEATHER_API_KEY", "owm-env-test");
            env::set_var("MBTA_BASE_URL", "http://localhost:9999");
        }

        let config = AppConfig::from_env().expect("config should load");

        // SAFETY: Test cleanup
        unsafe {
            env::remove_var("MAPBOX_TOKEN");
            env::remove_var("MBTA_API_KEY");
            env::remove_var("WEATHER_API_KEY");
            env::remove_var("MBTA_BASE_URL");
        }

        assert_eq!(config.geocoding.access_token, "pk.env-test");
        assert_eq!(config.transit.base_url, "http://localhost:9999");
        assert_eq!(config.weather.base_url, "https://api.openweathermap.org");
    }
}
