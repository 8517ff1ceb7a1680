//! Configuration from the process environment.
//!
//! API keys are deliberately not validated at startup: a missing key
//! produces an upstream URL the provider rejects at request time.

use std::env;

use anyhow::{Context, Result};

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 4000;

fn default_geocode_url() -> String {
    "https://eu1.locationiq.com".to_string()
}

fn default_weather_url() -> String {
    "https://api.weatherbit.io".to_string()
}

fn default_trail_url() -> String {
    "https://www.hikingproject.com".to_string()
}

/// Runtime configuration for the `CityScout` server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port
    pub port: u16,
    /// LocationIQ API key
    pub geocode_api_key: String,
    /// Weatherbit API key
    pub weather_api_key: String,
    /// Hiking Project API key
    pub trail_api_key: String,
    /// Base URL of the geocoding provider
    pub geocode_base_url: String,
    /// Base URL of the weather provider
    pub weather_base_url: String,
    /// Base URL of the trail provider
    pub trail_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            geocode_api_key: String::new(),
            weather_api_key: String::new(),
            trail_api_key: String::new(),
            geocode_base_url: default_geocode_url(),
            weather_base_url: default_weather_url(),
            trail_base_url: default_trail_url(),
        }
    }
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// `PORT` must parse as a port number when present; everything else
    /// falls back to a default.
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid PORT value '{raw}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            geocode_api_key: env::var("GEOCODE_API_KEY").unwrap_or_default(),
            weather_api_key: env::var("WEATHER_API_KEY").unwrap_or_default(),
            trail_api_key: env::var("TRAIL_API_KEY").unwrap_or_default(),
            geocode_base_url: env::var("GEOCODE_API_URL").unwrap_or_else(|_| default_geocode_url()),
            weather_base_url: env::var("WEATHER_API_URL").unwrap_or_else(|_| default_weather_url()),
            trail_base_url: env::var("TRAIL_API_URL").unwrap_or_else(|_| default_trail_url()),
        })
    }
}
