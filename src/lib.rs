//! `CityScout` - city exploration backend
//!
//! This library exposes a small HTTP API that forwards geocoding,
//! weather-forecast and hiking-trail queries to three third-party REST
//! APIs and reshapes each provider's JSON into the stable records
//! defined in [`models`].

pub mod api;
pub mod config;
pub mod error;
pub mod geocoding;
pub mod models;
pub mod trails;
pub mod weather;
pub mod web;

mod provider;

// Re-export core types for public API
pub use api::AppState;
pub use config::Config;
pub use error::CityScoutError;
pub use models::{DailyForecast, Location, Trail};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, CityScoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
