//! LocationIQ forward-geocoding client and the location normalizer.

use reqwest::Client;
use serde::Deserialize;

use crate::{Result, error::CityScoutError, models::Location, provider};

/// Client for the LocationIQ search API.
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl GeocodingClient {
    pub fn new(http: Client, api_key: String, base_url: String) -> Self {
        Self {
            http,
            api_key,
            base_url,
        }
    }

    /// Forward-geocode a free-text city name.
    ///
    /// Returns every candidate the provider offers, best match first.
    pub async fn search(&self, city: &str) -> Result<Vec<GeoResult>> {
        tracing::debug!("geocoding {city:?}");
        let url = format!(
            "{}/v1/search.php?key={}&q={}&format=json",
            self.base_url,
            self.api_key,
            urlencoding::encode(city)
        );
        provider::fetch_json(&self.http, &url).await
    }
}

/// One geocoding candidate from LocationIQ.
///
/// Coordinates arrive as decimal-degree strings and stay that way.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoResult {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

impl Location {
    /// Build the caller-facing record from the best (first) candidate.
    ///
    /// Remaining candidates are discarded; an empty list is an error, never
    /// a record with absent fields.
    pub fn from_geo_results(search_query: &str, results: &[GeoResult]) -> Result<Self> {
        let best = results
            .first()
            .ok_or_else(|| CityScoutError::NoResults(search_query.to_string()))?;

        Ok(Self {
            search_query: search_query.to_string(),
            formatted_query: best.display_name.clone(),
            latitude: best.lat.clone(),
            longitude: best.lon.clone(),
        })
    }
}
