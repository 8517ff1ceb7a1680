//! HTTP routes and request handlers.

use axum::{
    Router,
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::Json,
    routing::get,
};
use serde::Deserialize;

use crate::{
    Result,
    config::Config,
    geocoding::GeocodingClient,
    models::{DailyForecast, Location, Trail},
    trails::TrailsClient,
    weather::WeatherClient,
};

/// Per-request collaborators shared by every handler.
///
/// Holds one client per upstream provider; nothing here is mutable, so
/// concurrent requests share it freely.
#[derive(Clone)]
pub struct AppState {
    pub geocoding: GeocodingClient,
    pub weather: WeatherClient,
    pub trails: TrailsClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::new();
        Self {
            geocoding: GeocodingClient::new(
                http.clone(),
                config.geocode_api_key.clone(),
                config.geocode_base_url.clone(),
            ),
            weather: WeatherClient::new(
                http.clone(),
                config.weather_api_key.clone(),
                config.weather_base_url.clone(),
            ),
            trails: TrailsClient::new(
                http,
                config.trail_api_key.clone(),
                config.trail_base_url.clone(),
            ),
        }
    }
}

/// Assemble the route table.
///
/// Any unmatched path, and any unsupported method on a known path, falls
/// through to the plain-text 404 handler.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/location", get(location))
        .route("/weather", get(weather))
        .route("/trails", get(trails))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state)
}

// Query parameters deserialize with defaults on purpose: a missing value
// reaches the upstream API as an empty string and fails there, the same
// way an unchecked parameter would.

#[derive(Debug, Deserialize)]
struct LocationParams {
    #[serde(default)]
    city: String,
}

#[derive(Debug, Deserialize)]
struct WeatherParams {
    #[serde(default)]
    search_query: String,
}

#[derive(Debug, Deserialize)]
struct TrailsParams {
    #[serde(default)]
    latitude: String,
    #[serde(default)]
    longitude: String,
}

async fn home() -> &'static str {
    "Welcome to CityScout! Try /location, /weather or /trails."
}

async fn location(
    State(state): State<AppState>,
    Query(params): Query<LocationParams>,
) -> Result<Json<Location>> {
    let candidates = state.geocoding.search(&params.city).await?;
    let record = Location::from_geo_results(&params.city, &candidates)?;
    Ok(Json(record))
}

async fn weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<Vec<DailyForecast>>> {
    let days = state.weather.daily_forecast(&params.search_query).await?;
    let records = days
        .iter()
        .map(DailyForecast::from_forecast_day)
        .collect::<Result<Vec<_>>>()?;
    Ok(Json(records))
}

async fn trails(
    State(state): State<AppState>,
    Query(params): Query<TrailsParams>,
) -> Result<Json<Vec<Trail>>> {
    let found = state.trails.near(&params.latitude, &params.longitude).await?;
    let records = found
        .into_iter()
        .map(Trail::from_upstream)
        .collect::<Result<Vec<_>>>()?;
    Ok(Json(records))
}

async fn not_found(uri: Uri) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("no route for {}", uri.path()))
}
