//! Weatherbit daily-forecast client and the weather normalizer.

use reqwest::Client;
use serde::Deserialize;

use crate::{Result, models, models::DailyForecast, provider};

/// Client for the Weatherbit daily-forecast API.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    pub fn new(http: Client, api_key: String, base_url: String) -> Self {
        Self {
            http,
            api_key,
            base_url,
        }
    }

    /// Fetch the provider's daily-forecast window for a city.
    ///
    /// The number of days is controlled by Weatherbit, not by us.
    pub async fn daily_forecast(&self, city: &str) -> Result<Vec<ForecastDay>> {
        tracing::debug!("fetching forecast for {city:?}");
        let url = format!(
            "{}/v2.0/forecast/daily?city={}&key={}",
            self.base_url,
            urlencoding::encode(city),
            self.api_key
        );
        let response: ForecastResponse = provider::fetch_json(&self.http, &url).await?;
        tracing::debug!("received {} forecast days", response.data.len());
        Ok(response.data)
    }
}

/// Forecast response envelope from Weatherbit.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub data: Vec<ForecastDay>,
}

/// One forecast day from Weatherbit.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDay {
    /// Local calendar date, `YYYY-MM-DD`
    pub valid_date: String,
    pub weather: WeatherCondition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    pub description: String,
}

impl DailyForecast {
    /// Build one caller-facing record from one upstream forecast day.
    pub fn from_forecast_day(day: &ForecastDay) -> Result<Self> {
        let date = models::parse_calendar_date(&day.valid_date)?;
        Ok(Self {
            forecast: day.weather.description.clone(),
            time: models::humanize_date(date),
        })
    }
}
