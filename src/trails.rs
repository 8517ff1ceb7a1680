//! Hiking Project trail-search client and the trail normalizer.

use reqwest::Client;
use serde::Deserialize;

use crate::{Result, error::CityScoutError, models, models::Trail, provider};

/// Client for the Hiking Project trail API.
#[derive(Debug, Clone)]
pub struct TrailsClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl TrailsClient {
    pub fn new(http: Client, api_key: String, base_url: String) -> Self {
        Self {
            http,
            api_key,
            base_url,
        }
    }

    /// Find trails near a coordinate pair.
    ///
    /// Latitude and longitude are passed through exactly as the caller
    /// supplied them; values the provider cannot use fail upstream.
    pub async fn near(&self, latitude: &str, longitude: &str) -> Result<Vec<UpstreamTrail>> {
        tracing::debug!("searching trails near ({latitude}, {longitude})");
        let url = format!(
            "{}/data/get-trails?lat={}&lon={}&key={}",
            self.base_url,
            urlencoding::encode(latitude),
            urlencoding::encode(longitude),
            self.api_key
        );
        let response: TrailsResponse = provider::fetch_json(&self.http, &url).await?;
        Ok(response.trails)
    }
}

/// Trail-search response envelope from the Hiking Project.
#[derive(Debug, Deserialize)]
pub struct TrailsResponse {
    pub trails: Vec<UpstreamTrail>,
}

/// One trail entry from the Hiking Project API.
///
/// The provider omits condition data for trails with no recent reports, so
/// those fields are optional here; everything else is required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamTrail {
    pub name: String,
    pub location: String,
    pub length: f64,
    pub stars: f64,
    pub stars_votes: u32,
    pub summary: String,
    pub url: String,
    pub condition_details: Option<String>,
    /// `YYYY-MM-DD HH:MM:SS`, absent when no conditions were reported
    pub condition_date: Option<String>,
}

impl Trail {
    /// Build one caller-facing record from one upstream trail entry.
    ///
    /// The condition timestamp is split into independent date and time
    /// strings; a trail without a parsable timestamp is an error.
    pub fn from_upstream(trail: UpstreamTrail) -> Result<Self> {
        let stamp = trail
            .condition_date
            .as_deref()
            .ok_or_else(|| CityScoutError::InvalidDate("<none>".to_string()))?;
        let reported = models::parse_condition_timestamp(stamp)?;

        Ok(Self {
            name: trail.name,
            location: trail.location,
            length: trail.length,
            stars: trail.stars,
            stars_votes: trail.stars_votes,
            summary: trail.summary,
            trail_url: trail.url,
            conditions: trail.condition_details,
            condition_date: models::humanize_date(reported.date()),
            condition_time: reported.time().format("%H:%M:%S").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn upstream_trail(condition_date: Option<&str>) -> UpstreamTrail {
        UpstreamTrail {
            name: "Rattlesnake Ledge".to_string(),
            location: "North Bend, Washington".to_string(),
            length: 4.3,
            stars: 4.4,
            stars_votes: 1056,
            summary: "An extremely popular out-and-back hike".to_string(),
            url: "https://www.hikingproject.com/trail/7021487".to_string(),
            condition_details: Some("Snow packed".to_string()),
            condition_date: condition_date.map(str::to_string),
        }
    }

    #[test]
    fn splits_condition_timestamp_into_date_and_time() {
        let trail = Trail::from_upstream(upstream_trail(Some("2021-01-04 14:13:14"))).unwrap();
        assert_eq!(trail.condition_date, "Mon Jan 04 2021");
        assert_eq!(trail.condition_time, "14:13:14");
        assert_eq!(trail.name, "Rattlesnake Ledge");
        assert_eq!(trail.trail_url, "https://www.hikingproject.com/trail/7021487");
        assert_eq!(trail.conditions.as_deref(), Some("Snow packed"));
    }

    #[test]
    fn recombined_halves_name_the_upstream_instant() {
        let trail = Trail::from_upstream(upstream_trail(Some("2021-01-04 14:13:14"))).unwrap();

        let recombined = NaiveDateTime::parse_from_str(
            &format!("{} {}", trail.condition_date, trail.condition_time),
            "%a %b %d %Y %H:%M:%S",
        )
        .unwrap();
        let original =
            NaiveDateTime::parse_from_str("2021-01-04 14:13:14", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(recombined, original);
    }

    #[test]
    fn missing_condition_timestamp_is_an_error() {
        let err = Trail::from_upstream(upstream_trail(None)).unwrap_err();
        assert!(matches!(err, CityScoutError::InvalidDate(_)));
    }

    #[test]
    fn unparsable_condition_timestamp_is_an_error() {
        let err = Trail::from_upstream(upstream_trail(Some("yesterday"))).unwrap_err();
        assert!(matches!(err, CityScoutError::InvalidDate(_)));
    }

    #[test]
    fn deserializes_hiking_project_payload() {
        let payload = r#"{
            "trails": [
                {
                    "id": 7021487,
                    "name": "Rattlesnake Ledge",
                    "location": "North Bend, Washington",
                    "length": 4.3,
                    "stars": 4.4,
                    "starsVotes": 1056,
                    "summary": "An extremely popular out-and-back hike.",
                    "url": "https://www.hikingproject.com/trail/7021487",
                    "conditionDetails": null,
                    "conditionDate": "2021-01-04 14:13:14"
                }
            ]
        }"#;

        let response: TrailsResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.trails.len(), 1);
        let trail = &response.trails[0];
        assert_eq!(trail.stars_votes, 1056);
        assert!(trail.condition_details.is_none());
        assert_eq!(trail.condition_date.as_deref(), Some("2021-01-04 14:13:14"));
    }
}
