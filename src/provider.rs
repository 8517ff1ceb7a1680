//! Shared outbound HTTP plumbing for the upstream provider APIs.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{Result, error::CityScoutError};

/// Issue one GET to a fully-formed upstream URL and decode the JSON body.
///
/// No retries and no caching; every invocation is a fresh outbound call.
/// A non-2xx status is surfaced with the upstream's status and body text.
pub(crate) async fn fetch_json<T: DeserializeOwned>(http: &Client, url: &str) -> Result<T> {
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| CityScoutError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| CityScoutError::Transport(e.to_string()))?;

    if !status.is_success() {
        return Err(CityScoutError::UpstreamStatus {
            status: status.as_u16(),
            body: truncate_body(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| CityScoutError::Decode(e.to_string()))
}

/// Keep upstream error bodies bounded; they end up in the 500 response text.
fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
