//! Error types and the HTTP failure adapter.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Everything that can go wrong while serving a request.
///
/// Handlers propagate these untouched; the [`IntoResponse`] impl below is
/// the single adapter that collapses every variant into a plain-text 500.
#[derive(Error, Debug)]
pub enum CityScoutError {
    /// The outbound call never produced a response (DNS, TLS, connection).
    #[error("upstream request failed: {0}")]
    Transport(String),

    /// The provider answered with a non-2xx status.
    #[error("upstream API returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// Geocoding produced zero candidates for the query.
    #[error("no results found for '{0}'")]
    NoResults(String),

    /// A date or timestamp field was missing or did not parse.
    #[error("could not parse date '{0}'")]
    InvalidDate(String),

    /// The provider's JSON did not match the expected shape.
    #[error("unexpected upstream response shape: {0}")]
    Decode(String),
}

impl IntoResponse for CityScoutError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {self}");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_upstream_status_verbatim() {
        let err = CityScoutError::UpstreamStatus {
            status: 403,
            body: "invalid key".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "upstream API returned status 403: invalid key"
        );
    }

    #[test]
    fn display_names_the_failed_query() {
        let err = CityScoutError::NoResults("Atlantis".to_string());
        assert!(err.to_string().contains("Atlantis"));

        let err = CityScoutError::InvalidDate("tomorrow".to_string());
        assert!(err.to_string().contains("tomorrow"));
    }

    #[test]
    fn every_variant_collapses_to_500() {
        let errors = [
            CityScoutError::Transport("connection refused".to_string()),
            CityScoutError::UpstreamStatus {
                status: 502,
                body: String::new(),
            },
            CityScoutError::NoResults("x".to_string()),
            CityScoutError::InvalidDate("x".to_string()),
            CityScoutError::Decode("missing field".to_string()),
        ];
        for err in errors {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
