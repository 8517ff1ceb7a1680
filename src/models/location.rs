//! Location record for geocoded cities

use serde::Serialize;

/// Geocoded location as returned to API callers.
///
/// `latitude` and `longitude` stay in the decimal-degree string form the
/// geocoding provider uses; they are passed through, never parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    /// The caller's city query, verbatim
    pub search_query: String,
    /// The provider's canonical display name
    pub formatted_query: String,
    pub latitude: String,
    pub longitude: String,
}
