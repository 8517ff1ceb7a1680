//! Hiking trail record

use serde::Serialize;

/// One hiking trail as returned to API callers.
///
/// `condition_date` and `condition_time` are the two halves of the
/// provider's single condition timestamp; recombined they name the same
/// instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trail {
    pub name: String,
    pub location: String,
    /// Trail length in miles
    pub length: f64,
    /// Average user rating
    pub stars: f64,
    /// Number of ratings behind `stars`
    pub stars_votes: u32,
    pub summary: String,
    pub trail_url: String,
    /// Latest reported conditions; `null` when the provider has none
    pub conditions: Option<String>,
    /// Date half of the condition timestamp, as `Mon Jan 04 2021`
    pub condition_date: String,
    /// Time half of the condition timestamp, as `14:13:14`
    pub condition_time: String,
}
