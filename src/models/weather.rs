//! Daily forecast record

use serde::Serialize;

/// One forecast day as returned to API callers.
///
/// A `/weather` request yields one of these per upstream forecast day, in
/// upstream order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyForecast {
    /// Short text description of the day's weather
    pub forecast: String,
    /// Calendar date, rendered as `Sat Jan 09 2021`
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_stable_field_names() {
        let day = DailyForecast {
            forecast: "Light snow".to_string(),
            time: "Sat Jan 09 2021".to_string(),
        };

        let value = serde_json::to_value(&day).unwrap();
        assert_eq!(value["forecast"], "Light snow");
        assert_eq!(value["time"], "Sat Jan 09 2021");
    }
}
