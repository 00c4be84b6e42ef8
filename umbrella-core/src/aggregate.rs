use serde_json::Value;
use tracing::debug;

use crate::{
    error::{Result, UmbrellaError},
    model::{HumidityByWeekday, weekday_from_name},
};

/// Collect `main.humidity` of every annotated entry into its weekday bucket.
///
/// Expects the output of [`crate::annotate::annotate_weekdays`].
pub fn humidity_by_weekday(annotated: &Value) -> Result<HumidityByWeekday> {
    let entries = annotated
        .get("list")
        .and_then(Value::as_array)
        .ok_or_else(|| UmbrellaError::MissingKey("list".to_string()))?;

    let mut humidity = HumidityByWeekday::new();

    for (idx, entry) in entries.iter().enumerate() {
        let name = entry
            .pointer("/dt_txt/weekday")
            .and_then(Value::as_str)
            .ok_or_else(|| UmbrellaError::MissingKey(format!("list[{idx}].dt_txt.weekday")))?;

        let day = weekday_from_name(name).ok_or_else(|| {
            UmbrellaError::MissingKey(format!("list[{idx}].dt_txt.weekday: unknown weekday '{name}'"))
        })?;

        let value = entry
            .pointer("/main/humidity")
            .and_then(Value::as_u64)
            .filter(|h| *h <= 100)
            .ok_or_else(|| UmbrellaError::MissingKey(format!("list[{idx}].main.humidity")))?;

        // bounded by the filter above
        humidity.push(day, value as u8);
    }

    debug!(entries = entries.len(), "grouped humidity by weekday");
    Ok(humidity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use serde_json::json;

    fn entry(weekday: &str, humidity: u64) -> Value {
        json!({
            "dt_txt": { "weekday": weekday, "hour": "00:00:00", "date": "2023-01-02" },
            "main": { "humidity": humidity }
        })
    }

    #[test]
    fn buckets_keep_response_order() {
        let annotated = json!({ "list": [entry("monday", 80), entry("friday", 40), entry("monday", 60)] });

        let humidity = humidity_by_weekday(&annotated).unwrap();

        assert_eq!(humidity.get(Weekday::Mon), &[80, 60]);
        assert_eq!(humidity.get(Weekday::Fri), &[40]);
        assert_eq!(humidity.mean(Weekday::Mon), Some(70.0));
        assert_eq!(humidity.iter().count(), 7);
        assert!(humidity.get(Weekday::Sun).is_empty());
    }

    #[test]
    fn empty_list_yields_empty_buckets() {
        let humidity = humidity_by_weekday(&json!({ "list": [] })).unwrap();
        assert!(humidity.iter().all(|(_, bucket)| bucket.is_empty()));
    }

    #[test]
    fn missing_humidity_is_missing_key() {
        let annotated = json!({
            "list": [ { "dt_txt": { "weekday": "monday", "hour": "00:00:00", "date": "2023-01-02" } } ]
        });

        match humidity_by_weekday(&annotated).unwrap_err() {
            UmbrellaError::MissingKey(key) => assert_eq!(key, "list[0].main.humidity"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unannotated_entries_are_rejected() {
        let raw = json!({ "list": [ { "dt_txt": "2023-01-02 00:00:00", "main": { "humidity": 50 } } ] });
        assert!(matches!(humidity_by_weekday(&raw), Err(UmbrellaError::MissingKey(_))));
    }

    #[test]
    fn out_of_range_humidity_is_rejected() {
        let annotated = json!({ "list": [entry("monday", 101)] });
        assert!(matches!(humidity_by_weekday(&annotated), Err(UmbrellaError::MissingKey(_))));
    }
}
