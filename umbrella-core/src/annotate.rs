use chrono::{Datelike, NaiveDate};
use serde_json::Value;
use tracing::debug;

use crate::{
    error::{Result, UmbrellaError},
    model::{Stamp, weekday_name},
};

const MISSING_LIST: &str =
    "JSON object has no 'list' key. Check if the URL is correct and points to the 5 day forecast";

/// Returns a copy of `forecast` where every `list[*].dt_txt` string is
/// replaced by its [`Stamp`].
///
/// The input is left untouched. A single unparseable timestamp fails the
/// whole response. Feeding an already annotated tree back in is rejected,
/// because its `dt_txt` values are no longer strings.
pub fn annotate_weekdays(forecast: &Value) -> Result<Value> {
    let mut annotated = forecast.clone();

    let entries = annotated
        .get_mut("list")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| UmbrellaError::MissingKey(MISSING_LIST.to_string()))?;

    for (idx, entry) in entries.iter_mut().enumerate() {
        let dt_txt = entry
            .get("dt_txt")
            .and_then(Value::as_str)
            .ok_or_else(|| UmbrellaError::MissingKey(format!("list[{idx}].dt_txt")))?;

        let stamp = stamp_from_dt_txt(dt_txt)?;
        entry["dt_txt"] = serde_json::to_value(stamp)
            .map_err(|e| UmbrellaError::MalformedTimestamp(e.to_string()))?;
    }

    debug!(entries = entries.len(), "annotated forecast entries with weekdays");
    Ok(annotated)
}

/// Split a `YYYY-MM-DD HH:MM:SS` timestamp into weekday, hour and date.
pub fn stamp_from_dt_txt(dt_txt: &str) -> Result<Stamp> {
    let (date, hour) = dt_txt
        .split_once(' ')
        .ok_or_else(|| UmbrellaError::MalformedTimestamp(format!("'{dt_txt}' has no time part")))?;

    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| UmbrellaError::MalformedTimestamp(format!("'{dt_txt}': {e}")))?;

    Ok(Stamp {
        weekday: weekday_name(parsed.weekday()).to_string(),
        hour: hour.to_string(),
        date: date.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stamp_for_monday() {
        let stamp = stamp_from_dt_txt("2023-01-02 12:00:00").unwrap();
        assert_eq!(
            stamp,
            Stamp {
                weekday: "monday".to_string(),
                hour: "12:00:00".to_string(),
                date: "2023-01-02".to_string(),
            }
        );
    }

    #[test]
    fn stamp_rejects_bad_dates() {
        assert!(matches!(
            stamp_from_dt_txt("2023-02-30 00:00:00"),
            Err(UmbrellaError::MalformedTimestamp(_))
        ));
        assert!(matches!(
            stamp_from_dt_txt("2023-01-02T12:00:00"),
            Err(UmbrellaError::MalformedTimestamp(_))
        ));
    }

    #[test]
    fn annotates_every_entry_and_keeps_other_fields() {
        let forecast = json!({
            "cod": "200",
            "list": [
                { "dt_txt": "2023-01-01 21:00:00", "main": { "humidity": 81 } },
                { "dt_txt": "2023-01-02 00:00:00", "main": { "humidity": 77 } }
            ]
        });

        let annotated = annotate_weekdays(&forecast).unwrap();

        assert_eq!(annotated["cod"], "200");
        assert_eq!(
            annotated["list"][0]["dt_txt"],
            json!({ "weekday": "sunday", "hour": "21:00:00", "date": "2023-01-01" })
        );
        assert_eq!(annotated["list"][1]["dt_txt"]["weekday"], "monday");
        assert_eq!(annotated["list"][1]["main"]["humidity"], 77);
    }

    #[test]
    fn input_is_not_modified() {
        let forecast = json!({ "list": [ { "dt_txt": "2023-01-02 12:00:00" } ] });
        let before = forecast.clone();

        let _ = annotate_weekdays(&forecast).unwrap();

        assert_eq!(forecast, before);
    }

    #[test]
    fn missing_list_suggests_checking_url() {
        let err = annotate_weekdays(&json!({ "cod": "404" })).unwrap_err();
        match err {
            UmbrellaError::MissingKey(msg) => assert!(msg.contains("Check if the URL is correct")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn one_bad_entry_fails_the_whole_response() {
        let forecast = json!({
            "list": [
                { "dt_txt": "2023-01-02 12:00:00" },
                { "dt_txt": "not a date" }
            ]
        });
        assert!(matches!(annotate_weekdays(&forecast), Err(UmbrellaError::MalformedTimestamp(_))));
    }

    #[test]
    fn reannotating_is_rejected() {
        let forecast = json!({ "list": [ { "dt_txt": "2023-01-02 12:00:00" } ] });
        let once = annotate_weekdays(&forecast).unwrap();

        assert!(matches!(annotate_weekdays(&once), Err(UmbrellaError::MissingKey(_))));
    }
}
