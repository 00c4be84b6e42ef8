use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Weekday names in ISO order, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] =
    ["monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday"];

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_monday() as usize]
}

/// Inverse of [`weekday_name`]. Only the exact lowercase names are accepted.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    WEEKDAY_NAMES.iter().position(|n| *n == name).map(|i| WEEKDAYS[i])
}

/// Everything one run of the pipeline needs.
#[derive(Debug, Clone)]
pub struct UmbrellaRequest {
    pub city: String,
    pub country: String,
    pub api_key: String,
    /// Reference date; the five days after it are considered.
    pub today: NaiveDate,
}

/// Structured replacement for an entry's `dt_txt` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stamp {
    pub weekday: String,
    /// Time of day exactly as the API sent it, e.g. `12:00:00`.
    pub hour: String,
    /// Date exactly as the API sent it, e.g. `2023-01-02`.
    pub date: String,
}

/// Humidity readings grouped by weekday name.
///
/// All seven buckets always exist. Readings keep response order, and two
/// different calendar days with the same weekday share one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HumidityByWeekday {
    buckets: [Vec<u8>; 7],
}

impl HumidityByWeekday {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, day: Weekday, humidity: u8) {
        self.buckets[day.num_days_from_monday() as usize].push(humidity);
    }

    pub fn get(&self, day: Weekday) -> &[u8] {
        &self.buckets[day.num_days_from_monday() as usize]
    }

    /// Arithmetic mean of a bucket, `None` when it holds no readings.
    pub fn mean(&self, day: Weekday) -> Option<f64> {
        let bucket = self.get(day);
        if bucket.is_empty() {
            return None;
        }
        let sum: u32 = bucket.iter().map(|&h| u32::from(h)).sum();
        Some(f64::from(sum) / bucket.len() as f64)
    }

    /// Buckets in Monday-first order, keyed by weekday name.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[u8])> {
        WEEKDAY_NAMES.iter().copied().zip(self.buckets.iter().map(Vec::as_slice))
    }
}

/// Days that need an umbrella, in the order they occur.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UmbrellaDays {
    days: Vec<Weekday>,
}

impl UmbrellaDays {
    pub(crate) fn push(&mut self, day: Weekday) {
        self.days.push(day);
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.days.iter().map(|d| weekday_name(*d)).collect()
    }
}
