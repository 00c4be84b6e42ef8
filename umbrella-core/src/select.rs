use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use tracing::{debug, warn};

use crate::model::{HumidityByWeekday, UmbrellaDays, weekday_name};

/// Number of days after "today" that are considered.
pub const FORECAST_DAYS: usize = 5;

/// Mean humidity, in percent, from which a day needs an umbrella.
pub const HUMIDITY_THRESHOLD: f64 = 70.0;

pub const MAX_UMBRELLA_DAYS: usize = 3;

/// Weekdays of the [`FORECAST_DAYS`] calendar days strictly after `today`.
pub fn next_days(today: NaiveDate) -> [Weekday; FORECAST_DAYS] {
    let mut days = [Weekday::Mon; FORECAST_DAYS];
    let mut date = today;
    for day in days.iter_mut() {
        date += TimeDelta::days(1);
        *day = date.weekday();
    }
    days
}

/// Pick the upcoming days whose mean humidity reaches [`HUMIDITY_THRESHOLD`].
///
/// Days are checked in calendar order and selection stops after
/// [`MAX_UMBRELLA_DAYS`]. A weekday without any readings is skipped.
pub fn select_umbrella_days(today: NaiveDate, humidity: &HumidityByWeekday) -> UmbrellaDays {
    let mut selected = UmbrellaDays::default();

    for day in next_days(today) {
        if selected.len() == MAX_UMBRELLA_DAYS {
            break;
        }

        let Some(mean) = humidity.mean(day) else {
            warn!(weekday = weekday_name(day), "no forecast readings, skipping day");
            continue;
        };

        debug!(weekday = weekday_name(day), mean, "mean humidity");
        if mean >= HUMIDITY_THRESHOLD {
            selected.push(day);
        }
    }

    selected
}
